// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declaration metadata consumed by the generator.
//!
//! These records are the only thing the core pipeline sees. They are built
//! either by hand or by the [`discover`](crate::discover) adapter from Rust
//! sources.
//!
//! # Structure
//!
//! ```text
//! CandidateDeclaration
//! ├── name, namespace, marked
//! └── target: Option<EntityType>
//!     ├── name, namespace
//!     └── properties: Vec<PropertyDescriptor>
//!         ├── name, ty: TypeClass
//!         ├── is_public, is_static
//!         └── annotations: Vec<Annotation>
//! ```

/// A type discovered as a configuration candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateDeclaration {
    /// Declared name of the configuration type (e.g., `UserConfiguration`).
    pub name: String,

    /// Namespace the configuration type lives in.
    ///
    /// Generated artifacts for this candidate are placed in it.
    pub namespace: String,

    /// Entity type the candidate configures, if it could be resolved.
    pub target: Option<EntityType>,

    /// Whether the candidate carries the generation marker itself.
    pub marked: bool
}

impl CandidateDeclaration {
    /// Create a marked candidate without a target.
    #[must_use]
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name:      name.into(),
            namespace: namespace.into(),
            target:    None,
            marked:    true
        }
    }

    /// Set the resolved target entity.
    #[must_use]
    pub fn with_target(mut self, target: EntityType) -> Self {
        self.target = Some(target);
        self
    }

    /// Set the marker flag.
    #[must_use]
    pub fn marked(mut self, marked: bool) -> Self {
        self.marked = marked;
        self
    }
}

/// The data type whose properties are mapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityType {
    /// Type name (e.g., `User`).
    pub name: String,

    /// Namespace of the entity, imported by its configuration artifact.
    pub namespace: String,

    /// Properties in declaration order.
    pub properties: Vec<PropertyDescriptor>
}

impl EntityType {
    /// Create an entity without properties.
    #[must_use]
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name:       name.into(),
            namespace:  namespace.into(),
            properties: Vec::new()
        }
    }

    /// Append a property.
    #[must_use]
    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties.push(property);
        self
    }
}

/// Declared type classification of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClass {
    /// Text.
    String,

    /// Date and time.
    DateTime,

    /// 32-bit signed integer.
    Int32,

    /// 64-bit float.
    Double,

    /// Boolean.
    Boolean,

    /// Any enumeration.
    Enum,

    /// GUID / UUID.
    Guid,

    /// Anything the generator does not map.
    Other
}

impl TypeClass {
    /// Whether properties of this class get a configuration statement.
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// A declarative directive attached to a property.
///
/// Length annotations carry `None` when they were not declared with exactly
/// one argument; the rule resolver ignores those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// Value must be present.
    Required,

    /// Maximum length.
    MaxLength(Option<usize>),

    /// String length limit.
    StringLength(Option<usize>),

    /// Optimistic concurrency token.
    ConcurrencyCheck,

    /// Row version / timestamp.
    Timestamp,

    /// Explicit column name and/or column type.
    Column {
        /// Column name override.
        name:      Option<String>,
        /// Store type override (e.g., `"jsonb"`).
        type_name: Option<String>
    },

    /// Annotation the generator does not interpret.
    Other(String)
}

/// One mappable member of an entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDescriptor {
    /// Property name (e.g., `CreatedAt`).
    pub name: String,

    /// Type classification.
    pub ty: TypeClass,

    /// Publicly accessible.
    pub is_public: bool,

    /// Type-level rather than instance-level.
    pub is_static: bool,

    /// Annotations in declaration order.
    pub annotations: Vec<Annotation>
}

impl PropertyDescriptor {
    /// Create a public instance property without annotations.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeClass) -> Self {
        Self {
            name: name.into(),
            ty,
            is_public: true,
            is_static: false,
            annotations: Vec::new()
        }
    }

    /// Append an annotation.
    #[must_use]
    pub fn with(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Set visibility.
    #[must_use]
    pub fn public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    /// Mark as static.
    #[must_use]
    pub fn static_member(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    /// Check if a flag-like annotation is present.
    #[must_use]
    pub fn has(&self, annotation: &Annotation) -> bool {
        self.annotations.iter().any(|a| a == annotation)
    }

    /// First explicit column annotation, as `(name, type_name)`.
    #[must_use]
    pub fn column(&self) -> Option<(Option<&str>, Option<&str>)> {
        self.annotations.iter().find_map(|a| match a {
            Annotation::Column {
                name,
                type_name
            } => Some((name.as_deref(), type_name.as_deref())),
            _ => None
        })
    }

    /// Length of the first max-length annotation, if declared with one argument.
    #[must_use]
    pub fn max_length(&self) -> Option<usize> {
        self.annotations
            .iter()
            .find_map(|a| match a {
                Annotation::MaxLength(len) => Some(*len),
                _ => None
            })
            .flatten()
    }

    /// Length of the first string-length annotation, if declared with one
    /// argument.
    #[must_use]
    pub fn string_length(&self) -> Option<usize> {
        self.annotations
            .iter()
            .find_map(|a| match a {
                Annotation::StringLength(len) => Some(*len),
                _ => None
            })
            .flatten()
    }
}
