// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Artifact text templates.
//!
//! The synthesizers decide *what* goes into an artifact (which columns, which
//! directives, in which order); a [`Template`] decides *how* it is spelled.
//!
//! # Architecture
//!
//! ```text
//! audit::synthesize ──► BaseUnit ───┐
//!                                   ├──► Template ──► String
//! entity::synthesize ─► EntityUnit ─┘
//! ```
//!
//! [`FluentTemplate`] is the default and renders fluent
//! `builder.Property(...)` configuration classes.

mod fluent;

pub use fluent::FluentTemplate;

use crate::rules::Directive;

/// Directives for one column, keyed by the member they configure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnUnit {
    /// Property or audit field name (e.g., `CreatedAt`).
    pub member: String,

    /// Directives, ending with [`Directive::ColumnName`].
    pub directives: Vec<Directive>
}

/// Everything needed to render the shared base artifact.
#[derive(Debug, Clone, Copy)]
pub struct BaseUnit<'a> {
    /// Base type name (e.g., `AuditEntityConfiguration`).
    pub name: &'a str,

    /// Namespace the base is placed in.
    pub namespace: &'a str,

    /// Audit columns in resource order.
    pub columns: &'a [ColumnUnit]
}

/// Everything needed to render one entity artifact.
#[derive(Debug, Clone, Copy)]
pub struct EntityUnit<'a> {
    /// Artifact type name (e.g., `UserCommonConfiguration`).
    pub name: &'a str,

    /// Shared base type name the artifact inherits from.
    pub base_name: &'a str,

    /// Namespace the artifact is placed in.
    pub namespace: &'a str,

    /// Entity type name (e.g., `User`).
    pub entity: &'a str,

    /// Namespace of the entity type.
    pub entity_namespace: &'a str,

    /// Eligible columns in declaration order.
    pub columns: &'a [ColumnUnit]
}

/// Text syntax of generated artifacts.
///
/// Implementations must be pure: the same unit always renders to the same
/// text.
pub trait Template {
    /// Suffix appended to artifact names to form file names (e.g., `.g.cs`).
    fn file_suffix(&self) -> &str;

    /// Render the shared base artifact.
    fn render_base(&self, unit: &BaseUnit<'_>) -> String;

    /// Render an entity artifact.
    fn render_entity(&self, unit: &EntityUnit<'_>) -> String;
}

impl<T: Template + ?Sized> Template for &T {
    fn file_suffix(&self) -> &str {
        (**self).file_suffix()
    }

    fn render_base(&self, unit: &BaseUnit<'_>) -> String {
        (**self).render_base(unit)
    }

    fn render_entity(&self, unit: &EntityUnit<'_>) -> String {
        (**self).render_entity(unit)
    }
}
