// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared audit base synthesis.
//!
//! The audit base is configured from a line-oriented resource rather than
//! from entity properties, so every entity gets identical bookkeeping
//! columns:
//!
//! ```text
//! datetime:CreatedAt
//! string:CreatedBy
//! datetime:UpdatedAt
//! string:ModifiedBy
//! ```
//!
//! # Keyword Mapping
//!
//! | Keyword (any case) | Directive |
//! |--------------------|-----------|
//! | `datetime` | column type `timestamp` |
//! | `string` | max length `255` |
//! | `int` | column type `integer` |
//! | `bool` | column type `boolean` |
//! | anything else | none |
//!
//! Every field also gets its column name. Lines that are blank, have no `:`,
//! have more than one `:` or an empty field name are ignored.

use tracing::debug;

use crate::{
    artifact::{ArtifactRole, GeneratedArtifact},
    naming::to_storage_name,
    rules::Directive,
    template::{BaseUnit, ColumnUnit, Template}
};

/// Declared type of an audit field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditFieldType {
    /// `datetime`
    DateTime,
    /// `string`
    String,
    /// `int`
    Int,
    /// `bool`
    Bool,
    /// Unrecognized keyword, kept verbatim.
    Other(String)
}

impl AuditFieldType {
    /// Match a keyword case-insensitively.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.to_lowercase().as_str() {
            "datetime" => Self::DateTime,
            "string" => Self::String,
            "int" => Self::Int,
            "bool" => Self::Bool,
            _ => Self::Other(keyword.to_string())
        }
    }

    /// Type directive for this keyword, if any.
    #[must_use]
    pub fn directive(&self) -> Option<Directive> {
        match self {
            Self::DateTime => Some(Directive::ColumnType("timestamp".to_string())),
            Self::String => Some(Directive::MaxLength(255)),
            Self::Int => Some(Directive::ColumnType("integer".to_string())),
            Self::Bool => Some(Directive::ColumnType("boolean".to_string())),
            Self::Other(_) => None
        }
    }
}

/// One `type:name` line of the audit resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditFieldSpec {
    /// Declared type.
    pub ty: AuditFieldType,

    /// Field name (e.g., `CreatedAt`).
    pub name: String
}

impl AuditFieldSpec {
    /// Parse a single resource line.
    ///
    /// Returns `None` for lines that must be ignored.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        if line.trim().is_empty() {
            return None;
        }

        let mut parts = line.split(':');
        let (keyword, name) = match (parts.next(), parts.next(), parts.next()) {
            (Some(keyword), Some(name), None) => (keyword.trim(), name.trim()),
            _ => return None
        };

        if name.is_empty() {
            return None;
        }

        Some(Self {
            ty:   AuditFieldType::from_keyword(keyword),
            name: name.to_string()
        })
    }

    /// Directives for this field: type first, then column name.
    #[must_use]
    pub fn directives(&self) -> Vec<Directive> {
        self.ty
            .directive()
            .into_iter()
            .chain(std::iter::once(Directive::ColumnName(to_storage_name(
                &self.name
            ))))
            .collect()
    }
}

/// Parse all valid specs from resource text, in order.
#[must_use]
pub fn parse_resource(text: &str) -> Vec<AuditFieldSpec> {
    text.lines()
        .filter_map(|line| {
            let spec = AuditFieldSpec::parse(line);
            if spec.is_none() && !line.trim().is_empty() {
                debug!(line, "ignoring malformed audit field line");
            }
            spec
        })
        .collect()
}

/// Synthesize the shared base artifact.
///
/// A missing resource yields a base with an empty configuration body.
pub fn synthesize<T: Template + ?Sized>(
    name: &str,
    namespace: &str,
    resource: Option<&str>,
    template: &T
) -> GeneratedArtifact {
    let columns: Vec<ColumnUnit> = resource
        .map(parse_resource)
        .unwrap_or_default()
        .into_iter()
        .map(|spec| ColumnUnit {
            directives: spec.directives(),
            member:     spec.name
        })
        .collect();

    let text = template.render_base(&BaseUnit {
        name,
        namespace,
        columns: &columns
    });

    GeneratedArtifact::new(name, ArtifactRole::SharedBase, template.file_suffix(), text)
}
