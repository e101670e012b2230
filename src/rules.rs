// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-property configuration rules.
//!
//! [`resolve`] turns a property's annotations into an ordered list of
//! [`Directive`]s. The order is fixed and shapes the generated text:
//!
//! | Step | Source | Directive |
//! |------|--------|-----------|
//! | 1 | `column(name)` | replaces the effective column name |
//! | 2 | `column(type_name)` | [`Directive::ColumnType`] |
//! | 3 | `required` | [`Directive::Required`] |
//! | 4 | `max_length(n)`, else `string_length(n)` | [`Directive::MaxLength`] |
//! | 5 | `concurrency_check` | [`Directive::ConcurrencyToken`] |
//! | 6 | `timestamp` | [`Directive::RowVersion`] |
//! | 7 | string without length | [`Directive::MaxLength`] (default length) |
//! | 8 | always | [`Directive::ColumnName`] |
//!
//! The column name override goes through [`to_storage_name`] like any
//! other name.

use crate::{
    config::GeneratorConfig,
    model::{Annotation, PropertyDescriptor, TypeClass},
    naming::to_storage_name
};

/// One configuration instruction attached to a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Explicit store type.
    ColumnType(String),

    /// Not-null constraint.
    Required,

    /// Maximum length.
    MaxLength(usize),

    /// Optimistic concurrency token.
    ConcurrencyToken,

    /// Row version.
    RowVersion,

    /// Storage column name. Always the last directive.
    ColumnName(String)
}

/// Derive the directives for one eligible property.
#[must_use]
pub fn resolve(prop: &PropertyDescriptor, config: &GeneratorConfig) -> Vec<Directive> {
    let mut directives = Vec::new();
    let mut column_name = prop.name.as_str();

    if let Some((name, type_name)) = prop.column() {
        if let Some(name) = name {
            column_name = name;
        }
        if let Some(type_name) = type_name {
            directives.push(Directive::ColumnType(type_name.to_string()));
        }
    }

    if prop.has(&Annotation::Required) {
        directives.push(Directive::Required);
    }

    if let Some(len) = prop.max_length().or_else(|| prop.string_length()) {
        directives.push(Directive::MaxLength(len));
    }

    if prop.has(&Annotation::ConcurrencyCheck) {
        directives.push(Directive::ConcurrencyToken);
    }

    if prop.has(&Annotation::Timestamp) {
        directives.push(Directive::RowVersion);
    }

    let has_length = directives
        .iter()
        .any(|d| matches!(d, Directive::MaxLength(_)));
    if !has_length && prop.ty == TypeClass::String {
        directives.push(Directive::MaxLength(config.default_string_length));
    }

    directives.push(Directive::ColumnName(to_storage_name(column_name)));
    directives
}
