// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field attribute parsing.
//!
//! # Supported Attributes
//!
//! | Attribute | Annotation |
//! |-----------|------------|
//! | `#[required]` | `Required` |
//! | `#[max_length(50)]` | `MaxLength(Some(50))` |
//! | `#[string_length(80)]`, `#[string_length(80, min = 2)]` | `StringLength(Some(80))` |
//! | `#[concurrency_check]` | `ConcurrencyCheck` |
//! | `#[timestamp]` | `Timestamp` |
//! | `#[column(name = "user_name", type_name = "citext")]` | `Column { .. }` |
//!
//! Attributes are matched on the last path segment, so `#[schema::required]`
//! works too. A length attribute needs exactly one positional integer
//! argument; otherwise its length is `None` and the rule resolver ignores it.
//! Doc comments are skipped, anything else becomes `Annotation::Other`.

use darling::FromMeta;
use syn::{Attribute, Expr, ExprLit, Lit, Meta, Token, punctuated::Punctuated};
use tracing::debug;

use crate::model::Annotation;

/// Arguments of `#[column(...)]`.
#[derive(Debug, Default, FromMeta)]
struct ColumnArgs {
    /// Column name override.
    name:      Option<String>,
    /// Store type override.
    type_name: Option<String>
}

/// Parse every attribute of a field into annotations, in order.
pub fn parse_annotations(attrs: &[Attribute]) -> Vec<Annotation> {
    attrs
        .iter()
        .filter(|attr| !attr.path().is_ident("doc"))
        .map(parse_annotation)
        .collect()
}

/// Parse a single attribute.
pub fn parse_annotation(attr: &Attribute) -> Annotation {
    let name = attr
        .path()
        .segments
        .last()
        .map(|s| s.ident.to_string())
        .unwrap_or_default();

    match name.as_str() {
        "required" => Annotation::Required,
        "max_length" => Annotation::MaxLength(single_length(&attr.meta)),
        "string_length" => Annotation::StringLength(single_length(&attr.meta)),
        "concurrency_check" => Annotation::ConcurrencyCheck,
        "timestamp" => Annotation::Timestamp,
        "column" => parse_column(&attr.meta).unwrap_or_else(|| Annotation::Other(name.clone())),
        _ => Annotation::Other(name.clone())
    }
}

fn parse_column(meta: &Meta) -> Option<Annotation> {
    let args = match meta {
        Meta::Path(_) => ColumnArgs::default(),
        _ => match ColumnArgs::from_meta(meta) {
            Ok(args) => args,
            Err(err) => {
                debug!(error = %err, "ignoring unparsable #[column] attribute");
                return None;
            }
        }
    };

    Some(Annotation::Column {
        name:      args.name,
        type_name: args.type_name
    })
}

/// Length given as exactly one positional integer argument.
fn single_length(meta: &Meta) -> Option<usize> {
    match meta {
        Meta::Path(_) => None,
        Meta::NameValue(nv) => int_literal(&nv.value),
        Meta::List(list) => {
            let args = list
                .parse_args_with(Punctuated::<Expr, Token![,]>::parse_terminated)
                .ok()?;
            let mut positional = args.iter().filter(|e| !matches!(e, Expr::Assign(_)));
            match (positional.next(), positional.next()) {
                (Some(expr), None) => int_literal(expr),
                _ => None
            }
        }
    }
}

fn int_literal(expr: &Expr) -> Option<usize> {
    if let Expr::Lit(ExprLit {
        lit: Lit::Int(int),
        ..
    }) = expr
    {
        return int.base10_parse().ok();
    }
    None
}
