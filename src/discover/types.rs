// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Rust type classification.
//!
//! | Rust Type | Class |
//! |-----------|-------|
//! | `String`, `str`, `Cow<'_, str>` | `String` |
//! | `DateTime<_>`, `NaiveDateTime`, `SystemTime`, `OffsetDateTime`, `PrimitiveDateTime` | `DateTime` |
//! | `i32` | `Int32` |
//! | `f64` | `Double` |
//! | `bool` | `Boolean` |
//! | `Uuid` | `Guid` |
//! | enum declared in the scanned sources | `Enum` |
//! | `&T`, `(T)` | class of `T` |
//! | `Option<T>` | `String` if `T` is a string, else `Other` |
//! | anything else | `Other` |

use std::collections::HashSet;

use syn::{GenericArgument, PathArguments, Type};

use crate::model::TypeClass;

/// Classify a field type.
///
/// `enums` holds the names of enums declared in the scanned sources.
pub fn classify_type(ty: &Type, enums: &HashSet<String>) -> TypeClass {
    let ty = peel(ty);

    // Only nullable strings are mapped
    if let Some(inner) = option_inner(ty) {
        return match classify_type(inner, enums) {
            TypeClass::String => TypeClass::String,
            _ => TypeClass::Other
        };
    }

    let Some(ident) = last_ident(ty) else {
        return TypeClass::Other;
    };

    match ident.as_str() {
        "String" | "str" => TypeClass::String,
        "Cow" if first_type_arg(ty).and_then(last_ident).as_deref() == Some("str") => {
            TypeClass::String
        }
        "DateTime" | "NaiveDateTime" | "SystemTime" | "OffsetDateTime" | "PrimitiveDateTime" => {
            TypeClass::DateTime
        }
        "i32" => TypeClass::Int32,
        "f64" => TypeClass::Double,
        "bool" => TypeClass::Boolean,
        "Uuid" => TypeClass::Guid,
        name if enums.contains(name) => TypeClass::Enum,
        _ => TypeClass::Other
    }
}

/// Name of the last path segment (e.g., `DateTime` for `chrono::DateTime<Utc>`).
pub fn last_ident(ty: &Type) -> Option<String> {
    if let Type::Path(type_path) = peel(ty) {
        return type_path
            .path
            .segments
            .last()
            .map(|s| s.ident.to_string());
    }
    None
}

/// First generic type argument of the last path segment.
pub fn first_type_arg(ty: &Type) -> Option<&Type> {
    if let Type::Path(type_path) = peel(ty)
        && let Some(segment) = type_path.path.segments.last()
        && let PathArguments::AngleBracketed(args) = &segment.arguments
    {
        return args.args.iter().find_map(|arg| match arg {
            GenericArgument::Type(inner) => Some(inner),
            _ => None
        });
    }
    None
}

/// Strip references, parentheses and invisible groups.
pub fn peel(ty: &Type) -> &Type {
    match ty {
        Type::Reference(r) => peel(&r.elem),
        Type::Paren(p) => peel(&p.elem),
        Type::Group(g) => peel(&g.elem),
        _ => ty
    }
}

fn option_inner(ty: &Type) -> Option<&Type> {
    if last_ident(ty).as_deref() == Some("Option") {
        return first_type_arg(ty);
    }
    None
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn class(ty: Type) -> TypeClass {
        let enums = HashSet::from(["Status".to_string()]);
        classify_type(&ty, &enums)
    }

    #[test]
    fn strings() {
        assert_eq!(class(parse_quote!(String)), TypeClass::String);
        assert_eq!(class(parse_quote!(&'static str)), TypeClass::String);
        assert_eq!(class(parse_quote!(std::borrow::Cow<'static, str>)), TypeClass::String);
    }

    #[test]
    fn date_times() {
        assert_eq!(class(parse_quote!(DateTime<Utc>)), TypeClass::DateTime);
        assert_eq!(class(parse_quote!(chrono::NaiveDateTime)), TypeClass::DateTime);
        assert_eq!(class(parse_quote!(std::time::SystemTime)), TypeClass::DateTime);
        assert_eq!(class(parse_quote!(time::OffsetDateTime)), TypeClass::DateTime);
    }

    #[test]
    fn primitives() {
        assert_eq!(class(parse_quote!(i32)), TypeClass::Int32);
        assert_eq!(class(parse_quote!(f64)), TypeClass::Double);
        assert_eq!(class(parse_quote!(bool)), TypeClass::Boolean);
        assert_eq!(class(parse_quote!(uuid::Uuid)), TypeClass::Guid);
    }

    #[test]
    fn narrow_numeric_types_are_unsupported() {
        assert_eq!(class(parse_quote!(i64)), TypeClass::Other);
        assert_eq!(class(parse_quote!(u32)), TypeClass::Other);
        assert_eq!(class(parse_quote!(f32)), TypeClass::Other);
    }

    #[test]
    fn known_enums() {
        assert_eq!(class(parse_quote!(Status)), TypeClass::Enum);
        assert_eq!(class(parse_quote!(crate::domain::Status)), TypeClass::Enum);
        assert_eq!(class(parse_quote!(Unknown)), TypeClass::Other);
    }

    #[test]
    fn option_and_references_look_through() {
        assert_eq!(class(parse_quote!(Option<String>)), TypeClass::String);
        assert_eq!(class(parse_quote!(&Option<&str>)), TypeClass::String);
        assert_eq!(class(parse_quote!(&(i32))), TypeClass::Int32);
        assert_eq!(class(parse_quote!(&Status)), TypeClass::Enum);
    }

    #[test]
    fn optional_non_strings_are_unsupported() {
        assert_eq!(class(parse_quote!(Option<i32>)), TypeClass::Other);
        assert_eq!(class(parse_quote!(Option<Status>)), TypeClass::Other);
        assert_eq!(class(parse_quote!(Option<DateTime<Utc>>)), TypeClass::Other);
        assert_eq!(class(parse_quote!(Option<uuid::Uuid>)), TypeClass::Other);
        assert_eq!(class(parse_quote!(&Option<bool>)), TypeClass::Other);
    }

    #[test]
    fn cow_must_borrow_str() {
        assert_eq!(class(parse_quote!(Cow<'_, str>)), TypeClass::String);
        assert_eq!(class(parse_quote!(Cow<'_, [u8]>)), TypeClass::Other);
        assert_eq!(class(parse_quote!(Cow<'static, Path>)), TypeClass::Other);
    }

    #[test]
    fn collections_are_unsupported() {
        assert_eq!(class(parse_quote!(Vec<String>)), TypeClass::Other);
        assert_eq!(class(parse_quote!((i32, i32))), TypeClass::Other);
        assert_eq!(class(parse_quote!([u8; 16])), TypeClass::Other);
    }

    #[test]
    fn first_type_arg_skips_lifetimes() {
        let ty: Type = parse_quote!(EntityTypeBuilder<'a, User>);
        assert_eq!(first_type_arg(&ty).and_then(last_ident).as_deref(), Some("User"));
    }
}
