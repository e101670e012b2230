// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Property classification.
//!
//! Splits an entity's properties into the groups the synthesizers work with:
//!
//! | Group | Rule | Goes to |
//! |-------|------|---------|
//! | audit | name in [`GeneratorConfig::audit_fields`] | shared base only |
//! | eligible | public, instance, supported type | entity artifact |
//! | excluded | everything else | nowhere |
//!
//! Exclusion is silent; a `debug` event is the only trace.

use tracing::debug;

use crate::{config::GeneratorConfig, model::PropertyDescriptor};

/// Properties of one entity, grouped.
///
/// Each group keeps the entity's declaration order.
#[derive(Debug, Default)]
pub struct Classified<'a> {
    /// Reserved bookkeeping properties.
    pub audit: Vec<&'a PropertyDescriptor>,

    /// Properties that get a configuration statement.
    pub eligible: Vec<&'a PropertyDescriptor>,

    /// Dropped properties.
    pub excluded: Vec<&'a PropertyDescriptor>
}

/// Partition properties into audit, eligible and excluded groups.
pub fn classify<'a>(
    properties: &'a [PropertyDescriptor],
    config: &GeneratorConfig
) -> Classified<'a> {
    let mut out = Classified::default();

    for prop in properties {
        if prop.is_static || !prop.is_public {
            debug!(property = %prop.name, "skipping non-public or static property");
            out.excluded.push(prop);
        } else if config.is_audit_field(&prop.name) {
            out.audit.push(prop);
        } else if !prop.ty.is_supported() {
            debug!(property = %prop.name, "skipping property of unsupported type");
            out.excluded.push(prop);
        } else {
            out.eligible.push(prop);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TypeClass;

    fn names(props: &[&PropertyDescriptor]) -> Vec<String> {
        props.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn audit_fields_are_separated() {
        let props = vec![
            PropertyDescriptor::new("CreatedAt", TypeClass::DateTime),
            PropertyDescriptor::new("Name", TypeClass::String),
            PropertyDescriptor::new("Age", TypeClass::Int32)
        ];
        let classified = classify(&props, &GeneratorConfig::default());

        assert_eq!(names(&classified.audit), ["CreatedAt"]);
        assert_eq!(names(&classified.eligible), ["Name", "Age"]);
        assert!(classified.excluded.is_empty());
    }

    #[test]
    fn unsupported_types_are_excluded() {
        let props = vec![
            PropertyDescriptor::new("Tags", TypeClass::Other),
            PropertyDescriptor::new("Id", TypeClass::Guid)
        ];
        let classified = classify(&props, &GeneratorConfig::default());

        assert_eq!(names(&classified.eligible), ["Id"]);
        assert_eq!(names(&classified.excluded), ["Tags"]);
    }

    #[test]
    fn private_and_static_are_excluded() {
        let props = vec![
            PropertyDescriptor::new("Secret", TypeClass::String).public(false),
            PropertyDescriptor::new("Counter", TypeClass::Int32).static_member(true),
            PropertyDescriptor::new("Title", TypeClass::String)
        ];
        let classified = classify(&props, &GeneratorConfig::default());

        assert_eq!(names(&classified.eligible), ["Title"]);
        assert_eq!(names(&classified.excluded), ["Secret", "Counter"]);
    }

    #[test]
    fn private_audit_field_is_not_audit() {
        let props = vec![PropertyDescriptor::new("UpdatedAt", TypeClass::DateTime).public(false)];
        let classified = classify(&props, &GeneratorConfig::default());

        assert!(classified.audit.is_empty());
        assert_eq!(classified.excluded.len(), 1);
    }

    #[test]
    fn audit_match_is_exact() {
        let props = vec![
            PropertyDescriptor::new("createdAt", TypeClass::DateTime),
            PropertyDescriptor::new("CreatedAtUtc", TypeClass::DateTime)
        ];
        let classified = classify(&props, &GeneratorConfig::default());

        assert!(classified.audit.is_empty());
        assert_eq!(names(&classified.eligible), ["createdAt", "CreatedAtUtc"]);
    }

    #[test]
    fn declaration_order_is_kept() {
        let props = vec![
            PropertyDescriptor::new("Zeta", TypeClass::Boolean),
            PropertyDescriptor::new("Alpha", TypeClass::Double),
            PropertyDescriptor::new("ModifiedBy", TypeClass::String),
            PropertyDescriptor::new("Mid", TypeClass::Enum)
        ];
        let classified = classify(&props, &GeneratorConfig::default());

        assert_eq!(names(&classified.eligible), ["Zeta", "Alpha", "Mid"]);
    }
}
