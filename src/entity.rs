// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity artifact synthesis.
//!
//! For an entity `User` configured from namespace `app::config`, produces
//! `UserCommonConfiguration`: one statement per eligible property in
//! declaration order, each carrying the directives from
//! [`rules::resolve`](crate::rules::resolve), followed by a call into the
//! shared audit base.

use crate::{
    artifact::{ArtifactRole, GeneratedArtifact},
    classify::classify,
    config::GeneratorConfig,
    model::{EntityType, PropertyDescriptor},
    rules::resolve,
    template::{ColumnUnit, EntityUnit, Template}
};

/// Column units for eligible properties.
#[must_use]
pub fn columns(eligible: &[&PropertyDescriptor], config: &GeneratorConfig) -> Vec<ColumnUnit> {
    eligible
        .iter()
        .map(|prop| ColumnUnit {
            member:     prop.name.clone(),
            directives: resolve(prop, config)
        })
        .collect()
}

/// Synthesize the configuration artifact of one entity.
///
/// `namespace` is where the artifact is placed (the candidate's namespace).
pub fn synthesize<T: Template + ?Sized>(
    entity: &EntityType,
    namespace: &str,
    config: &GeneratorConfig,
    template: &T
) -> GeneratedArtifact {
    let classified = classify(&entity.properties, config);
    let columns = columns(&classified.eligible, config);
    let name = config.entity_artifact_name(&entity.name);

    let text = template.render_entity(&EntityUnit {
        name: &name,
        base_name: &config.base_name,
        namespace,
        entity: &entity.name,
        entity_namespace: &entity.namespace,
        columns: &columns
    });

    GeneratedArtifact::new(&name, ArtifactRole::Entity, template.file_suffix(), text)
}
