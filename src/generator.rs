// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation coordinator.
//!
//! A [`Generator`] drives one generation run over a fixed list of candidates:
//!
//! ```text
//! for candidate in candidates:
//!     skip unless marked and target resolved
//!     skip if its entity artifact already exists
//!     first time only: audit::synthesize  ──► shared base
//!     entity::synthesize                  ──► entity artifact
//! ```
//!
//! The "base already generated" flag belongs to the generator instance, so
//! every run starts fresh.

use tracing::{debug, instrument, warn};

use crate::{
    artifact::GenerationOutput,
    audit,
    config::GeneratorConfig,
    entity,
    model::CandidateDeclaration,
    template::{FluentTemplate, Template}
};

/// One generation run.
#[derive(Debug)]
pub struct Generator<'r, T = FluentTemplate> {
    config:         GeneratorConfig,
    template:       T,
    resource:       Option<&'r str>,
    base_generated: bool
}

impl<'r> Generator<'r, FluentTemplate> {
    /// Create a generator with the default template.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_template(config, FluentTemplate)
    }
}

impl Default for Generator<'_, FluentTemplate> {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

impl<'r, T: Template> Generator<'r, T> {
    /// Create a generator rendering through `template`.
    #[must_use]
    pub fn with_template(config: GeneratorConfig, template: T) -> Self {
        Self {
            config,
            template,
            resource: None,
            base_generated: false
        }
    }

    /// Provide the audit field resource text.
    #[must_use]
    pub fn resource(mut self, text: Option<&'r str>) -> Self {
        self.resource = text;
        self
    }

    /// Run generation over all candidates.
    ///
    /// Never fails: candidates that cannot be used are skipped.
    #[instrument(skip_all, fields(candidates = candidates.len()))]
    pub fn run(mut self, candidates: &[CandidateDeclaration]) -> GenerationOutput {
        let mut output = GenerationOutput::default();

        for candidate in candidates {
            if !candidate.marked {
                debug!(candidate = %candidate.name, "skipping candidate without marker");
                continue;
            }
            let Some(target) = &candidate.target else {
                debug!(candidate = %candidate.name, "skipping candidate without target entity");
                continue;
            };

            let name = self.config.entity_artifact_name(&target.name);
            if output.contains(&name) {
                warn!(
                    candidate = %candidate.name,
                    artifact = %name,
                    "entity already configured by an earlier candidate"
                );
                continue;
            }

            if !self.base_generated {
                output.push(audit::synthesize(
                    &self.config.base_name,
                    &candidate.namespace,
                    self.resource,
                    &self.template
                ));
                self.base_generated = true;
            }

            output.push(entity::synthesize(
                target,
                &candidate.namespace,
                &self.config,
                &self.template
            ));
            debug!(entity = %target.name, artifact = %name, "generated entity configuration");
        }

        output
    }
}

/// Run one generation with the default template.
///
/// Shorthand for `Generator::new(config).resource(resource).run(candidates)`.
#[must_use]
pub fn generate(
    candidates: &[CandidateDeclaration],
    resource: Option<&str>,
    config: &GeneratorConfig
) -> GenerationOutput {
    Generator::new(config.clone())
        .resource(resource)
        .run(candidates)
}
