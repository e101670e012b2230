// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator configuration.
//!
//! | Setting | Default | Used by |
//! |---------|---------|---------|
//! | `audit_fields` | `CreatedAt`, `UpdatedAt`, `CreatedBy`, `ModifiedBy` | classifier |
//! | `default_string_length` | `255` | rule resolver |
//! | `audit_resource` | `"AuditFields.txt"` | file front end |
//! | `marker` | `"generate_configuration"` | discovery |
//! | `base_name` | `"AuditEntityConfiguration"` | both synthesizers |
//! | `entity_suffix` | `"CommonConfiguration"` | entity synthesizer |

/// Returns the reserved audit property names.
pub fn default_audit_fields() -> Vec<String> {
    ["CreatedAt", "UpdatedAt", "CreatedBy", "ModifiedBy"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Tunable constants of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Property names handled only by the shared base (exact match).
    pub audit_fields: Vec<String>,

    /// Max length applied to string properties without a length annotation.
    pub default_string_length: usize,

    /// File name of the audit field resource, compared case-insensitively.
    pub audit_resource: String,

    /// Attribute marking a configuration candidate.
    pub marker: String,

    /// Name of the shared base artifact.
    pub base_name: String,

    /// Suffix appended to the entity name for entity artifacts.
    pub entity_suffix: String
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            audit_fields:          default_audit_fields(),
            default_string_length: 255,
            audit_resource:        "AuditFields.txt".to_string(),
            marker:                "generate_configuration".to_string(),
            base_name:             "AuditEntityConfiguration".to_string(),
            entity_suffix:         "CommonConfiguration".to_string()
        }
    }
}

impl GeneratorConfig {
    /// Replace the reserved audit property names.
    #[must_use]
    pub fn audit_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.audit_fields = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the fallback string length.
    #[must_use]
    pub fn default_string_length(mut self, length: usize) -> Self {
        self.default_string_length = length;
        self
    }

    /// Set the audit resource file name.
    #[must_use]
    pub fn audit_resource(mut self, file_name: impl Into<String>) -> Self {
        self.audit_resource = file_name.into();
        self
    }

    /// Set the marker attribute name.
    #[must_use]
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Set the shared base artifact name.
    #[must_use]
    pub fn base_name(mut self, name: impl Into<String>) -> Self {
        self.base_name = name.into();
        self
    }

    /// Set the entity artifact suffix.
    #[must_use]
    pub fn entity_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.entity_suffix = suffix.into();
        self
    }

    /// Check if a property name is a reserved audit field.
    #[must_use]
    pub fn is_audit_field(&self, name: &str) -> bool {
        self.audit_fields.iter().any(|f| f == name)
    }

    /// Artifact name for an entity (e.g., `UserCommonConfiguration`).
    #[must_use]
    pub fn entity_artifact_name(&self, entity: &str) -> String {
        format!("{}{}", entity, self.entity_suffix)
    }
}
