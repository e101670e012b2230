// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generated artifacts.
//!
//! A run produces a [`GenerationOutput`]: the shared base artifact first,
//! followed by one artifact per entity in candidate order.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf}
};

use tracing::debug;

use crate::error::{Error, Result};

/// What an artifact is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactRole {
    /// The single base inherited by every entity artifact.
    SharedBase,

    /// Configuration of one entity.
    Entity
}

/// A named block of generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// Artifact name (e.g., `UserCommonConfiguration`).
    pub name: String,

    /// File name: artifact name plus template suffix.
    pub hint_name: String,

    /// Role of the artifact.
    pub role: ArtifactRole,

    /// Rendered text.
    pub text: String
}

impl GeneratedArtifact {
    /// Create an artifact.
    #[must_use]
    pub fn new(name: &str, role: ArtifactRole, suffix: &str, text: String) -> Self {
        Self {
            name: name.to_string(),
            hint_name: format!("{name}{suffix}"),
            role,
            text
        }
    }
}

/// All artifacts of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOutput {
    artifacts: Vec<GeneratedArtifact>
}

impl GenerationOutput {
    pub(crate) fn push(&mut self, artifact: GeneratedArtifact) {
        self.artifacts.push(artifact);
    }

    /// Check whether an artifact with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.artifacts.iter().any(|a| a.name == name)
    }

    /// Look up an artifact by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&GeneratedArtifact> {
        self.artifacts.iter().find(|a| a.name == name)
    }

    /// The shared base artifact, if any entity was generated.
    #[must_use]
    pub fn base(&self) -> Option<&GeneratedArtifact> {
        self.artifacts
            .iter()
            .find(|a| a.role == ArtifactRole::SharedBase)
    }

    /// Entity artifacts in generation order.
    pub fn entities(&self) -> impl Iterator<Item = &GeneratedArtifact> {
        self.artifacts
            .iter()
            .filter(|a| a.role == ArtifactRole::Entity)
    }

    /// All artifacts in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedArtifact> {
        self.artifacts.iter()
    }

    /// Number of artifacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Check if nothing was generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Artifact name to text.
    #[must_use]
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.artifacts
            .into_iter()
            .map(|a| (a.name, a.text))
            .collect()
    }

    /// Write every artifact to `dir/<hint name>`, creating `dir` if needed.
    ///
    /// Returns the written paths in generation order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the directory or a file cannot be written.
    pub fn write_to(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| Error::io(dir, source))?;

        let mut written = Vec::with_capacity(self.artifacts.len());
        for artifact in &self.artifacts {
            let path = dir.join(&artifact.hint_name);
            fs::write(&path, &artifact.text).map_err(|source| Error::io(&path, source))?;
            debug!(path = %path.display(), "wrote artifact");
            written.push(path);
        }
        Ok(written)
    }
}

impl IntoIterator for GenerationOutput {
    type Item = GeneratedArtifact;
    type IntoIter = std::vec::IntoIter<GeneratedArtifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.artifacts.into_iter()
    }
}
