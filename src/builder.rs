// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! File-based front end for build scripts.
//!
//! # Example
//!
//! ```rust,ignore
//! // build.rs
//! fn main() {
//!     entity_config_gen::Builder::new()
//!         .source("src/domain.rs")
//!         .source_in("src/config.rs", "crate::config")
//!         .additional_file("AuditFields.txt")
//!         .write()
//!         .expect("entity configuration generation failed");
//! }
//! ```
//!
//! Artifacts land in `$OUT_DIR` unless [`Builder::out_dir`] is set.

use std::{
    env, fs, io,
    path::{Path, PathBuf}
};

use tracing::{info, warn};

use crate::{
    artifact::GenerationOutput,
    config::GeneratorConfig,
    discover::SourceSet,
    error::{Error, Result},
    generator::Generator,
    template::{FluentTemplate, Template}
};

/// Namespace used by [`Builder::source`].
pub const DEFAULT_NAMESPACE: &str = "crate";

/// Configures and runs a generation over files on disk.
pub struct Builder {
    config:           GeneratorConfig,
    template:         Box<dyn Template>,
    sources:          Vec<(PathBuf, String)>,
    additional_files: Vec<PathBuf>,
    out_dir:          Option<PathBuf>
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            config:           GeneratorConfig::default(),
            template:         Box::new(FluentTemplate),
            sources:          Vec::new(),
            additional_files: Vec::new(),
            out_dir:          None
        }
    }
}

impl Builder {
    /// Create a builder with default configuration and template.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the generator configuration.
    #[must_use]
    pub fn config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the output template.
    #[must_use]
    pub fn template(mut self, template: impl Template + 'static) -> Self {
        self.template = Box::new(template);
        self
    }

    /// Add a Rust source file whose items live in the `crate` namespace.
    #[must_use]
    pub fn source(self, path: impl Into<PathBuf>) -> Self {
        self.source_in(path, DEFAULT_NAMESPACE)
    }

    /// Add a Rust source file whose items live in `namespace`.
    #[must_use]
    pub fn source_in(mut self, path: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
        self.sources.push((path.into(), namespace.into()));
        self
    }

    /// Register an additional (non-Rust) input file.
    ///
    /// The one named like [`GeneratorConfig::audit_resource`] feeds the
    /// shared base.
    #[must_use]
    pub fn additional_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.additional_files.push(path.into());
        self
    }

    /// Set the output directory.
    #[must_use]
    pub fn out_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(path.into());
        self
    }

    /// Read and parse all sources, then generate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if a source cannot be read and [`Error::Parse`]
    /// if it is not valid Rust. A missing audit resource is not an error.
    pub fn generate(&self) -> Result<GenerationOutput> {
        let mut sources = SourceSet::new();
        for (path, namespace) in &self.sources {
            let text = fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
            let file = syn::parse_file(&text).map_err(|source| Error::parse(path, source))?;
            sources.add(namespace.clone(), file);
        }

        let candidates = sources.candidates(&self.config);
        let resource = self.read_resource();

        let output = Generator::with_template(self.config.clone(), &*self.template)
            .resource(resource.as_deref())
            .run(&candidates);

        info!(
            candidates = candidates.len(),
            artifacts = output.len(),
            "entity configuration generated"
        );
        Ok(output)
    }

    /// Generate and write all artifacts to the output directory.
    ///
    /// # Errors
    ///
    /// Everything [`Builder::generate`] returns, plus [`Error::MissingOutDir`]
    /// when no directory is set outside a build script and [`Error::Io`] when
    /// writing fails.
    pub fn write(&self) -> Result<Vec<PathBuf>> {
        let out_dir = match &self.out_dir {
            Some(dir) => dir.clone(),
            None => env::var_os("OUT_DIR")
                .map(PathBuf::from)
                .ok_or(Error::MissingOutDir)?
        };
        self.generate()?.write_to(out_dir)
    }

    /// Text of the audit resource, if registered and readable.
    fn read_resource(&self) -> Option<String> {
        let path = self
            .additional_files
            .iter()
            .find(|p| is_named(p, &self.config.audit_resource))?;

        match fs::read_to_string(path) {
            Ok(text) => Some(text),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "audit resource not found, base will be empty");
                None
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "audit resource unreadable, base will be empty");
                None
            }
        }
    }
}

fn is_named(path: &Path, file_name: &str) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.eq_ignore_ascii_case(file_name))
}
