// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Errors of the file front end.
//!
//! The generation pipeline itself never fails: anything it cannot use is
//! left out of the output. Errors only come from reading sources and writing
//! artifacts.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Result alias for fallible front-end operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Front-end error.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be read or written.
    #[error("{}: {source}", .path.display())]
    Io {
        /// File involved.
        path:   PathBuf,
        /// Underlying error.
        source: io::Error
    },

    /// A source file is not valid Rust.
    #[error("{}:{line}:{column}: {source}", .path.display())]
    Parse {
        /// Source file.
        path:   PathBuf,
        /// 1-based line of the error.
        line:   usize,
        /// 0-based column of the error.
        column: usize,
        /// Underlying error.
        source: syn::Error
    },

    /// No output directory was set and `OUT_DIR` is not defined.
    #[error("no output directory: set one on the builder or run from a build script")]
    MissingOutDir
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: syn::Error) -> Self {
        let start = source.span().start();
        Self::Parse {
            path: path.into(),
            line: start.line,
            column: start.column,
            source
        }
    }
}
