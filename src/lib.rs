// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Quick Navigation
//!
//! - **Build scripts**: [`Builder`] reads sources and writes artifacts
//! - **In-memory runs**: [`Generator`] / [`generate`] over
//!   [`CandidateDeclaration`]s
//! - **Discovery**: [`discover::SourceSet`] scans Rust sources
//! - **Output syntax**: [`Template`], [`FluentTemplate`]
//!
//! # Pipeline
//!
//! ```text
//! sources ──► discover ──► CandidateDeclaration*
//!                                 │
//!                                 ▼
//!                 ┌────────── Generator ───────────┐
//!                 │ first candidate only:          │
//!   AuditFields ──┼──► audit::synthesize ──► base  │
//!                 │ every candidate:               │
//!                 │   classify ► rules::resolve    │
//!                 │   entity::synthesize ► entity  │
//!                 └────────────────────────────────┘
//!                                 │
//!                                 ▼
//!                         GenerationOutput
//! ```
//!
//! # Attribute Quick Reference
//!
//! | Attribute | Effect |
//! |-----------|--------|
//! | `#[generate_configuration]` | marks a configuration struct |
//! | `#[column(name = "..")]` | column name override (still snake-cased) |
//! | `#[column(type_name = "..")]` | explicit column type |
//! | `#[required]` | not-null |
//! | `#[max_length(n)]` | max length `n` |
//! | `#[string_length(n)]` | max length `n` unless `max_length` is present |
//! | `#[concurrency_check]` | concurrency token |
//! | `#[timestamp]` | row version |
//!
//! String properties without a length get a max length of 255.
//!
//! # Error Policy
//!
//! Generation itself never fails. Unresolvable candidates, unsupported
//! property types and malformed resource lines are left out of the output
//! and reported as `tracing` debug events. Only file access and Rust parsing
//! in [`Builder`] return [`Error`].

pub mod artifact;
pub mod audit;
pub mod builder;
pub mod classify;
pub mod config;
pub mod discover;
pub mod entity;
pub mod error;
pub mod generator;
pub mod model;
pub mod naming;
pub mod rules;
pub mod template;

pub use artifact::{ArtifactRole, GeneratedArtifact, GenerationOutput};
pub use builder::Builder;
pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use generator::{Generator, generate};
pub use model::{Annotation, CandidateDeclaration, EntityType, PropertyDescriptor, TypeClass};
pub use naming::to_storage_name;
pub use rules::Directive;
pub use template::{FluentTemplate, Template};
