// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! End-to-end generation from fixture sources on disk.
//!
//! Fixtures live in `tests/fixtures`; expected output in
//! `tests/fixtures/expected`.

use std::{
    fs,
    path::{Path, PathBuf}
};

use entity_config_gen::{ArtifactRole, Builder, Error, GeneratorConfig};

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn shop() -> Builder {
    let dir = fixtures();
    Builder::new()
        .source_in(dir.join("domain.rs"), "shop::domain")
        .source_in(dir.join("config.rs"), "shop::config")
        .additional_file(dir.join("AuditFields.txt"))
}

fn expected(name: &str) -> String {
    fs::read_to_string(fixtures().join("expected").join(name)).unwrap()
}

#[test]
fn generates_base_and_entities() {
    init_tracing();
    let output = shop().generate().unwrap();

    let names: Vec<_> = output.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "AuditEntityConfiguration",
            "UserCommonConfiguration",
            "OrderCommonConfiguration"
        ]
    );
    assert_eq!(
        output
            .iter()
            .filter(|a| a.role == ArtifactRole::SharedBase)
            .count(),
        1
    );
}

#[test]
fn matches_golden_files() {
    init_tracing();
    let output = shop().generate().unwrap();

    for artifact in output.iter() {
        assert_eq!(
            artifact.text,
            expected(&artifact.hint_name),
            "{} differs from golden file",
            artifact.hint_name
        );
    }
}

#[test]
fn writes_artifacts_to_out_dir() {
    init_tracing();
    let out = tempfile::tempdir().unwrap();
    let written = shop().out_dir(out.path()).write().unwrap();

    assert_eq!(written.len(), 3);
    for path in &written {
        let name = path.file_name().unwrap().to_str().unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), expected(name));
    }
}

#[test]
fn repeated_runs_are_byte_identical() {
    init_tracing();
    let first = shop().generate().unwrap();
    let second = shop().generate().unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_resource_yields_empty_base() {
    init_tracing();
    let dir = fixtures();
    let output = Builder::new()
        .source_in(dir.join("domain.rs"), "shop::domain")
        .source_in(dir.join("config.rs"), "shop::config")
        .generate()
        .unwrap();

    let base = output.base().unwrap();
    assert!(!base.text.contains("builder.Property"));
    assert_eq!(output.entities().count(), 2);
}

#[test]
fn configuration_flows_through() {
    init_tracing();
    let config = GeneratorConfig::default()
        .base_name("AuditBase")
        .entity_suffix("Config")
        .default_string_length(120);
    let output = shop().config(config).generate().unwrap();

    let user = output.get("UserConfig").unwrap();
    assert_eq!(user.hint_name, "UserConfig.g.cs");
    assert!(user.text.contains(": AuditBase<User>"));
    assert!(user.text.contains(
        "builder.Property(e => e.Email).HasColumnType(\"citext\").HasMaxLength(120)"
    ));
    assert!(output.get("AuditBase").is_some());
}

#[test]
fn source_errors_are_reported() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.rs");
    fs::write(&broken, "pub struct Broken {\n    pub name String\n}\n").unwrap();

    let err = Builder::new().source(&broken).generate().unwrap_err();
    match &err {
        Error::Parse {
            path,
            line,
            ..
        } => {
            assert_eq!(path, &broken);
            assert_eq!(*line, 2);
        }
        other => panic!("expected parse error, got {other:?}")
    }
    assert!(err.to_string().contains("broken.rs:2:"));
}
