//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for running the rehearse binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::PathBuf;
use std::process::Command;

/// Returns a Command configured to run the rehearse binary
pub fn rehearse_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("rehearse"));
    cmd.env_remove("RUST_LOG");
    cmd
}

/// `rehearse run --no-color` over the named fixture scenarios.
pub fn run_scenarios(names: &[&str]) -> Command {
    let mut cmd = rehearse_cmd();
    cmd.args(["run", "--no-color"]);
    for name in names {
        cmd.arg(scenario(name));
    }
    cmd
}

/// Path to `tests/fixtures/scenarios/<name>.toml`
pub fn scenario(name: &str) -> PathBuf {
    fixture("scenarios").join(format!("{name}.toml"))
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A scenario written to a temporary directory.
pub struct TempScenario {
    _dir: tempfile::TempDir,
    path: PathBuf,
}

impl TempScenario {
    pub fn new(content: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scenario.toml");
        std::fs::write(&path, content).unwrap();
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}
