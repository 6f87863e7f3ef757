// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario files.
//!
//! A scenario names a registered command, the parameters and scripted
//! answers to run it with, the execution options, and what to expect:
//!
//! ```toml
//! command = "greet"
//! inputs = ["Bobby", "", "France"]
//!
//! [options]
//! verbosity = "verbose"
//!
//! [expect]
//! status = 0
//! contains = ["Bobby"]
//! ```

mod expect;

use std::path::Path;

use serde::Deserialize;

pub use expect::Expect;

use crate::error::{Error, Result};
use crate::input::Parameters;
use crate::options::ExecuteOptions;
use crate::registry::Registry;
use crate::tester::CommandTester;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Registered command name.
    pub command: String,

    /// Scripted answers. Absent means no answers were ever set.
    #[serde(default)]
    pub inputs: Option<Vec<String>>,

    #[serde(default)]
    pub parameters: Parameters,

    #[serde(default)]
    pub options: ExecuteOptions,

    #[serde(default)]
    pub expect: Expect,
}

/// What one scenario run produced, and which expectations it missed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Absent when the execution failed.
    pub status: Option<i32>,
    /// Captured display with normalized line endings.
    pub display: String,
    /// Separately captured error channel, when requested.
    pub error_output: Option<String>,
    pub aborted: bool,
    /// Message of a non-abort failure raised by the command.
    pub error: Option<String>,
    pub failures: Vec<String>,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Scenario(e.to_string()))
    }

    /// Execute the scenario against `registry` and check its expectations.
    ///
    /// Fails only when the scenario itself is unusable: an unknown command
    /// or parameters the command does not accept.
    pub fn run(&self, registry: &Registry) -> Result<Outcome> {
        let mut tester = CommandTester::resolve(&self.command, |name| registry.lookup(name))?;
        if let Some(inputs) = &self.inputs {
            tester.set_inputs(inputs.iter().cloned());
        }

        let result = tester.execute(&self.parameters, self.options);
        let mut outcome = Outcome::default();
        match result {
            Ok(status) => outcome.status = Some(status),
            Err(err) if err.is_aborted() => outcome.aborted = true,
            // No output means the input never bound.
            Err(err) if tester.output().is_err() => return Err(err),
            Err(err) => outcome.error = Some(err.to_string()),
        }
        outcome.display = tester.display(true)?;
        outcome.error_output = tester.error_output(true).ok();
        outcome.failures = self.expect.check(&outcome);

        tracing::debug!(
            command = %self.command,
            passed = outcome.passed(),
            failures = outcome.failures.len(),
            "scenario finished"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
