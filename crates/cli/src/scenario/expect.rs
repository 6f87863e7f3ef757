// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Expectations checked against a scenario outcome.

use serde::Deserialize;

use super::Outcome;

/// All fields are optional; an empty expectation only requires a clean run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Expect {
    pub status: Option<i32>,
    /// Exact display text.
    pub display: Option<String>,
    /// Fragments the display must contain.
    pub contains: Vec<String>,
    /// Exact error channel text (requires separate capture).
    pub error_output: Option<String>,
    /// Whether the run should end in "Aborted.".
    pub aborted: bool,
}

impl Expect {
    /// Describe every expectation `outcome` misses.
    pub fn check(&self, outcome: &Outcome) -> Vec<String> {
        let mut failures = Vec::new();

        if let Some(error) = &outcome.error {
            failures.push(format!("command failed: {error}"));
        }
        match (self.aborted, outcome.aborted) {
            (true, false) => failures.push("expected the run to abort, but it completed".to_string()),
            (false, true) => failures.push("run aborted: scripted answers ran out".to_string()),
            _ => {}
        }

        if let Some(expected) = self.status {
            match outcome.status {
                Some(actual) if actual == expected => {}
                Some(actual) => failures.push(format!("expected status {expected}, got {actual}")),
                None => failures.push(format!("expected status {expected}, got no status")),
            }
        }

        if let Some(expected) = &self.display
            && *expected != outcome.display
        {
            failures.push(mismatch("display", expected, &outcome.display));
        }

        for fragment in &self.contains {
            if !outcome.display.contains(fragment.as_str()) {
                failures.push(format!("display does not contain {fragment:?}"));
            }
        }

        if let Some(expected) = &self.error_output {
            match &outcome.error_output {
                Some(actual) if actual == expected => {}
                Some(actual) => failures.push(mismatch("error output", expected, actual)),
                None => failures.push(
                    "error output was not captured (set options.capture_stderr_separately)"
                        .to_string(),
                ),
            }
        }

        failures
    }
}

fn mismatch(what: &str, expected: &str, actual: &str) -> String {
    format!("{what} mismatch\n  expected: {expected:?}\n  actual:   {actual:?}")
}

#[cfg(test)]
#[path = "expect_tests.rs"]
mod tests;
