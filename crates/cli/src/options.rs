// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-execution settings for the tester.

use serde::Deserialize;

use crate::verbosity::Verbosity;

/// How the tester builds the input and output of one execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExecuteOptions {
    /// Whether prompts read scripted answers (default: true).
    pub interactive: bool,
    /// Whether styled writes keep ANSI escapes (default: false).
    pub decorated: bool,
    pub verbosity: Verbosity,
    /// Capture the error channel in its own buffer (default: false).
    pub capture_stderr_separately: bool,
}

impl Default for ExecuteOptions {
    fn default() -> Self {
        Self {
            interactive: true,
            decorated: false,
            verbosity: Verbosity::Normal,
            capture_stderr_separately: false,
        }
    }
}

impl ExecuteOptions {
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn decorated(mut self, decorated: bool) -> Self {
        self.decorated = decorated;
        self
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn capture_stderr_separately(mut self, separate: bool) -> Self {
        self.capture_stderr_separately = separate;
        self
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
