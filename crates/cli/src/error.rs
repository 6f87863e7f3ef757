// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for command execution.

use thiserror::Error;

/// Message carried by [`Error::Aborted`].
pub const ABORTED: &str = "Aborted.";

/// Which kind of declared parameter a lookup was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    Argument,
    Option,
}

impl std::fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterKind::Argument => f.write_str("argument"),
            ParameterKind::Option => f.write_str("option"),
        }
    }
}

/// Errors raised while binding, prompting, or executing a command.
#[derive(Debug, Error)]
pub enum Error {
    /// The scripted answers ran out while a question was pending.
    #[error("Aborted.")]
    Aborted,

    /// The answer queue is empty. Escalated to [`Error::Aborted`] by the prompt.
    #[error("no scripted answers left")]
    InputExhausted,

    #[error("The \"{name}\" {kind} does not exist.")]
    UndeclaredParameter { kind: ParameterKind, name: String },

    #[error("{0}")]
    InvalidState(&'static str),

    /// An answer failed validation on the last allowed attempt.
    #[error("{0}")]
    InvalidAnswer(String),

    #[error("Not enough arguments (missing: {}).", quoted_list(.0))]
    MissingArguments(Vec<String>),

    #[error("Invalid value for the \"--{name}\" option: {reason}")]
    InvalidOptionValue { name: String, reason: String },

    #[error("Command \"{0}\" is not defined.")]
    CommandNotFound(String),

    #[error("Command \"{0}\" has no code to execute.")]
    MissingCode(String),

    /// A command body's own failure.
    #[error("{0}")]
    Command(String),

    #[error("invalid scenario: {0}")]
    Scenario(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for the abort raised when scripted input runs out.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Error::Aborted)
    }

    pub(crate) fn undeclared_argument(name: &str) -> Self {
        Error::UndeclaredParameter { kind: ParameterKind::Argument, name: name.to_string() }
    }

    pub(crate) fn undeclared_option(name: &str) -> Self {
        Error::UndeclaredParameter { kind: ParameterKind::Option, name: name.to_string() }
    }
}

fn quoted_list(names: &[String]) -> String {
    names.iter().map(|n| format!("\"{n}\"")).collect::<Vec<_>>().join(", ")
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
