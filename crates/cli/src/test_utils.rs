// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the rehearse crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::io::Write;

use tempfile::NamedTempFile;

use crate::input::{AnswerQueue, Definition, Parameters, ScriptedInput};
use crate::output::BufferedOutput;

/// Input with no declared parameters and the given answers.
pub fn scripted_input(answers: &[&str]) -> ScriptedInput {
    ScriptedInput::bind(
        &Definition::new(),
        "test",
        &Parameters::new(),
        true,
        AnswerQueue::new(answers.iter().copied()),
    )
    .unwrap()
}

/// Input that never reads answers.
pub fn non_interactive_input(answers: &[&str]) -> ScriptedInput {
    let mut input = scripted_input(answers);
    input.set_interactive(false);
    input
}

/// Undecorated output with errors captured separately.
pub fn split_output() -> BufferedOutput {
    BufferedOutput::default().with_separate_errors()
}

/// The three questions most harness tests ask.
pub const QUESTIONS: [&str; 3] = ["What's your name?", "How are you?", "Where do you come from?"];

/// Creates a temp file with the given content for testing.
///
/// Returns the NamedTempFile which keeps the file alive.
pub fn temp_file_with_content(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}
