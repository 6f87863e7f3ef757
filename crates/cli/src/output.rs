// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory output capture.
//!
//! Everything a command writes lands in a `termcolor::Buffer`. Decorated
//! outputs keep ANSI escapes; undecorated ones drop styling entirely. The
//! sink never filters by verbosity: commands query [`BufferedOutput::verbosity`]
//! and decide for themselves.

use std::io::Write;

use termcolor::{Buffer, ColorSpec, WriteColor};

use crate::error::{Error, Result};
use crate::verbosity::Verbosity;

/// Append-only capture of a command's output.
pub struct BufferedOutput {
    buffer: Buffer,
    verbosity: Verbosity,
    decorated: bool,
    /// Separate error channel, present only when requested.
    errors: Option<Box<BufferedOutput>>,
}

impl BufferedOutput {
    pub fn new(verbosity: Verbosity, decorated: bool) -> Self {
        let buffer = if decorated { Buffer::ansi() } else { Buffer::no_color() };
        Self { buffer, verbosity, decorated, errors: None }
    }

    /// Capture the error channel in its own buffer instead of merging it.
    pub fn with_separate_errors(mut self) -> Self {
        self.errors = Some(Box::new(Self::new(self.verbosity, self.decorated)));
        self
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn is_decorated(&self) -> bool {
        self.decorated
    }

    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    pub fn is_verbose(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }

    pub fn is_very_verbose(&self) -> bool {
        self.verbosity >= Verbosity::VeryVerbose
    }

    pub fn is_debug(&self) -> bool {
        self.verbosity >= Verbosity::Debug
    }

    pub fn has_separate_errors(&self) -> bool {
        self.errors.is_some()
    }

    pub fn write(&mut self, text: &str) {
        self.emit(text);
    }

    pub fn writeln(&mut self, text: &str) {
        self.emit(text);
        self.emit("\n");
    }

    /// Write `text` with `spec` applied. Styling is dropped when undecorated.
    pub fn write_styled(&mut self, text: &str, spec: &ColorSpec) {
        // Buffer writes land in a Vec and cannot fail.
        let _ = self.buffer.set_color(spec);
        self.emit(text);
        let _ = self.buffer.reset();
    }

    /// Write to the error channel (the primary buffer unless captured separately).
    pub fn write_error(&mut self, text: &str) {
        self.error_output().write(text);
    }

    pub fn writeln_error(&mut self, text: &str) {
        self.error_output().writeln(text);
    }

    /// The sink used for error text: the separate buffer, or `self` when merged.
    pub fn error_output(&mut self) -> &mut BufferedOutput {
        match self.errors {
            Some(ref mut errors) => errors,
            None => self,
        }
    }

    /// Everything written so far.
    ///
    /// With `normalize`, `\r\n` and lone `\r` become `\n`.
    pub fn contents(&self, normalize: bool) -> String {
        let text = String::from_utf8_lossy(self.buffer.as_slice());
        if normalize { normalize_line_endings(&text) } else { text.into_owned() }
    }

    /// Contents of the separate error buffer.
    pub fn error_contents(&self, normalize: bool) -> Result<String> {
        match &self.errors {
            Some(errors) => Ok(errors.contents(normalize)),
            None => Err(Error::InvalidState(
                "Error output is not available when the tester is run without \"capture_stderr_separately\".",
            )),
        }
    }

    fn emit(&mut self, text: &str) {
        let _ = self.buffer.write_all(text.as_bytes());
    }
}

impl Default for BufferedOutput {
    fn default() -> Self {
        Self::new(Verbosity::Normal, false)
    }
}

impl std::fmt::Debug for BufferedOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BufferedOutput")
            .field("verbosity", &self.verbosity)
            .field("decorated", &self.decorated)
            .field("separate_errors", &self.errors.is_some())
            .field("len", &self.buffer.len())
            .finish()
    }
}

pub(crate) fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
