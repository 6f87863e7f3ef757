// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose transcript logger for `rehearse run -v`.
//!
//! Echoes what each scenario captured so a failing run can be read without
//! re-running it. Writes to stderr unless given another sink.

use std::io::{self, Write};

pub struct VerboseLogger<W: Write = std::io::Stderr> {
    enabled: bool,
    sink: W,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self::with_sink(enabled, std::io::stderr())
    }
}

impl<W: Write> VerboseLogger<W> {
    pub fn with_sink(enabled: bool, sink: W) -> Self {
        Self { enabled, sink }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a section header, e.g. the scenario path.
    pub fn section(&mut self, title: &str) -> io::Result<()> {
        if self.enabled {
            writeln!(self.sink, "\n{}:", title)?;
        }
        Ok(())
    }

    /// Print a labelled block with every line indented.
    ///
    /// Empty text prints the label alone.
    pub fn transcript(&mut self, label: &str, text: &str) -> io::Result<()> {
        if !self.enabled {
            return Ok(());
        }
        if text.is_empty() {
            return writeln!(self.sink, "  {label}: (empty)");
        }
        writeln!(self.sink, "  {label}:")?;
        for line in text.lines() {
            writeln!(self.sink, "    | {line}")?;
        }
        Ok(())
    }

    pub fn log(&mut self, msg: &str) -> io::Result<()> {
        if self.enabled {
            writeln!(self.sink, "  {}", msg)?;
        }
        Ok(())
    }

    pub fn into_sink(self) -> W {
        self.sink
    }
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
