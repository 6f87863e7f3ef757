// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color handling for captured prompts and the scenario report.

use termcolor::{Color, ColorChoice, ColorSpec};

/// When to emit color on a real terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolve the color choice for stdout.
///
/// `--no-color` beats everything; `auto` only colors an interactive terminal.
pub fn resolve_color(mode: ColorMode, no_color: bool, is_terminal: bool) -> ColorChoice {
    if no_color {
        return ColorChoice::Never;
    }
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if is_terminal => ColorChoice::Auto,
        ColorMode::Auto => ColorChoice::Never,
    }
}

/// Color scheme shared by styled prompts and the report.
pub mod scheme {
    use super::*;

    /// Question text in a styled prompt.
    pub fn question() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green));
        spec
    }

    /// Default value shown next to a question.
    pub fn default_value() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Index column of a choice list.
    pub fn choice_key() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green));
        spec
    }

    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Scenario path in the report.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Plain text following a failure marker.
    pub fn advice() -> ColorSpec {
        ColorSpec::new()
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
