//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;
use crate::verbosity::Verbosity;

/// Run console commands against scripted answers and check what they print
#[derive(Parser)]
#[command(name = "rehearse")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run scenario files against the built-in commands
    Run(RunArgs),
    /// List built-in commands
    List,
}

#[derive(clap::Args)]
pub struct RunArgs {
    /// Scenario files to run
    #[arg(value_name = "SCENARIO", required = true)]
    pub scenarios: Vec<PathBuf>,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Override the verbosity every scenario runs with
    #[arg(long, value_name = "LEVEL")]
    pub verbosity: Option<Verbosity>,

    /// Print each captured transcript to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Stop after the first failing scenario
    #[arg(long)]
    pub fail_fast: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
