// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `rehearse run` command implementation.
//!
//! Loads each scenario file, runs it against the built-in registry and
//! prints one PASS/FAIL line per file followed by its failures.

use std::io::{IsTerminal, Write};
use std::path::Path;

use anyhow::Context;
use termcolor::{ColorSpec, StandardStream, WriteColor};

use rehearse::builtin;
use rehearse::cli::RunArgs;
use rehearse::color::{resolve_color, scheme};
use rehearse::registry::Registry;
use rehearse::scenario::{Outcome, Scenario};
use rehearse::verbose::VerboseLogger;

pub const EXIT_PASSED: i32 = 0;
pub const EXIT_FAILED: i32 = 1;

/// Run every scenario and return the process exit code.
pub fn run(args: &RunArgs) -> anyhow::Result<i32> {
    let registry = builtin::registry();
    let choice = resolve_color(args.color, args.no_color, std::io::stdout().is_terminal());
    let mut stdout = StandardStream::stdout(choice);
    let mut logger = VerboseLogger::new(args.verbose);

    let mut failed = 0usize;
    let mut ran = 0usize;
    for path in &args.scenarios {
        ran += 1;
        match run_one(path, args, &registry) {
            Ok(outcome) => {
                log_transcript(&mut logger, path, &outcome)?;
                if outcome.passed() {
                    report_line(&mut stdout, scheme::pass(), "PASS", path)?;
                } else {
                    failed += 1;
                    report_line(&mut stdout, scheme::fail(), "FAIL", path)?;
                    for failure in &outcome.failures {
                        report_detail(&mut stdout, failure)?;
                    }
                }
            }
            Err(e) => {
                failed += 1;
                report_line(&mut stdout, scheme::fail(), "FAIL", path)?;
                report_detail(&mut stdout, &format!("{e:#}"))?;
            }
        }
        if failed > 0 && args.fail_fast {
            break;
        }
    }

    writeln!(stdout)?;
    writeln!(stdout, "{} passed, {} failed", ran - failed, failed)?;
    stdout.flush()?;

    Ok(if failed == 0 { EXIT_PASSED } else { EXIT_FAILED })
}

fn run_one(path: &Path, args: &RunArgs, registry: &Registry) -> anyhow::Result<Outcome> {
    let mut scenario = Scenario::load(path)
        .with_context(|| format!("failed to load scenario {}", path.display()))?;
    if let Some(verbosity) = args.verbosity {
        scenario.options.verbosity = verbosity;
    }
    scenario
        .run(registry)
        .with_context(|| format!("failed to run `{}`", scenario.command))
}

fn log_transcript<W: Write>(
    logger: &mut VerboseLogger<W>,
    path: &Path,
    outcome: &Outcome,
) -> std::io::Result<()> {
    if !logger.is_enabled() {
        return Ok(());
    }
    logger.section(&path.display().to_string())?;
    match (outcome.status, outcome.aborted, &outcome.error) {
        (Some(status), _, _) => logger.log(&format!("status: {status}"))?,
        (None, true, _) => logger.log("aborted")?,
        (None, false, Some(error)) => logger.log(&format!("error: {error}"))?,
        (None, false, None) => {}
    }
    logger.transcript("display", &outcome.display)?;
    if let Some(errors) = &outcome.error_output {
        logger.transcript("error output", errors)?;
    }
    Ok(())
}

fn report_line(
    out: &mut StandardStream,
    spec: ColorSpec,
    label: &str,
    path: &Path,
) -> std::io::Result<()> {
    out.set_color(&spec)?;
    write!(out, "{label}")?;
    out.reset()?;
    write!(out, " ")?;
    out.set_color(&scheme::path())?;
    write!(out, "{}", path.display())?;
    out.reset()?;
    writeln!(out)
}

fn report_detail(out: &mut StandardStream, text: &str) -> std::io::Result<()> {
    out.set_color(&scheme::advice())?;
    for line in text.lines() {
        writeln!(out, "  {line}")?;
    }
    out.reset()
}
