// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `rehearse list` command implementation.

use std::io::Write;

use rehearse::builtin;

/// Print each built-in command with its description.
pub fn run() -> anyhow::Result<()> {
    let registry = builtin::registry();
    let width = registry.names().map(str::len).max().unwrap_or(0);

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for command in registry.iter() {
        writeln!(handle, "{:<width$}  {}", command.name(), command.description())?;
    }
    Ok(())
}
