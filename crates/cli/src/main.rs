// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rehearse::cli::{Cli, Command};

mod cmd_list;
mod cmd_run;

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match &cli.command {
        Command::Run(args) => cmd_run::run(args),
        Command::List => cmd_list::run().map(|()| 0),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("rehearse: {e:#}");
            std::process::exit(2);
        }
    }
}

/// Library logs go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
