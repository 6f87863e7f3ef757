// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

fn logged(
    enabled: bool,
    f: impl FnOnce(&mut VerboseLogger<Vec<u8>>) -> io::Result<()>,
) -> String {
    let mut logger = VerboseLogger::with_sink(enabled, Vec::new());
    f(&mut logger).unwrap();
    String::from_utf8(logger.into_sink()).unwrap()
}

#[test]
fn disabled_logger_prints_nothing() {
    let text = logged(false, |log| {
        log.section("a.toml")?;
        log.log("status: 0")?;
        log.transcript("display", "foo")
    });
    assert_eq!(text, "");
}

#[test]
fn section_and_log_lines() {
    let text = logged(true, |log| {
        log.section("a.toml")?;
        log.log("status: 0")
    });
    assert_eq!(text, "\na.toml:\n  status: 0\n");
}

#[test]
fn transcript_indents_every_line() {
    let text = logged(true, |log| log.transcript("display", "one\ntwo\n"));
    assert_eq!(text, "  display:\n    | one\n    | two\n");
}

#[test]
fn empty_transcript_is_marked() {
    let text = logged(true, |log| log.transcript("error output", ""));
    assert_eq!(text, "  error output: (empty)\n");
}

/// Sink that rejects every write.
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failures_are_reported() {
    let mut logger = VerboseLogger::with_sink(true, BrokenPipe);
    assert_eq!(logger.section("a.toml").unwrap_err().kind(), io::ErrorKind::BrokenPipe);
    assert!(logger.log("status: 0").is_err());
    assert!(logger.transcript("display", "one").is_err());
    assert!(logger.transcript("display", "").is_err());
}

#[test]
fn disabled_logger_never_touches_sink() {
    let mut logger = VerboseLogger::with_sink(false, BrokenPipe);
    assert!(logger.section("a.toml").is_ok());
    assert!(logger.transcript("display", "one").is_ok());
}
