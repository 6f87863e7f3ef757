#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use termcolor::Color;

#[test]
fn resolve_color_always_returns_always() {
    assert_eq!(resolve_color(ColorMode::Always, false, false), ColorChoice::Always);
}

#[test]
fn resolve_color_no_color_returns_never() {
    assert_eq!(resolve_color(ColorMode::Auto, true, true), ColorChoice::Never);
}

#[test]
fn resolve_color_no_color_takes_priority_over_always() {
    // no_color wins even when --color=always is also set
    assert_eq!(resolve_color(ColorMode::Always, true, true), ColorChoice::Never);
}

#[test]
fn resolve_color_auto_without_terminal_returns_never() {
    assert_eq!(resolve_color(ColorMode::Auto, false, false), ColorChoice::Never);
}

#[test]
fn resolve_color_auto_on_terminal_returns_auto() {
    assert_eq!(resolve_color(ColorMode::Auto, false, true), ColorChoice::Auto);
}

#[test]
fn scheme_fail_is_red_bold() {
    let spec = scheme::fail();
    assert_eq!(spec.fg(), Some(&Color::Red));
    assert!(spec.bold());
}

#[test]
fn scheme_pass_is_green_bold() {
    let spec = scheme::pass();
    assert_eq!(spec.fg(), Some(&Color::Green));
    assert!(spec.bold());
}

#[test]
fn scheme_path_is_cyan() {
    let spec = scheme::path();
    assert_eq!(spec.fg(), Some(&Color::Cyan));
}

#[test]
fn scheme_question_is_green() {
    assert_eq!(scheme::question().fg(), Some(&Color::Green));
}

#[test]
fn scheme_default_value_is_yellow() {
    assert_eq!(scheme::default_value().fg(), Some(&Color::Yellow));
}

#[test]
fn scheme_advice_has_no_color() {
    let spec = scheme::advice();
    assert!(spec.fg().is_none());
    assert!(!spec.bold());
}
