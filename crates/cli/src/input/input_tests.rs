// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Unit tests for input binding and answer consumption.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use yare::parameterized;

use super::*;

// =============================================================================
// TEST HELPERS
// =============================================================================

fn definition() -> Definition {
    let mut def = Definition::new();
    def.add_argument(InputArgument::optional("command"));
    def.add_argument(InputArgument::optional("foo"));
    def.add_argument(InputArgument::optional("greeting").with_default("hello"));
    def.add_option(InputOption::flag("yell").with_shortcut('y'));
    def.add_option(InputOption::value("name").with_default("world"));
    def.add_option(InputOption::optional_value("level").with_default("1"));
    def
}

fn bind(params: Parameters) -> Result<ScriptedInput> {
    ScriptedInput::bind(&definition(), "greet", &params, true, AnswerQueue::default())
}

// =============================================================================
// ARGUMENTS
// =============================================================================

#[test]
fn argument_returns_bound_value() {
    let input = bind(Parameters::new().with("foo", "bar")).unwrap();
    assert_eq!(input.argument("foo").unwrap(), Some("bar"));
}

#[test]
fn unset_argument_takes_default_or_none() {
    let input = bind(Parameters::new()).unwrap();
    assert_eq!(input.argument("greeting").unwrap(), Some("hello"));
    assert_eq!(input.argument("foo").unwrap(), None);
}

#[test]
fn unset_command_argument_takes_command_name() {
    let input = bind(Parameters::new()).unwrap();
    assert_eq!(input.argument("command").unwrap(), Some("greet"));
}

#[test]
fn explicit_command_argument_wins() {
    let input = bind(Parameters::new().with("command", "other")).unwrap();
    assert_eq!(input.argument("command").unwrap(), Some("other"));
}

#[test]
fn undeclared_argument_lookup_fails() {
    let input = bind(Parameters::new()).unwrap();
    let err = input.argument("nope").unwrap_err();
    assert!(matches!(err, Error::UndeclaredParameter { ref name, .. } if name == "nope"));
}

#[test]
fn undeclared_argument_in_parameters_fails_binding() {
    let err = bind(Parameters::new().with("nope", "x")).unwrap_err();
    assert!(matches!(err, Error::UndeclaredParameter { .. }));
}

#[test]
fn missing_required_arguments_are_all_reported() {
    let mut def = Definition::new();
    def.add_argument(InputArgument::required("a"));
    def.add_argument(InputArgument::required("b"));
    def.add_argument(InputArgument::optional("c"));
    let err = ScriptedInput::bind(&def, "x", &Parameters::new(), true, AnswerQueue::default())
        .unwrap_err();
    match err {
        Error::MissingArguments(names) => assert_eq!(names, ["a", "b"]),
        other => panic!("unexpected error: {other}"),
    }
}

// =============================================================================
// OPTIONS
// =============================================================================

#[parameterized(
    unset = { None, false },
    explicit_true = { Some("true"), true },
    bare = { Some(""), true },
    explicit_false = { Some("false"), false },
)]
fn flag_binding(value: Option<&str>, expected: bool) {
    let mut params = Parameters::new();
    if let Some(v) = value {
        params.insert("--yell", v);
    }
    let input = bind(params).unwrap();
    assert_eq!(input.flag("yell").unwrap(), expected);
}

#[test]
fn shortcut_resolves_to_option() {
    let input = bind(Parameters::new().with("-y", "true")).unwrap();
    assert!(input.flag("yell").unwrap());
}

#[test]
fn flag_rejects_arbitrary_value() {
    let err = bind(Parameters::new().with("--yell", "loud")).unwrap_err();
    assert!(matches!(err, Error::InvalidOptionValue { .. }));
}

#[test]
fn value_option_requires_value() {
    let err = bind(Parameters::new().with("--name", "")).unwrap_err();
    assert!(matches!(err, Error::InvalidOptionValue { .. }));
}

#[test]
fn value_options_take_defaults() {
    let input = bind(Parameters::new().with("--level", "")).unwrap();
    assert_eq!(input.option("name").unwrap(), Some("world"));
    assert_eq!(input.option("level").unwrap(), Some("1"));
}

#[test]
fn undeclared_option_fails() {
    let err = bind(Parameters::new().with("--nope", "x")).unwrap_err();
    assert!(matches!(err, Error::UndeclaredParameter { kind: crate::error::ParameterKind::Option, .. }));
    let input = bind(Parameters::new()).unwrap();
    assert!(input.option("nope").is_err());
}

// =============================================================================
// ANSWERS
// =============================================================================

#[test]
fn next_answer_pops_in_order_then_exhausts() {
    let mut input =
        ScriptedInput::bind(&definition(), "greet", &Parameters::new(), true, AnswerQueue::new(["a", ""]))
            .unwrap();
    assert_eq!(input.next_answer().unwrap(), "a");
    assert_eq!(input.next_answer().unwrap(), "");
    assert!(matches!(input.next_answer(), Err(Error::InputExhausted)));
    assert!(matches!(input.next_answer(), Err(Error::InputExhausted)));
    assert_eq!(input.answers().consumed(), ["a", ""]);
}

#[test]
fn take_remaining_answers_keeps_only_the_tail() {
    let mut input =
        ScriptedInput::bind(&definition(), "greet", &Parameters::new(), true, AnswerQueue::new(["a", "b"]))
            .unwrap();
    input.next_answer().unwrap();
    let rest = input.take_remaining_answers();
    assert_eq!(rest.remaining(), ["b"]);
    assert!(input.answers().is_empty());
}

#[test]
fn interactive_flag_is_exposed() {
    let input =
        ScriptedInput::bind(&definition(), "greet", &Parameters::new(), false, AnswerQueue::default())
            .unwrap();
    assert!(!input.is_interactive());
}
