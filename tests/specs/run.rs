//! Behavioral specs for `rehearse run`.

use crate::prelude::*;

// =============================================================================
// Passing and Failing Scenarios
// =============================================================================

#[test]
fn passing_scenario_exits_zero() {
    run_scenarios(&["greet"])
        .assert()
        .success()
        .stdout(predicates::str::contains("PASS"))
        .stdout(predicates::str::contains("greet.toml"))
        .stdout(predicates::str::contains("1 passed, 0 failed"));
}

#[test]
fn failing_scenario_exits_one_and_explains() {
    run_scenarios(&["greet_wrong_status"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("FAIL"))
        .stdout(predicates::str::contains("expected status 1, got 0"))
        .stdout(predicates::str::contains("0 passed, 1 failed"));
}

#[test]
fn expected_abort_passes() {
    run_scenarios(&["pick_runs_out"]).assert().success();
}

#[test]
fn separate_error_channel_is_checked() {
    run_scenarios(&["echo_stderr"]).assert().success();
}

#[test]
fn one_failure_fails_the_whole_run() {
    run_scenarios(&["greet", "greet_wrong_status", "echo_stderr"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("2 passed, 1 failed"));
}

// =============================================================================
// Unusable Scenarios
// =============================================================================

#[test]
fn unknown_command_is_reported_as_failure() {
    run_scenarios(&["unknown_command"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("Command \"deploy\" is not defined"));
}

#[test]
fn missing_file_is_reported_as_failure() {
    rehearse_cmd()
        .args(["run", "--no-color", "does-not-exist.toml"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("failed to load scenario"));
}

#[test]
fn unknown_scenario_key_is_rejected() {
    let file = TempScenario::new("command = \"echo\"\nanswers = [\"x\"]\n");

    rehearse_cmd()
        .args(["run", "--no-color"])
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("answers"));
}

#[test]
fn undeclared_parameter_is_reported() {
    let file = TempScenario::new(
        "command = \"echo\"\n[parameters]\nmessage = \"hi\"\nfoo = \"bar\"\n",
    );

    rehearse_cmd()
        .args(["run", "--no-color"])
        .arg(file.path())
        .assert()
        .code(1)
        .stdout(predicates::str::contains("The \"foo\" argument does not exist."));
}

// =============================================================================
// Flags
// =============================================================================

#[test]
fn fail_fast_stops_after_first_failure() {
    run_scenarios(&["greet_wrong_status", "greet"])
        .arg("--fail-fast")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("0 passed, 1 failed"))
        .stdout(predicates::str::contains("PASS").not());
}

#[test]
fn verbosity_override_reaches_the_command() {
    run_scenarios(&["echo_verbose"]).assert().success();

    run_scenarios(&["echo_verbose"])
        .args(["--verbosity", "verbose"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("display mismatch"));
}

#[test]
fn verbose_prints_transcript_to_stderr() {
    run_scenarios(&["greet"])
        .arg("-v")
        .assert()
        .success()
        .stderr(predicates::str::contains("status: 0"))
        .stderr(predicates::str::contains("| Hello Bobby"));
}

#[test]
fn no_color_output_has_no_escape_codes() {
    run_scenarios(&["greet"])
        .assert()
        .success()
        .stdout(predicates::str::contains("\u{1b}[").not());
}

#[test]
fn color_always_emits_escape_codes() {
    rehearse_cmd()
        .args(["run", "--color", "always"])
        .arg(scenario("greet"))
        .assert()
        .success()
        .stdout(predicates::str::contains("\u{1b}["));
}

#[test]
fn run_without_scenarios_is_a_usage_error() {
    rehearse_cmd().arg("run").assert().code(2);
}
