//! Behavioral specs for `rehearse list`.

use crate::prelude::*;

#[test]
fn list_shows_builtin_commands() {
    rehearse_cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("echo"))
        .stdout(predicates::str::contains("greet"))
        .stdout(predicates::str::contains("pick"))
        .stdout(predicates::str::contains("Pick a color from a list"));
}
