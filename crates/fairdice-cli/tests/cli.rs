//! Process-level checks of startup validation and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;

fn fairdice() -> Command {
    Command::cargo_bin("fairdice").expect("binary builds")
}

#[test]
fn two_dice_specs_exit_non_zero() {
    fairdice()
        .args(["1,2,3,4,5,6", "6,5,4,3,2,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn five_value_spec_exits_non_zero() {
    fairdice()
        .args(["1,2,3,4,5", "1,2,3,4,5,6", "6,5,4,3,2,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn negative_face_exits_non_zero() {
    fairdice()
        .args(["1,2,3,-4,5,6", "1,2,3,4,5,6", "6,5,4,3,2,1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn no_args_exit_non_zero() {
    // clap rejects the empty argument list before our validation runs.
    fairdice().assert().failure();
}

#[test]
fn menu_exit_is_orderly() {
    fairdice()
        .args(["2,2,4,4,9,9", "6,8,1,1,8,6", "7,5,3,7,5,3"])
        .write_stdin("x\n")
        .assert()
        .success();
}

#[test]
fn matrix_view_then_exit() {
    fairdice()
        .args(["2,2,4,4,9,9", "6,8,1,1,8,6", "7,5,3,7,5,3"])
        .write_stdin("2\nx\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.5556"));
}
