use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("inputs.txt");

    cmd.assert().success().stdout(str::contains("41"));
}

#[test]
fn part1_fails_on_malformed_layout() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("tests/malformed.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Expect 10 columns in this row, given 9."));
}

#[test]
fn part1_fails_on_missing_file() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("no_such_inputs.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to open given file(no_such_inputs.txt)."));
}
