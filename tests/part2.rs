use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("inputs.txt");

    cmd.assert().success().stdout(str::contains("There is(are) 6 location(s)"));
}

#[test]
fn part2_single_thread_output_right_answer() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("--threads").arg("1").arg("inputs.txt");

    cmd.assert().success().stdout(str::contains("There is(are) 6 location(s)"));
}
