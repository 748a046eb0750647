use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn complete_bash() {
    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.args(["complete", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pngmeta").and(predicate::str::contains("embed")));
}

#[test]
fn complete_unknown_shell() {
    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.args(["complete", "cmd.exe"]).assert().failure();
}
