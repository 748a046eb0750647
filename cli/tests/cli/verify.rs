use crate::utils::{corrupt_last_crc, setup_image};
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

#[test]
fn verify_ok() {
    let image = setup_image("verify_ok", "diagram_with_source.png");

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.arg("verify")
        .arg(&image)
        .assert()
        .success()
        .stdout(predicate::str::ends_with("OK\n"));
}

#[test]
fn verify_wrong_crc() {
    let image = setup_image("verify_wrong_crc", "diagram_with_source.png");
    corrupt_last_crc(&image);

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.arg("verify")
        .arg(&image)
        .assert()
        .failure()
        .stderr(predicate::str::contains("CRC mismatch in tEXt chunk"));
}

#[test]
fn verify_truncated() {
    let image = setup_image("verify_truncated", "diagram.png");
    let bytes = fs::read(&image).unwrap();
    fs::write(&image, &bytes[..bytes.len() - 4]).unwrap();

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.arg("verify")
        .arg(&image)
        .assert()
        .failure()
        .stderr(predicate::str::contains("truncated chunk"));
}

#[test]
fn verify_missing_file() {
    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.args(["verify", "no/such/image.png"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
