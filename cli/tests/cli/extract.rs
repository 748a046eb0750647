use crate::utils::{DIAGRAM_SOURCE, DIAGRAM_SOURCE_BASE64, corrupt_last_crc, setup_image};
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

#[test]
fn extract_prepared_image() {
    let image = setup_image("extract_prepared_image", "diagram_with_source.png");

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.arg("extract")
        .arg(&image)
        .assert()
        .success()
        .stdout(DIAGRAM_SOURCE);
}

#[test]
fn extract_raw() {
    let image = setup_image("extract_raw", "diagram_with_source.png");

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.args(["x", "--raw"])
        .arg(&image)
        .assert()
        .success()
        .stdout(DIAGRAM_SOURCE_BASE64);
}

#[test]
fn extract_other_keyword() {
    let image = setup_image("extract_other_keyword", "diagram_with_source.png");

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.arg("extract")
        .arg(&image)
        .args(["--keyword", "Software", "--raw"])
        .assert()
        .success()
        .stdout("pngmeta test");
}

#[test]
fn extract_to_file() {
    let image = setup_image("extract_to_file", "diagram_with_source.png");
    let output = image.with_file_name("diagram.mmd");

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.arg("extract")
        .arg(&image)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout("");
    assert_eq!(fs::read_to_string(&output).unwrap(), DIAGRAM_SOURCE);
}

#[test]
fn extract_missing_metadata() {
    let image = setup_image("extract_missing_metadata", "diagram.png");

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.arg("extract")
        .arg(&image)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no `mermaid` metadata found"));
}

#[test]
fn extract_from_non_png() {
    let image = setup_image("extract_from_non_png", "diagram.png");
    let text = image.with_file_name("diagram.mmd");
    fs::write(&text, DIAGRAM_SOURCE).unwrap();

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.arg("extract")
        .arg(&text)
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a PNG image"));
}

#[test]
fn extract_strict_rejects_wrong_crc() {
    let image = setup_image(
        "extract_strict_rejects_wrong_crc",
        "diagram_with_source.png",
    );
    corrupt_last_crc(&image);

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.arg("extract")
        .arg(&image)
        .assert()
        .success()
        .stdout(DIAGRAM_SOURCE);

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.args(["extract", "--strict"])
        .arg(&image)
        .assert()
        .failure()
        .stderr(predicate::str::contains("CRC"));
}
