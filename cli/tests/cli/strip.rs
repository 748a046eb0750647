use crate::utils::setup_image;
use assert_cmd::cargo::cargo_bin_cmd;
use libpngmeta::{DEFAULT_KEYWORD, get_text, verify};
use std::fs;

#[test]
fn strip_removes_source() {
    let image = setup_image("strip_removes_source", "diagram_with_source.png");

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.arg("strip").arg(&image).assert().success();

    let png = fs::read(&image).unwrap();
    assert_eq!(get_text(&png, DEFAULT_KEYWORD).unwrap(), None);
    assert_eq!(
        get_text(&png, "Software").unwrap().as_deref(),
        Some("pngmeta test")
    );
    // stripping the prepared image gives back the plain one
    assert_eq!(png, fs::read("../resources/test/diagram.png").unwrap());
    assert_eq!(verify(&png).unwrap(), 4);
}

#[test]
fn strip_other_keyword_to_output() {
    let image = setup_image("strip_other_keyword_to_output", "diagram_with_source.png");
    let output = image.with_file_name("stripped.png");
    let original = fs::read(&image).unwrap();

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.arg("strip")
        .arg(&image)
        .args(["--keyword", "Software", "-o"])
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read(&image).unwrap(), original);
    let png = fs::read(&output).unwrap();
    assert_eq!(get_text(&png, "Software").unwrap(), None);
    assert!(get_text(&png, DEFAULT_KEYWORD).unwrap().is_some());
}

#[test]
fn strip_without_metadata_is_a_no_op() {
    let image = setup_image("strip_without_metadata_is_a_no_op", "diagram.png");
    let original = fs::read(&image).unwrap();

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.args(["--quiet", "strip"]).arg(&image).assert().success();

    assert_eq!(fs::read(&image).unwrap(), original);
}
