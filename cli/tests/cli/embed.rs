use crate::utils::{DIAGRAM_SOURCE, DIAGRAM_SOURCE_BASE64, setup_image};
use assert_cmd::cargo::cargo_bin_cmd;
use libpngmeta::{DEFAULT_KEYWORD, get_text, text_entries, verify};
use predicates::prelude::*;
use std::fs;

#[test]
fn embed_then_extract() {
    let image = setup_image("embed_then_extract", "diagram.png");
    let source = image.with_file_name("diagram.mmd");
    fs::write(&source, DIAGRAM_SOURCE).unwrap();

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.arg("embed")
        .arg(&image)
        .arg("--source")
        .arg(&source)
        .assert()
        .success();

    let png = fs::read(&image).unwrap();
    assert_eq!(
        get_text(&png, DEFAULT_KEYWORD).unwrap().as_deref(),
        Some(DIAGRAM_SOURCE_BASE64)
    );
    assert_eq!(verify(&png).unwrap(), 5);

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.arg("extract")
        .arg(&image)
        .assert()
        .success()
        .stdout(DIAGRAM_SOURCE);
}

#[test]
fn embed_to_output_keeps_input() {
    let image = setup_image("embed_to_output_keeps_input", "diagram.png");
    let output = image.with_file_name("out/diagram.png");
    let original = fs::read(&image).unwrap();

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.arg("embed")
        .arg(&image)
        .args(["--text", "graph LR", "--keyword", "diagram", "-o"])
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read(&image).unwrap(), original);
    let png = fs::read(&output).unwrap();
    assert_eq!(
        get_text(&png, "diagram").unwrap().as_deref(),
        Some("Z3JhcGggTFI=")
    );
}

#[test]
fn embed_from_stdin() {
    let image = setup_image("embed_from_stdin", "diagram.png");

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.arg("embed")
        .arg(&image)
        .args(["--source", "-"])
        .write_stdin(DIAGRAM_SOURCE)
        .assert()
        .success();

    let png = fs::read(&image).unwrap();
    assert_eq!(
        get_text(&png, DEFAULT_KEYWORD).unwrap().as_deref(),
        Some(DIAGRAM_SOURCE_BASE64)
    );
}

#[test]
fn embed_twice_accumulates_unless_replace() {
    let image = setup_image(
        "embed_twice_accumulates_unless_replace",
        "diagram_with_source.png",
    );
    let count = |png: &[u8]| {
        text_entries(png)
            .unwrap()
            .filter(|e| e.as_ref().unwrap().keyword() == DEFAULT_KEYWORD.as_bytes())
            .count()
    };

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.arg("embed")
        .arg(&image)
        .args(["--text", "graph LR"])
        .assert()
        .success();
    let png = fs::read(&image).unwrap();
    assert_eq!(count(&png), 2);
    // the first entry still wins
    assert_eq!(
        get_text(&png, DEFAULT_KEYWORD).unwrap().as_deref(),
        Some(DIAGRAM_SOURCE_BASE64)
    );

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.arg("embed")
        .arg(&image)
        .args(["--text", "graph LR", "--replace"])
        .assert()
        .success();
    let png = fs::read(&image).unwrap();
    assert_eq!(count(&png), 1);
    assert_eq!(
        get_text(&png, DEFAULT_KEYWORD).unwrap().as_deref(),
        Some("Z3JhcGggTFI=")
    );
    assert_eq!(
        get_text(&png, "Software").unwrap().as_deref(),
        Some("pngmeta test")
    );
}

#[test]
fn embed_into_non_png_fails() {
    let image = setup_image("embed_into_non_png_fails", "diagram.png");
    let text = image.with_file_name("notes.txt");
    fs::write(&text, "just text").unwrap();

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.arg("embed")
        .arg(&text)
        .args(["--text", "graph LR"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a PNG image"));
    assert_eq!(fs::read(&text).unwrap(), b"just text");
}

#[test]
fn embed_rejects_invalid_keyword() {
    let image = setup_image("embed_rejects_invalid_keyword", "diagram.png");

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.arg("embed")
        .arg(&image)
        .args(["--text", "graph LR", "--keyword", "a\u{2192}b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a Latin-1 character"));
}
