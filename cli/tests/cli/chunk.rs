use crate::utils::{corrupt_last_crc, setup_image};
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn chunk_list() {
    let image = setup_image("chunk_list", "diagram_with_source.png");

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.args(["chunk", "list"])
        .arg(&image)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("IHDR")
                .and(predicate::str::contains("IDAT"))
                .and(predicate::str::contains("IEND"))
                .and(predicate::str::contains("0x0008"))
                .and(predicate::str::contains("mismatch").not()),
        );
}

#[test]
fn chunk_list_long_with_header() {
    let image = setup_image("chunk_list_long_with_header", "diagram_with_source.png");

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.args(["chunk", "list", "--long", "-H"])
        .arg(&image)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Index")
                .and(predicate::str::contains("Body"))
                .and(predicate::str::contains("Software: pngmeta test"))
                .and(predicate::str::contains("mermaid: Z3JhcGggVEIKIEFBLS0+QkIKIEFBLS0+Q0M=")),
        );
}

#[test]
fn chunk_list_reports_wrong_crc() {
    let image = setup_image("chunk_list_reports_wrong_crc", "diagram_with_source.png");
    corrupt_last_crc(&image);

    let mut cmd = cargo_bin_cmd!("pngmeta");
    cmd.args(["chunk", "list"])
        .arg(&image)
        .assert()
        .success()
        .stdout(predicate::str::contains("mismatch"));
}
