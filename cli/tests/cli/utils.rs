use std::{fs, path::PathBuf};

pub const DIAGRAM_SOURCE: &str = "graph TB\n AA-->BB\n AA-->CC";
pub const DIAGRAM_SOURCE_BASE64: &str = "Z3JhcGggVEIKIEFBLS0+QkIKIEFBLS0+Q0M=";

/// Copies `resources/test/<name>` into a fresh directory named after the
/// test and returns the path of the copy.
pub fn setup_image(test: &str, name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(test);
    if dir.exists() {
        fs::remove_dir_all(&dir).unwrap();
    }
    fs::create_dir_all(&dir).unwrap();
    let dest = dir.join(name);
    fs::copy(format!("../resources/test/{name}"), &dest).unwrap();
    dest
}

/// Flips one byte of the CRC of the last chunk before `IEND`.
pub fn corrupt_last_crc(path: &PathBuf) {
    let mut bytes = fs::read(path).unwrap();
    let idx = bytes.len() - 13;
    bytes[idx] ^= 0xFF;
    fs::write(path, bytes).unwrap();
}
