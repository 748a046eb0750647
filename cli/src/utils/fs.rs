use anyhow::Context;
use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};
use tempfile::NamedTempFile;

/// Reads a whole file into memory.
pub(crate) fn read<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Like [`read`], but `-` reads standard input.
pub(crate) fn read_input<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<u8>> {
    let path = path.as_ref();
    if path == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .context("failed to read standard input")?;
        Ok(buf)
    } else {
        read(path)
    }
}

/// Writes `bytes` to a temporary file beside `dest`, then moves it over
/// `dest`. A failed write leaves `dest` as it was.
pub(crate) fn write_replacing<P: AsRef<Path>>(dest: P, bytes: &[u8]) -> anyhow::Result<()> {
    let dest = dest.as_ref();
    let dir = dest
        .parent()
        .filter(|it| !it.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))?;
    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create a temporary file in {}", dir.display()))?;
    temp.write_all(bytes)
        .and_then(|()| temp.flush())
        .with_context(|| format!("failed to write {}", temp.path().display()))?;
    temp.persist(dest)
        .map_err(|e| e.error)
        .with_context(|| format!("failed to write {}", dest.display()))?;
    Ok(())
}
