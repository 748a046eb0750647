use crate::{
    chunk::{Chunk, ChunkWriter, Chunks},
    error::{Error, Result},
};
use std::io;

/// The magic number of Portable Network Graphics
pub const PNG_SIGNATURE: &[u8; 8] = b"\x89PNG\r\n\x1A\n";

/// Returns `true` if `bytes` starts with the PNG signature.
///
/// Never fails, whatever the input.
///
/// # Examples
/// ```
/// use libpngmeta::is_png;
///
/// assert!(!is_png(&[]));
/// assert!(!is_png(b"\x89PNG"));
/// assert!(!is_png(b"GIF89a\0\0"));
/// assert!(is_png(b"\x89PNG\r\n\x1A\n"));
/// ```
#[inline]
pub fn is_png(bytes: &[u8]) -> bool {
    bytes.starts_with(PNG_SIGNATURE)
}

fn read_signature_from_slice(bytes: &[u8]) -> Result<&[u8]> {
    let (signature, body) = bytes
        .split_at_checked(PNG_SIGNATURE.len())
        .ok_or(Error::NotAPng)?;
    if signature != PNG_SIGNATURE {
        return Err(Error::NotAPng);
    }
    Ok(body)
}

/// Validates the PNG signature and returns a lazy iterator over the chunks.
///
/// # Errors
/// Returns [`Error::NotAPng`] if `bytes` is shorter than the signature or
/// does not start with it. Framing errors are reported by the iterator.
///
/// # Examples
/// ```
/// use libpngmeta::{Chunk, ChunkType, read_chunks, write_chunks};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let png = write_chunks([(ChunkType::IEND, &b""[..])])?;
/// let types = read_chunks(&png)?
///     .map(|chunk| chunk.map(|c| c.ty()))
///     .collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(types, [ChunkType::IEND]);
/// # Ok(())
/// # }
/// ```
#[inline]
pub fn read_chunks(bytes: &[u8]) -> Result<Chunks<'_>> {
    let body = read_signature_from_slice(bytes)?;
    Ok(Chunks::new(body, PNG_SIGNATURE.len()))
}

/// Serializes the PNG signature followed by `chunks`, in order.
///
/// Every CRC is recomputed from the chunk's type and data, a stale stored
/// CRC is never copied to the output.
pub fn write_chunks<I, C>(chunks: I) -> io::Result<Vec<u8>>
where
    I: IntoIterator<Item = C>,
    C: Chunk,
{
    let mut writer = ChunkWriter::from(Vec::new());
    writer.write_signature()?;
    for chunk in chunks {
        writer.write_chunk(chunk.ty(), chunk.data())?;
    }
    Ok(writer.into_inner())
}
