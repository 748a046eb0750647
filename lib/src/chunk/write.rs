use crate::{
    chunk::{Chunk, ChunkType, MAX_CHUNK_DATA_LENGTH, MIN_CHUNK_BYTES_SIZE},
    png::PNG_SIGNATURE,
};
use std::io::{self, Write};

/// Writes framed PNG chunks into `W`.
///
/// The CRC of every chunk is computed from its type and data at write time,
/// so everything written through this type is self-consistent.
///
/// # Examples
/// ```
/// use libpngmeta::{ChunkType, ChunkWriter, is_png};
///
/// # fn main() -> std::io::Result<()> {
/// let mut writer = ChunkWriter::from(Vec::new());
/// writer.write_signature()?;
/// writer.write_chunk(ChunkType::IEND, &[])?;
/// let png = writer.into_inner();
/// assert!(is_png(&png));
/// assert_eq!(png.len(), 20);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ChunkWriter<W> {
    w: W,
}

impl<W> ChunkWriter<W> {
    /// Unwraps this writer, returning the underlying writer.
    #[inline]
    pub fn into_inner(self) -> W {
        self.w
    }
}

impl<W> From<W> for ChunkWriter<W>
where
    W: Write,
{
    #[inline]
    fn from(writer: W) -> Self {
        Self { w: writer }
    }
}

impl<W: Write> ChunkWriter<W> {
    /// Writes the 8-byte PNG signature.
    #[inline]
    pub fn write_signature(&mut self) -> io::Result<usize> {
        self.w.write_all(PNG_SIGNATURE)?;
        Ok(PNG_SIGNATURE.len())
    }

    /// Writes one chunk and returns the number of bytes written.
    ///
    /// Fails with [`io::ErrorKind::InvalidInput`] if `data` is longer than
    /// a PNG chunk may be.
    pub fn write_chunk(&mut self, type_: ChunkType, data: &[u8]) -> io::Result<usize> {
        check_data_len(type_, data.len())?;
        let chunk = (type_, data);

        // write length
        let length = chunk.length();
        self.w.write_all(&length.to_be_bytes())?;

        // write chunk type
        self.w.write_all(&chunk.ty().0)?;

        // write data
        self.w.write_all(chunk.data())?;

        // write crc32
        self.w.write_all(&chunk.crc().to_be_bytes())?;
        Ok(MIN_CHUNK_BYTES_SIZE + chunk.data().len())
    }
}

fn check_data_len(type_: ChunkType, len: usize) -> io::Result<()> {
    if len > MAX_CHUNK_DATA_LENGTH {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{type_} chunk data of {len} bytes exceeds {MAX_CHUNK_DATA_LENGTH} bytes"),
        ));
    }
    Ok(())
}
