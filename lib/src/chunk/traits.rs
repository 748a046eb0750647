use super::{ChunkType, Crc32};

/// A trait representing a chunk of a PNG stream.
///
/// A chunk consists of:
/// - A length field (4 bytes, big endian)
/// - A chunk type (4 bytes)
/// - The chunk data (variable length)
/// - A CRC-32 checksum over the chunk type and data (4 bytes, big endian)
///
/// # Examples
/// ```no_run
/// use libpngmeta::{Chunk, ChunkType, RawChunk};
///
/// fn process_chunk<C: Chunk>(chunk: &C) {
///     println!("Chunk type: {}", chunk.ty());
///     println!("Data length: {}", chunk.length());
///     println!("CRC32: {:08x}", chunk.crc());
/// }
/// ```
pub trait Chunk {
    /// Returns the length of the chunk data in bytes.
    #[inline]
    fn length(&self) -> u32 {
        self.data().len() as u32
    }

    /// Returns the type of the chunk.
    fn ty(&self) -> ChunkType;

    /// Returns the data of the chunk.
    fn data(&self) -> &[u8];

    /// Returns the CRC-32 checksum of the chunk.
    ///
    /// The default implementation computes it from [`Chunk::ty`] and
    /// [`Chunk::data`]. Chunks read from a buffer return the stored value
    /// instead.
    #[inline]
    fn crc(&self) -> u32 {
        compute_crc(self.ty(), self.data())
    }
}

/// Computes the CRC-32 of a chunk from its type and data.
///
/// # Examples
/// ```
/// use libpngmeta::{ChunkType, compute_crc};
///
/// assert_eq!(compute_crc(ChunkType::IEND, &[]), 0xAE42_6082);
/// ```
#[inline]
pub fn compute_crc(ty: ChunkType, data: &[u8]) -> u32 {
    let mut crc = Crc32::new();
    crc.update(&ty.0);
    crc.update(data);
    crc.finalize()
}

/// Returns `true` if `crc` is the CRC-32 of `ty` followed by `data`.
///
/// # Examples
/// ```
/// use libpngmeta::{ChunkType, verify_crc};
///
/// assert!(verify_crc(ChunkType::IEND, &[], 0xAE42_6082));
/// assert!(!verify_crc(ChunkType::IEND, &[0], 0xAE42_6082));
/// ```
#[inline]
pub fn verify_crc(ty: ChunkType, data: &[u8], crc: u32) -> bool {
    compute_crc(ty, data) == crc
}
