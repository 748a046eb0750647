mod crc;
mod read;
mod traits;
mod types;
mod write;

use self::crc::Crc32;
pub(crate) use self::read::read_chunk_from_slice;
pub use self::{read::Chunks, traits::*, types::*, write::ChunkWriter};
use std::{mem, ops::Deref};

/// Minimum required size of bytes to represent [`Chunk`].
/// length:4 + chunk type:4 + data:0 + crc:4
pub const MIN_CHUNK_BYTES_SIZE: usize =
    mem::size_of::<u32>() + mem::size_of::<ChunkType>() + mem::size_of::<u32>();

/// Largest data length a PNG chunk may declare (2^31 - 1).
pub const MAX_CHUNK_DATA_LENGTH: usize = i32::MAX as usize;

pub trait ChunkExt: Chunk {
    /// byte size of chunk
    #[inline]
    fn bytes_len(&self) -> usize {
        MIN_CHUNK_BYTES_SIZE + self.data().len()
    }

    /// Returns `true` if the chunk's CRC matches its type and data.
    #[inline]
    fn is_crc_valid(&self) -> bool {
        verify_crc(self.ty(), self.data(), self.crc())
    }

    /// Convert the provided `Chunk` instance into a `Vec<u8>`.
    ///
    /// The CRC is computed from the chunk type and data, so the output is
    /// always a valid frame even if the stored CRC was wrong.
    ///
    /// # Returns
    ///
    /// A `Vec<u8>` containing the framed chunk.
    #[inline]
    fn to_bytes(&self) -> Vec<u8> {
        let mut vec = Vec::with_capacity(self.bytes_len());
        vec.extend_from_slice(&self.length().to_be_bytes());
        vec.extend_from_slice(&self.ty().0);
        vec.extend_from_slice(self.data());
        vec.extend_from_slice(&compute_crc(self.ty(), self.data()).to_be_bytes());
        vec
    }
}

impl<T> ChunkExt for T where T: Chunk {}

/// Represents a raw chunk.
///
/// `crc` holds the checksum exactly as stored in the source buffer, it is
/// not verified on read.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct RawChunk<D = Vec<u8>> {
    pub(crate) length: u32,
    pub(crate) ty: ChunkType,
    pub(crate) data: D,
    pub(crate) crc: u32,
}

impl<'d> RawChunk<&'d [u8]> {
    pub(crate) fn from_slice(ty: ChunkType, data: &'d [u8]) -> Self {
        let chunk = (ty, data);
        Self {
            length: chunk.length(),
            crc: chunk.crc(),
            ty,
            data,
        }
    }

    /// Returns the chunk data with the lifetime of the source buffer.
    #[inline]
    pub fn as_slice(&self) -> &'d [u8] {
        self.data
    }
}

impl Chunk for RawChunk<&[u8]> {
    #[inline]
    fn length(&self) -> u32 {
        self.length
    }

    #[inline]
    fn ty(&self) -> ChunkType {
        self.ty
    }

    #[inline]
    fn data(&self) -> &[u8] {
        self.data
    }

    #[inline]
    fn crc(&self) -> u32 {
        self.crc
    }
}

impl RawChunk {
    /// Create a new [`RawChunk`] from given [`ChunkType`] and bytes.
    ///
    /// # Examples
    /// ```
    /// use libpngmeta::{Chunk, ChunkType, RawChunk};
    ///
    /// let chunk = RawChunk::from_data(ChunkType::IEND, []);
    ///
    /// assert_eq!(chunk.length(), 0);
    /// assert_eq!(chunk.ty(), ChunkType::IEND);
    /// assert_eq!(chunk.data(), &[]);
    /// assert_eq!(chunk.crc(), 0xAE42_6082);
    /// ```
    #[inline]
    pub fn from_data<T: Into<Vec<u8>>>(ty: ChunkType, data: T) -> Self {
        #[inline]
        fn inner(ty: ChunkType, data: Vec<u8>) -> RawChunk {
            let chunk = (ty, &data[..]);
            RawChunk {
                length: chunk.length(),
                crc: chunk.crc(),
                ty,
                data,
            }
        }
        inner(ty, data.into())
    }
}

impl Chunk for RawChunk {
    #[inline]
    fn length(&self) -> u32 {
        self.length
    }

    #[inline]
    fn ty(&self) -> ChunkType {
        self.ty
    }

    #[inline]
    fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    fn crc(&self) -> u32 {
        self.crc
    }
}

impl<T: Deref<Target = [u8]>> Chunk for (ChunkType, T) {
    #[inline]
    fn ty(&self) -> ChunkType {
        self.0
    }

    #[inline]
    fn data(&self) -> &[u8] {
        &self.1
    }
}

impl<T: Chunk> Chunk for &T {
    #[inline]
    fn length(&self) -> u32 {
        (*self).length()
    }

    #[inline]
    fn ty(&self) -> ChunkType {
        (*self).ty()
    }

    #[inline]
    fn data(&self) -> &[u8] {
        (*self).data()
    }

    #[inline]
    fn crc(&self) -> u32 {
        (*self).crc()
    }
}
