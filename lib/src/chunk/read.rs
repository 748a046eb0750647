use crate::{
    chunk::{ChunkExt, ChunkType, MIN_CHUNK_BYTES_SIZE, RawChunk},
    error::{Error, Result},
};
use std::{iter::FusedIterator, mem};

/// Reads one chunk frame from the front of `bytes`.
///
/// `offset` is the position of `bytes` inside the whole image and is only
/// used for error reporting. The stored CRC is returned as is.
pub(crate) fn read_chunk_from_slice(
    bytes: &[u8],
    offset: usize,
) -> Result<(RawChunk<&[u8]>, &[u8])> {
    let truncated = |needed: usize| Error::TruncatedChunk {
        offset,
        needed,
        available: bytes.len(),
    };

    // read chunk length
    let (length, r) = bytes
        .split_first_chunk::<{ mem::size_of::<u32>() }>()
        .ok_or_else(|| truncated(MIN_CHUNK_BYTES_SIZE))?;
    let length = u32::from_be_bytes(*length);
    let needed = MIN_CHUNK_BYTES_SIZE.saturating_add(length as usize);

    // read a chunk type
    let (ty, r) = r
        .split_first_chunk::<{ mem::size_of::<ChunkType>() }>()
        .ok_or_else(|| truncated(needed))?;

    // read chunk data
    let (data, r) = r
        .split_at_checked(length as usize)
        .ok_or_else(|| truncated(needed))?;

    // read crc sum
    let (crc, r) = r
        .split_first_chunk::<{ mem::size_of::<u32>() }>()
        .ok_or_else(|| truncated(needed))?;
    let crc = u32::from_be_bytes(*crc);

    Ok((
        RawChunk {
            length,
            ty: ChunkType(*ty),
            data,
            crc,
        },
        r,
    ))
}

/// A lazy iterator over the chunks of a PNG image, in file order.
///
/// Created by [`read_chunks`](crate::read_chunks). Iteration stops after the
/// `IEND` chunk has been yielded, when the buffer ends exactly on a chunk
/// boundary, or after the first error. Cloning the iterator gives an
/// independent cursor at the same position.
#[derive(Clone, Debug)]
pub struct Chunks<'d> {
    r: &'d [u8],
    offset: usize,
    finished: bool,
}

impl<'d> Chunks<'d> {
    #[inline]
    pub(crate) const fn new(body: &'d [u8], offset: usize) -> Self {
        Self {
            r: body,
            offset,
            finished: false,
        }
    }

    /// Byte offset, from the start of the image, of the next chunk frame.
    #[inline]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Bytes that have not been consumed yet.
    ///
    /// After the `IEND` chunk this is whatever trailing data the image has.
    #[inline]
    pub const fn remaining(&self) -> &'d [u8] {
        self.r
    }
}

impl<'d> Iterator for Chunks<'d> {
    type Item = Result<RawChunk<&'d [u8]>>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished || self.r.is_empty() {
            self.finished = true;
            return None;
        }
        match read_chunk_from_slice(self.r, self.offset) {
            Ok((chunk, rest)) => {
                self.offset += chunk.bytes_len();
                self.r = rest;
                self.finished = chunk.ty == ChunkType::IEND;
                Some(Ok(chunk))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (0, Some(self.r.len().div_ceil(MIN_CHUNK_BYTES_SIZE)))
        }
    }
}

impl FusedIterator for Chunks<'_> {}
