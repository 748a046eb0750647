use crate::{
    chunk::ChunkType,
    text::{KeywordError, TextError},
};
use std::io;

/// Errors returned by this crate.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The buffer is shorter than the PNG signature or does not start with it.
    #[error("not a PNG image")]
    NotAPng,
    /// A chunk declares more bytes than the buffer has left.
    #[error(
        "truncated chunk at offset {offset:#x}: frame needs {needed} bytes but {available} remain"
    )]
    TruncatedChunk {
        offset: usize,
        needed: usize,
        available: usize,
    },
    /// The chunk stream ends without an `IEND` chunk.
    #[error("missing IEND chunk")]
    MissingEndMarker,
    /// The stored CRC of a chunk disagrees with its type and data.
    #[error(
        "CRC mismatch in {ty} chunk at offset {offset:#x}: stored {stored:#010x}, computed {computed:#010x}"
    )]
    ChecksumMismatch {
        ty: ChunkType,
        offset: usize,
        stored: u32,
        computed: u32,
    },
    #[error("invalid keyword: {0}")]
    InvalidKeyword(#[from] KeywordError),
    #[error("invalid text: {0}")]
    InvalidText(#[from] TextError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A specialized [`Result`](std::result::Result) type for this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
