//! Reading and writing keyword/value metadata stored in `tEXt` chunks.
//!
//! Writes never touch the input buffer, they always return a new one.
//! Existing chunks are kept in their original order. Their CRCs are
//! recomputed on the way out, so a chunk that arrived with a stale CRC
//! leaves with a correct one.
mod options;

pub use self::options::*;
use crate::{
    chunk::{Chunk, ChunkExt, ChunkType, ChunkWriter, Chunks, RawChunk},
    error::{Error, Result},
    png::read_chunks,
    text::{Keyword, TextChunk, decode_latin1, split_text_data},
};
use std::iter::FusedIterator;

/// Keyword under which diagram source is stored by default.
pub const DEFAULT_KEYWORD: &str = "mermaid";

/// Fails with [`Error::ChecksumMismatch`] if the stored CRC of `chunk` is wrong.
fn check_crc(chunk: &RawChunk<&[u8]>, offset: usize) -> Result<()> {
    let computed = crate::compute_crc(chunk.ty(), chunk.data());
    if computed != chunk.crc() {
        return Err(Error::ChecksumMismatch {
            ty: chunk.ty(),
            offset,
            stored: chunk.crc(),
            computed,
        });
    }
    Ok(())
}

#[inline]
fn is_text_with_keyword(chunk: &RawChunk<&[u8]>, keyword: &Keyword) -> bool {
    chunk.ty() == ChunkType::tEXt
        && split_text_data(chunk.data()).is_some_and(|(k, _)| k == keyword.as_bytes())
}

/// Returns the raw value bytes of the first `tEXt` chunk whose keyword
/// matches, borrowed from `bytes`.
///
/// See [`get_text_with`] for the error and checksum rules.
#[inline]
pub fn get_text_bytes<'d>(bytes: &'d [u8], keyword: &str) -> Result<Option<&'d [u8]>> {
    get_text_bytes_with(bytes, keyword, ReadOptions::default())
}

/// [`get_text_bytes`] with explicit [`ReadOptions`].
pub fn get_text_bytes_with<'d>(
    bytes: &'d [u8],
    keyword: &str,
    options: impl ReadOption,
) -> Result<Option<&'d [u8]>> {
    let keyword = Keyword::new(keyword)?;
    let mut chunks = read_chunks(bytes)?;
    loop {
        let offset = chunks.offset();
        let Some(chunk) = chunks.next() else {
            return Ok(None);
        };
        let chunk = chunk?;
        if options.checksum() == ChecksumPolicy::Reject {
            check_crc(&chunk, offset)?;
        }
        if chunk.ty() != ChunkType::tEXt {
            continue;
        }
        if let Some((k, value)) = split_text_data(chunk.as_slice()) {
            if k == keyword.as_bytes() {
                return Ok(Some(value));
            }
        }
    }
}

/// Returns the value of the first `tEXt` chunk whose keyword matches,
/// decoded as Latin-1, or `None` if there is no such chunk.
///
/// Chunks with a wrong CRC are still searched; use [`get_text_with`] and
/// [`ChecksumPolicy::Reject`] to fail on them instead.
///
/// # Examples
/// ```
/// use libpngmeta::{ChunkType, get_text, save_text, write_chunks};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let png = write_chunks([(ChunkType::IEND, &b""[..])])?;
/// assert_eq!(get_text(&png, "mermaid")?, None);
///
/// let png = save_text(&png, "mermaid", "Z3JhcGggVEI=")?;
/// assert_eq!(get_text(&png, "mermaid")?.as_deref(), Some("Z3JhcGggVEI="));
/// # Ok(())
/// # }
/// ```
#[inline]
pub fn get_text(bytes: &[u8], keyword: &str) -> Result<Option<String>> {
    get_text_with(bytes, keyword, ReadOptions::default())
}

/// [`get_text`] with explicit [`ReadOptions`].
///
/// # Errors
/// - [`Error::NotAPng`] if `bytes` does not start with the PNG signature.
/// - [`Error::TruncatedChunk`] if a damaged frame is reached before a match.
///   A match found earlier in the file is still returned.
/// - [`Error::ChecksumMismatch`] under [`ChecksumPolicy::Reject`], for the
///   first chunk visited with a wrong CRC.
/// - [`Error::InvalidKeyword`] if `keyword` can never be a valid keyword.
///
/// A stream that ends without an `IEND` chunk is not an error here, the
/// search just ends.
#[inline]
pub fn get_text_with(
    bytes: &[u8],
    keyword: &str,
    options: impl ReadOption,
) -> Result<Option<String>> {
    Ok(get_text_bytes_with(bytes, keyword, options)?.map(decode_latin1))
}

/// Returns a copy of `bytes` with a `tEXt` chunk `keyword\0value` inserted
/// right before `IEND`.
///
/// Nothing is replaced: text chunks already present, with the same keyword
/// or not, are kept. Calling this twice with the same keyword leaves two
/// chunks and [`get_text`] keeps returning the first one. Use
/// [`replace_text`] for replacement.
///
/// # Errors
/// - [`Error::InvalidKeyword`] / [`Error::InvalidText`] on bad input.
/// - [`Error::NotAPng`], [`Error::TruncatedChunk`] for damaged images.
/// - [`Error::MissingEndMarker`] if the chunk stream has no `IEND`.
#[inline]
pub fn save_text(bytes: &[u8], keyword: &str, value: &str) -> Result<Vec<u8>> {
    let chunk = TextChunk::new(Keyword::new(keyword)?, value)?;
    splice(bytes, &chunk, |_| true)
}

/// [`save_text`] for a value that is not Latin-1 text.
#[inline]
pub fn save_text_bytes(bytes: &[u8], keyword: &str, value: &[u8]) -> Result<Vec<u8>> {
    let chunk = TextChunk::from_bytes(Keyword::new(keyword)?, value)?;
    splice(bytes, &chunk, |_| true)
}

/// Returns a copy of `bytes` where every `tEXt` chunk with `keyword` is
/// dropped and a single new one holding `value` sits right before `IEND`.
#[inline]
pub fn replace_text(bytes: &[u8], keyword: &str, value: &str) -> Result<Vec<u8>> {
    let keyword = Keyword::new(keyword)?;
    let chunk = TextChunk::new(keyword.clone(), value)?;
    splice(bytes, &chunk, |c| !is_text_with_keyword(c, &keyword))
}

/// Returns a copy of `bytes` without any `tEXt` chunk whose keyword matches.
pub fn remove_text(bytes: &[u8], keyword: &str) -> Result<Vec<u8>> {
    let keyword = Keyword::new(keyword)?;
    let chunks = collect_until_end(bytes)?;
    let mut writer = ChunkWriter::from(Vec::with_capacity(bytes.len()));
    writer.write_signature()?;
    for chunk in chunks
        .iter()
        .filter(|c| !is_text_with_keyword(c, &keyword))
    {
        writer.write_chunk(chunk.ty(), chunk.data())?;
    }
    Ok(writer.into_inner())
}

/// Reads every chunk up to and including `IEND`.
fn collect_until_end(bytes: &[u8]) -> Result<Vec<RawChunk<&[u8]>>> {
    let chunks = read_chunks(bytes)?.collect::<Result<Vec<_>>>()?;
    match chunks.last() {
        Some(last) if last.ty() == ChunkType::IEND => Ok(chunks),
        _ => Err(Error::MissingEndMarker),
    }
}

/// Writes the chunks of `bytes` that pass `keep`, with `insert` placed
/// immediately before `IEND`.
fn splice<F>(bytes: &[u8], insert: &TextChunk, mut keep: F) -> Result<Vec<u8>>
where
    F: FnMut(&RawChunk<&[u8]>) -> bool,
{
    let chunks = collect_until_end(bytes)?;
    let (end, rest) = chunks
        .split_last()
        .ok_or(Error::MissingEndMarker)?;
    let mut writer = ChunkWriter::from(Vec::with_capacity(bytes.len() + insert.bytes_len()));
    writer.write_signature()?;
    for chunk in rest.iter().filter(|c| keep(*c)) {
        writer.write_chunk(chunk.ty(), chunk.data())?;
    }
    writer.write_chunk(insert.ty(), insert.data())?;
    writer.write_chunk(end.ty(), end.data())?;
    Ok(writer.into_inner())
}

/// A keyword/value pair read from a `tEXt` chunk.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TextEntry<'d> {
    keyword: &'d [u8],
    value: &'d [u8],
    crc_valid: bool,
}

impl<'d> TextEntry<'d> {
    /// Raw Latin-1 keyword bytes.
    #[inline]
    pub fn keyword(&self) -> &'d [u8] {
        self.keyword
    }

    /// Raw value bytes.
    #[inline]
    pub fn value(&self) -> &'d [u8] {
        self.value
    }

    #[inline]
    pub fn keyword_str(&self) -> String {
        decode_latin1(self.keyword)
    }

    #[inline]
    pub fn value_str(&self) -> String {
        decode_latin1(self.value)
    }

    /// Whether the chunk's stored CRC was correct.
    #[inline]
    pub fn is_crc_valid(&self) -> bool {
        self.crc_valid
    }
}

/// Iterator over the `tEXt` entries of an image, in file order.
///
/// Created by [`text_entries`]. `tEXt` chunks without a NUL separator are
/// skipped.
#[derive(Clone, Debug)]
pub struct TextEntries<'d> {
    chunks: Chunks<'d>,
}

impl<'d> Iterator for TextEntries<'d> {
    type Item = Result<TextEntry<'d>>;

    fn next(&mut self) -> Option<Self::Item> {
        for chunk in self.chunks.by_ref() {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => return Some(Err(e)),
            };
            if chunk.ty() != ChunkType::tEXt {
                continue;
            }
            if let Some((keyword, value)) = split_text_data(chunk.as_slice()) {
                return Some(Ok(TextEntry {
                    keyword,
                    value,
                    crc_valid: chunk.is_crc_valid(),
                }));
            }
        }
        None
    }
}

impl FusedIterator for TextEntries<'_> {}

/// Lists every `tEXt` keyword/value pair of `bytes`.
///
/// # Examples
/// ```
/// use libpngmeta::{ChunkType, save_text, text_entries, write_chunks};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let png = write_chunks([(ChunkType::IEND, &b""[..])])?;
/// let png = save_text(&png, "Title", "diagram")?;
/// let png = save_text(&png, "mermaid", "Z3JhcGggVEI=")?;
/// let keywords = text_entries(&png)?
///     .map(|e| e.map(|e| e.keyword_str()))
///     .collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(keywords, ["Title", "mermaid"]);
/// # Ok(())
/// # }
/// ```
#[inline]
pub fn text_entries(bytes: &[u8]) -> Result<TextEntries<'_>> {
    Ok(TextEntries {
        chunks: read_chunks(bytes)?,
    })
}

/// Checks the framing and CRC of every chunk and that the stream ends with
/// `IEND`. Returns the number of chunks checked.
pub fn verify(bytes: &[u8]) -> Result<usize> {
    let mut chunks = read_chunks(bytes)?;
    let mut count = 0;
    let mut last = None;
    loop {
        let offset = chunks.offset();
        let Some(chunk) = chunks.next() else {
            break;
        };
        let chunk = chunk?;
        check_crc(&chunk, offset)?;
        count += 1;
        last = Some(chunk.ty());
    }
    if last != Some(ChunkType::IEND) {
        return Err(Error::MissingEndMarker);
    }
    Ok(count)
}
