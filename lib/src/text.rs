use crate::chunk::{Chunk, ChunkType, MAX_CHUNK_DATA_LENGTH};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Longest keyword a `tEXt` chunk may carry, in bytes.
pub const MAX_KEYWORD_LEN: usize = 79;

/// An error which can be returned when validating a [`Keyword`].
#[derive(thiserror::Error, Clone, Eq, PartialEq, Debug)]
pub enum KeywordError {
    #[error("keyword is empty")]
    Empty,
    #[error("keyword is {0} bytes long, at most {max} are allowed", max = MAX_KEYWORD_LEN)]
    TooLong(usize),
    #[error("keyword contains a NUL byte")]
    ContainsNul,
    #[error("keyword contains {0:?} which is not a Latin-1 character")]
    NotLatin1(char),
}

/// An error which can be returned when building a [`TextChunk`].
#[derive(thiserror::Error, Clone, Eq, PartialEq, Debug)]
pub enum TextError {
    #[error("text contains {0:?} which is not a Latin-1 character")]
    NotLatin1(char),
    #[error("text of {0} bytes does not fit in a single chunk")]
    TooLong(usize),
}

/// Encodes `s` as Latin-1, one byte per `char`.
///
/// Returns the first character above U+00FF as the error.
pub(crate) fn encode_latin1(s: &str) -> Result<Vec<u8>, char> {
    s.chars()
        .map(|c| u8::try_from(c).map_err(|_| c))
        .collect()
}

/// Decodes Latin-1 bytes. Every byte maps to the `char` of the same code
/// point, so this cannot fail.
///
/// # Examples
/// ```
/// use libpngmeta::decode_latin1;
///
/// assert_eq!(decode_latin1(b"caf\xE9"), "café");
/// ```
#[inline]
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// A validated `tEXt` keyword: 1 to 79 Latin-1 bytes, no NUL.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Keyword(Vec<u8>);

impl Keyword {
    /// Validates `keyword` and encodes it as Latin-1.
    ///
    /// # Examples
    /// ```
    /// use libpngmeta::{Keyword, KeywordError};
    ///
    /// assert_eq!(Keyword::new("mermaid").unwrap().as_bytes(), b"mermaid");
    /// assert_eq!(Keyword::new(""), Err(KeywordError::Empty));
    /// assert_eq!(Keyword::new("a\0b"), Err(KeywordError::ContainsNul));
    /// ```
    #[inline]
    pub fn new(keyword: &str) -> Result<Self, KeywordError> {
        let bytes = encode_latin1(keyword).map_err(KeywordError::NotLatin1)?;
        Self::from_bytes(bytes)
    }

    /// Validates raw Latin-1 keyword bytes.
    pub fn from_bytes<T: Into<Vec<u8>>>(keyword: T) -> Result<Self, KeywordError> {
        let keyword = keyword.into();
        if keyword.is_empty() {
            return Err(KeywordError::Empty);
        }
        if keyword.len() > MAX_KEYWORD_LEN {
            return Err(KeywordError::TooLong(keyword.len()));
        }
        if keyword.contains(&0) {
            return Err(KeywordError::ContainsNul);
        }
        Ok(Self(keyword))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Keyword {
    type Err = KeywordError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for Keyword {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&decode_latin1(&self.0))
    }
}

/// Splits `tEXt` chunk data at its first NUL byte into keyword and value.
///
/// Returns `None` when there is no separator.
#[inline]
pub fn split_text_data(data: &[u8]) -> Option<(&[u8], &[u8])> {
    let nul = data.iter().position(|&b| b == 0)?;
    Some((&data[..nul], &data[nul + 1..]))
}

/// A `tEXt` chunk: keyword, a NUL separator, then the value.
///
/// # Examples
/// ```
/// use libpngmeta::{Chunk, ChunkType, Keyword, TextChunk};
///
/// let chunk = TextChunk::new(Keyword::new("mermaid").unwrap(), "Z3JhcGggVEI=").unwrap();
/// assert_eq!(chunk.ty(), ChunkType::tEXt);
/// assert_eq!(chunk.data(), b"mermaid\0Z3JhcGggVEI=");
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TextChunk {
    data: Vec<u8>,
    keyword_len: usize,
}

impl TextChunk {
    /// Builds a text chunk whose value is `value` encoded as Latin-1.
    #[inline]
    pub fn new(keyword: Keyword, value: &str) -> Result<Self, TextError> {
        let value = encode_latin1(value).map_err(TextError::NotLatin1)?;
        Self::from_bytes(keyword, &value)
    }

    /// Builds a text chunk from raw value bytes.
    pub fn from_bytes(keyword: Keyword, value: &[u8]) -> Result<Self, TextError> {
        let keyword_len = keyword.0.len();
        check_text_len(keyword_len, value.len())?;
        let mut data = keyword.0;
        data.reserve_exact(1 + value.len());
        data.push(0);
        data.extend_from_slice(value);
        Ok(Self { data, keyword_len })
    }

    #[inline]
    pub fn keyword(&self) -> &[u8] {
        &self.data[..self.keyword_len]
    }

    #[inline]
    pub fn value(&self) -> &[u8] {
        &self.data[self.keyword_len + 1..]
    }
}

/// Keyword, separator and value must fit in one chunk.
#[inline]
fn check_text_len(keyword_len: usize, value_len: usize) -> Result<(), TextError> {
    if keyword_len + 1 + value_len > MAX_CHUNK_DATA_LENGTH {
        return Err(TextError::TooLong(value_len));
    }
    Ok(())
}

impl Chunk for TextChunk {
    #[inline]
    fn ty(&self) -> ChunkType {
        ChunkType::tEXt
    }

    #[inline]
    fn data(&self) -> &[u8] {
        &self.data
    }
}
