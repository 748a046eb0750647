use std::fmt::{self, Debug, Display, Formatter};

/// An error which can be returned when creating a [`ChunkType`].
#[derive(thiserror::Error, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ChunkTypeError {
    /// A byte of the chunk type is not an ASCII letter.
    #[error("chunk type must be ASCII alphabetic")]
    NonAsciiAlphabetic,
    /// The chunk type is not exactly four bytes long.
    #[error("chunk type must be 4 bytes, got {0}")]
    InvalidLength(usize),
}

/// A 4-byte chunk type code.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ChunkType(pub(crate) [u8; 4]);

#[allow(non_upper_case_globals)]
impl ChunkType {
    // -- Critical chunks --
    /// Image header
    pub const IHDR: ChunkType = ChunkType(*b"IHDR");
    /// Palette
    pub const PLTE: ChunkType = ChunkType(*b"PLTE");
    /// Image data
    pub const IDAT: ChunkType = ChunkType(*b"IDAT");
    /// Image end
    pub const IEND: ChunkType = ChunkType(*b"IEND");

    // -- Ancillary chunks --
    /// Textual data
    pub const tEXt: ChunkType = ChunkType(*b"tEXt");
    /// Compressed textual data
    pub const zTXt: ChunkType = ChunkType(*b"zTXt");
    /// International textual data
    pub const iTXt: ChunkType = ChunkType(*b"iTXt");

    /// Creates a [`ChunkType`] after checking that every byte is an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use libpngmeta::ChunkType;
    ///
    /// assert_eq!(ChunkType::new(*b"tEXt").unwrap(), ChunkType::tEXt);
    /// assert!(ChunkType::new(*b"tE1t").is_err());
    /// ```
    #[inline]
    pub const fn new(ty: [u8; 4]) -> Result<Self, ChunkTypeError> {
        let mut i = 0;
        while i < ty.len() {
            if !ty[i].is_ascii_alphabetic() {
                return Err(ChunkTypeError::NonAsciiAlphabetic);
            }
            i += 1;
        }
        Ok(Self(ty))
    }

    /// Returns the raw type bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Returns `true` if decoders must understand this chunk to show the image.
    #[inline]
    pub const fn is_critical(&self) -> bool {
        self.0[0] & 0x20 == 0
    }

    /// Returns `true` if the chunk type is registered in the PNG specification.
    #[inline]
    pub const fn is_public(&self) -> bool {
        self.0[1] & 0x20 == 0
    }

    /// Returns `true` if editors may copy this chunk without understanding it.
    #[inline]
    pub const fn is_safe_to_copy(&self) -> bool {
        self.0[3] & 0x20 != 0
    }
}

impl TryFrom<&[u8]> for ChunkType {
    type Error = ChunkTypeError;

    #[inline]
    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let ty: [u8; 4] = value
            .try_into()
            .map_err(|_| ChunkTypeError::InvalidLength(value.len()))?;
        Self::new(ty)
    }
}

impl Display for ChunkType {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            fmt::Write::write_char(f, b as char)?;
        }
        Ok(())
    }
}

impl Debug for ChunkType {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ChunkType({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(ChunkType::IEND.to_string(), "IEND");
        assert_eq!(ChunkType::tEXt.to_string(), "tEXt");
    }

    #[test]
    fn property_bits() {
        assert!(ChunkType::IHDR.is_critical());
        assert!(ChunkType::IEND.is_critical());
        assert!(!ChunkType::tEXt.is_critical());
        assert!(ChunkType::tEXt.is_public());
        assert!(ChunkType::tEXt.is_safe_to_copy());
        assert!(!ChunkType::IDAT.is_safe_to_copy());
        let private = ChunkType::new(*b"meTa").unwrap();
        assert!(!private.is_public());
    }

    #[test]
    fn try_from_slice() {
        assert_eq!(ChunkType::try_from(&b"IDAT"[..]), Ok(ChunkType::IDAT));
        assert_eq!(
            ChunkType::try_from(&b"IDA"[..]),
            Err(ChunkTypeError::InvalidLength(3))
        );
        assert_eq!(
            ChunkType::try_from(&b"ID T"[..]),
            Err(ChunkTypeError::NonAsciiAlphabetic)
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ChunkTypeError::InvalidLength(3).to_string(),
            "chunk type must be 4 bytes, got 3"
        );
        let err: Box<dyn std::error::Error> = Box::new(ChunkTypeError::NonAsciiAlphabetic);
        assert_eq!(err.to_string(), "chunk type must be ASCII alphabetic");
    }
}
