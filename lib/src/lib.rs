//! A library for storing text metadata inside PNG images.
//!
//! It reads and writes the chunk container of a PNG file without decoding
//! any pixel data. The main use is embedding the source of a rendered
//! diagram in the image itself, as a `tEXt` chunk, so the image carries
//! everything needed to edit and re-render it later.
//!
//! ```
//! use libpngmeta::{ChunkType, DEFAULT_KEYWORD, get_text, is_png, save_text, write_chunks};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rendered = write_chunks([(ChunkType::IEND, &b""[..])])?;
//! let png = save_text(&rendered, DEFAULT_KEYWORD, "Z3JhcGggVEI=")?;
//!
//! assert!(is_png(&png));
//! assert_eq!(get_text(&png, DEFAULT_KEYWORD)?.as_deref(), Some("Z3JhcGggVEI="));
//! # Ok(())
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/libpngmeta/0.1.0")]
pub(crate) mod chunk;
pub(crate) mod codec;
pub(crate) mod error;
pub(crate) mod png;
pub mod prelude;
pub(crate) mod text;

pub use chunk::*;
pub use codec::*;
pub use error::*;
pub use png::*;
pub use text::*;
