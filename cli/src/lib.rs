//! The `pngmeta-cli` crate provides a command-line interface for storing
//! diagram source in PNG images.
//!
//! It parses arguments, reads and writes files, and does the base64
//! encoding of the source. Everything about the PNG format itself is left
//! to `libpngmeta`.

#![doc = include_str!("../README.md")]
pub mod cli;
pub mod command;
mod utils;
