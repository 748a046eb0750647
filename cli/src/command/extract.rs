use crate::{command::Command, utils};
use base64::{Engine, prelude::BASE64_STANDARD};
use clap::{Parser, ValueHint};
use libpngmeta::{
    ChecksumPolicy, DEFAULT_KEYWORD, Keyword, ReadOptions, get_text_bytes_with, is_png,
};
use std::{
    io::{self, Write},
    path::PathBuf,
};

#[derive(thiserror::Error, Debug)]
pub(crate) enum ExtractError {
    #[error("{0} is not a PNG image")]
    NotPng(PathBuf),
    #[error("no `{0}` metadata found")]
    NotFound(Keyword),
    #[error("`{0}` metadata is not valid base64")]
    Decode(Keyword, #[source] base64::DecodeError),
}

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct ExtractCommand {
    #[arg(help = "PNG image to read", value_hint = ValueHint::FilePath)]
    pub(crate) image: PathBuf,
    #[arg(
        short,
        long,
        default_value = DEFAULT_KEYWORD,
        help = "tEXt keyword the source is stored under"
    )]
    pub(crate) keyword: Keyword,
    #[arg(long, help = "Print the stored value as is, without base64 decoding")]
    pub(crate) raw: bool,
    #[arg(long, help = "Fail on chunks with a wrong CRC")]
    pub(crate) strict: bool,
    #[arg(
        short,
        long,
        help = "Write the source to this file instead of standard output",
        value_hint = ValueHint::FilePath
    )]
    pub(crate) output: Option<PathBuf>,
}

impl Command for ExtractCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        extract_source(self)
    }
}

fn extract_source(args: ExtractCommand) -> anyhow::Result<()> {
    let png = utils::fs::read(&args.image)?;
    let source = decode_source(&png, &args)?;
    match &args.output {
        Some(path) => utils::fs::write_replacing(path, &source)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&source)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn decode_source(png: &[u8], args: &ExtractCommand) -> anyhow::Result<Vec<u8>> {
    if !is_png(png) {
        return Err(ExtractError::NotPng(args.image.clone()).into());
    }
    let options = ReadOptions::builder()
        .checksum(if args.strict {
            ChecksumPolicy::Reject
        } else {
            ChecksumPolicy::Tolerate
        })
        .build();
    let keyword = args.keyword.to_string();
    let stored = get_text_bytes_with(png, &keyword, options)?
        .ok_or_else(|| ExtractError::NotFound(args.keyword.clone()))?;
    log::debug!("found {} stored bytes under `{keyword}`", stored.len());
    if args.raw {
        return Ok(stored.to_vec());
    }
    BASE64_STANDARD
        .decode(stored)
        .map_err(|e| ExtractError::Decode(args.keyword.clone(), e).into())
}
