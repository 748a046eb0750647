use crate::{command::Command, utils};
use base64::{Engine, prelude::BASE64_STANDARD};
use clap::{ArgGroup, Parser, ValueHint};
use libpngmeta::{DEFAULT_KEYWORD, Keyword, is_png, replace_text, save_text};
use std::path::PathBuf;

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
#[command(group(ArgGroup::new("input").args(["source", "text"]).required(true)))]
pub(crate) struct EmbedCommand {
    #[arg(help = "PNG image to embed into", value_hint = ValueHint::FilePath)]
    pub(crate) image: PathBuf,
    #[arg(
        short,
        long,
        help = "Read the diagram source from this file (`-` for standard input)",
        value_hint = ValueHint::FilePath
    )]
    pub(crate) source: Option<PathBuf>,
    #[arg(short, long, help = "Diagram source given on the command line")]
    pub(crate) text: Option<String>,
    #[arg(
        short,
        long,
        default_value = DEFAULT_KEYWORD,
        help = "tEXt keyword to store the source under"
    )]
    pub(crate) keyword: Keyword,
    #[arg(long, help = "Drop existing entries with the same keyword first")]
    pub(crate) replace: bool,
    #[arg(
        short,
        long,
        help = "Write the result here instead of rewriting the image",
        value_hint = ValueHint::FilePath
    )]
    pub(crate) output: Option<PathBuf>,
}

impl Command for EmbedCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        embed_source(self)
    }
}

fn embed_source(args: EmbedCommand) -> anyhow::Result<()> {
    let png = utils::fs::read(&args.image)?;
    anyhow::ensure!(is_png(&png), "{} is not a PNG image", args.image.display());

    let source = match &args.source {
        Some(path) => utils::fs::read_input(path)?,
        None => args.text.unwrap_or_default().into_bytes(),
    };
    let encoded = BASE64_STANDARD.encode(&source);
    log::debug!(
        "encoded {} bytes of source into {} bytes",
        source.len(),
        encoded.len()
    );

    let keyword = args.keyword.to_string();
    let output = if args.replace {
        replace_text(&png, &keyword, &encoded)?
    } else {
        save_text(&png, &keyword, &encoded)?
    };

    let dest = args.output.as_ref().unwrap_or(&args.image);
    utils::fs::write_replacing(dest, &output)?;
    log::info!("embedded `{}` into {}", args.keyword, dest.display());
    Ok(())
}
