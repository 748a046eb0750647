use crate::{command::Command, utils};
use clap::{Parser, ValueHint};
use libpngmeta::{DEFAULT_KEYWORD, Keyword, is_png, remove_text, text_entries};
use std::path::PathBuf;

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct StripCommand {
    #[arg(help = "PNG image to strip", value_hint = ValueHint::FilePath)]
    pub(crate) image: PathBuf,
    #[arg(
        short,
        long,
        default_value = DEFAULT_KEYWORD,
        help = "tEXt keyword to remove"
    )]
    pub(crate) keyword: Keyword,
    #[arg(
        short,
        long,
        help = "Write the result here instead of rewriting the image",
        value_hint = ValueHint::FilePath
    )]
    pub(crate) output: Option<PathBuf>,
}

impl Command for StripCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        strip_source(self)
    }
}

fn strip_source(args: StripCommand) -> anyhow::Result<()> {
    let png = utils::fs::read(&args.image)?;
    anyhow::ensure!(is_png(&png), "{} is not a PNG image", args.image.display());

    let removed = text_entries(&png)?
        .filter(|entry| {
            entry
                .as_ref()
                .is_ok_and(|e| e.keyword() == args.keyword.as_bytes())
        })
        .count();
    if removed == 0 {
        log::warn!("no `{}` metadata found", args.keyword);
    }
    let output = remove_text(&png, &args.keyword.to_string())?;

    let dest = args.output.as_ref().unwrap_or(&args.image);
    utils::fs::write_replacing(dest, &output)?;
    log::info!(
        "removed {removed} `{}` chunk(s) from {}",
        args.keyword,
        dest.display()
    );
    Ok(())
}
