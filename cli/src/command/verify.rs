use crate::{command::Command, utils};
use anyhow::Context;
use clap::{Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct VerifyCommand {
    #[arg(help = "PNG image to check", value_hint = ValueHint::FilePath)]
    pub(crate) image: PathBuf,
}

impl Command for VerifyCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        verify_image(self)
    }
}

fn verify_image(args: VerifyCommand) -> anyhow::Result<()> {
    let png = utils::fs::read(&args.image)?;
    let count = libpngmeta::verify(&png)
        .with_context(|| format!("{} failed verification", args.image.display()))?;
    log::info!("checked {count} chunks");
    println!("{}: OK", args.image.display());
    Ok(())
}
