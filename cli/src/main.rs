use clap::Parser;
use pngmeta_cli::{cli, command::Command};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    cli.init_logger()?;
    cli.execute()
}
