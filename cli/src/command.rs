pub(crate) mod chunk;
pub(crate) mod complete;
pub(crate) mod embed;
pub(crate) mod extract;
pub(crate) mod strip;
pub(crate) mod verify;

use crate::cli::{Cli, Commands};

/// Runs the subcommand selected on the command line.
#[inline]
pub fn entry(cli: Cli) -> anyhow::Result<()> {
    cli.execute()
}

pub trait Command {
    fn execute(self) -> anyhow::Result<()>;
}

impl Command for Cli {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        log::debug!("{self:?}");
        match self.commands {
            Commands::Embed(cmd) => cmd.execute(),
            Commands::Extract(cmd) => cmd.execute(),
            Commands::Strip(cmd) => cmd.execute(),
            Commands::Verify(cmd) => cmd.execute(),
            Commands::Chunk(cmd) => cmd.execute(),
            Commands::Complete(cmd) => cmd.execute(),
        }
    }
}
