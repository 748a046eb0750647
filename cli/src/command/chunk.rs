use crate::{command::Command, utils};
use clap::{Parser, ValueHint};
use libpngmeta::{ChunkType, decode_latin1, prelude::*, read_chunks, split_text_data};
use std::path::PathBuf;
use tabled::{builder::Builder as TableBuilder, settings::Style as TableStyle};

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
#[command(args_conflicts_with_subcommands = true, arg_required_else_help = true)]
pub(crate) struct ChunkCommand {
    #[command(subcommand)]
    command: ChunkCommands,
}

impl Command for ChunkCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        match self.command {
            ChunkCommands::List(cmd) => cmd.execute(),
        }
    }
}

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) enum ChunkCommands {
    #[command(about = "List chunks")]
    List(ListCommand),
}

#[derive(Parser, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub(crate) struct ListCommand {
    #[arg(short, long, help = "Display the keyword and value of text chunks")]
    pub(crate) long: bool,
    #[arg(short = 'H', long, help = "Add a header row to each column")]
    pub(crate) header: bool,
    #[arg(help = "PNG image to inspect", value_hint = ValueHint::FilePath)]
    pub(crate) image: PathBuf,
}

impl Command for ListCommand {
    #[inline]
    fn execute(self) -> anyhow::Result<()> {
        let png = utils::fs::read(&self.image)?;
        println!("{}", chunk_table(&png, &self)?);
        Ok(())
    }
}

fn chunk_table(png: &[u8], args: &ListCommand) -> anyhow::Result<String> {
    let mut builder = TableBuilder::new();
    if args.header {
        builder.push_record(
            ["Index", "Type", "Size", "Offset", "CRC"]
                .into_iter()
                .chain(args.long.then_some("Body")),
        )
    }
    let mut chunks = read_chunks(png)?;
    let mut idx = 0;
    loop {
        let offset = chunks.offset();
        let Some(chunk) = chunks.next() else {
            break;
        };
        let chunk = chunk?;
        idx += 1;
        let crc = if chunk.is_crc_valid() {
            "ok"
        } else {
            log::warn!("chunk {idx} ({}) has a wrong CRC", chunk.ty());
            "mismatch"
        };
        builder.push_record(
            [
                idx.to_string(),
                chunk.ty().to_string(),
                chunk.length().to_string(),
                format!("{offset:#06x}"),
                crc.to_string(),
            ]
            .into_iter()
            .chain(args.long.then(|| text_body(chunk.ty(), chunk.data()))),
        );
    }
    let mut table = builder.build();
    table.with(TableStyle::empty());
    Ok(table.to_string())
}

fn text_body(ty: ChunkType, data: &[u8]) -> String {
    if ty != ChunkType::tEXt {
        return String::new();
    }
    match split_text_data(data) {
        Some((keyword, value)) => {
            format!("{}: {}", decode_latin1(keyword), decode_latin1(value))
        }
        None => decode_latin1(data),
    }
}
