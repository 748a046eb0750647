mod value;

pub(crate) use self::value::*;
use crate::command::{
    chunk::ChunkCommand, complete::CompleteCommand, embed::EmbedCommand, extract::ExtractCommand,
    strip::StripCommand, verify::VerifyCommand,
};
use anstyle::{AnsiColor, Color, Style};
use clap::{Args, Parser, Subcommand};
use log::{Level, LevelFilter};
use std::io::{self, Write};

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
#[command(
    name = "pngmeta",
    version,
    about,
    author,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) commands: Commands,
    #[command(flatten)]
    pub(crate) global: GlobalArgs,
}

impl Cli {
    /// Installs the global logger, writing to stderr at the level chosen on
    /// the command line.
    pub fn init_logger(&self) -> io::Result<()> {
        let color = anstream::ColorChoice::from(self.global.color);
        color.write_global();
        fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("{}: {message}", LevelLabel(record.level())))
            })
            .level(self.global.verbosity.level_filter())
            .chain(Box::new(anstream::stderr()) as Box<dyn Write + Send>)
            .apply()
            .map_err(io::Error::other)
    }
}

/// Lowercase level name, colored when the output supports it.
struct LevelLabel(Level);

impl LevelLabel {
    const fn style(&self) -> Style {
        let color = match self.0 {
            Level::Error => AnsiColor::Red,
            Level::Warn => AnsiColor::Yellow,
            Level::Info => AnsiColor::Green,
            Level::Debug => AnsiColor::Blue,
            Level::Trace => AnsiColor::Magenta,
        };
        Style::new().bold().fg_color(Some(Color::Ansi(color)))
    }

    const fn name(&self) -> &'static str {
        match self.0 {
            Level::Error => "error",
            Level::Warn => "warning",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Trace => "trace",
        }
    }
}

impl std::fmt::Display for LevelLabel {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let style = self.style();
        write!(f, "{style}{}{style:#}", self.name())
    }
}

#[derive(Args, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct GlobalArgs {
    #[command(flatten)]
    pub(crate) verbosity: VerbosityArgs,
    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = ColorChoice::Auto,
        help = "Control color output"
    )]
    pub(crate) color: ColorChoice,
}

#[derive(Args, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) struct VerbosityArgs {
    #[arg(long, global = true, value_enum, help = "Set the log level")]
    log_level: Option<LogLevel>,
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Make some output more quiet"
    )]
    quiet: bool,
    #[arg(short, long, global = true, help = "Make some output more verbose")]
    verbose: bool,
}

impl VerbosityArgs {
    /// An explicit `--log-level` wins over `--quiet` and `--verbose`.
    #[inline]
    pub(crate) fn level_filter(&self) -> LevelFilter {
        match (self.log_level, self.quiet, self.verbose) {
            (Some(level), _, _) => level.as_level_filter(),
            (None, true, _) => LevelFilter::Off,
            (None, false, true) => LevelFilter::Info,
            (None, false, false) => LogLevel::default().as_level_filter(),
        }
    }
}

#[derive(Subcommand, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) enum Commands {
    #[command(about = "Embed diagram source into a PNG image")]
    Embed(EmbedCommand),
    #[command(visible_alias = "x", about = "Print the diagram source stored in a PNG image")]
    Extract(ExtractCommand),
    #[command(about = "Remove stored diagram source from a PNG image")]
    Strip(StripCommand),
    #[command(about = "Check the chunk structure and CRCs of a PNG image")]
    Verify(VerifyCommand),
    #[command(about = "Chunk level operations")]
    Chunk(ChunkCommand),
    #[command(about = "Generate shell auto complete")]
    Complete(CompleteCommand),
}
