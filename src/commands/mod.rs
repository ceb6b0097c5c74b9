pub mod errors;
pub mod export;
pub mod init;
pub mod sum;

use crate::libs::config::Config;
use crate::libs::formatter::TimeFormat;
use crate::libs::messages::Message;
use crate::libs::scanner::ScanOptions;
use crate::msg_warning;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Tally highlight durations in a document")]
    Sum(sum::SumArgs),
    #[command(about = "Display error details for a document")]
    Errors(errors::ErrorsArgs),
    #[command(about = "Export tally results to a file")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Sum(args) => sum::cmd(args),
            Commands::Errors(args) => errors::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Built-in time format presets selectable from the command line.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum FormatPreset {
    Clock,
    Verbose,
}

impl From<FormatPreset> for TimeFormat {
    fn from(preset: FormatPreset) -> Self {
        match preset {
            FormatPreset::Clock => TimeFormat::Clock,
            FormatPreset::Verbose => TimeFormat::Verbose,
        }
    }
}

/// Combines CLI arguments with the stored configuration.
///
/// A broken configuration file is not fatal to a tally run: it is reported
/// once and the built-in defaults apply.
fn resolve_options(format: Option<FormatPreset>, template: Option<String>, strict: bool) -> (TimeFormat, ScanOptions) {
    let config = match Config::read() {
        Ok(config) => config,
        Err(error) => {
            msg_warning!(Message::ConfigReadFailed(error.to_string()));
            Config::default()
        }
    };

    let time_format = config.resolve_format(format.map(TimeFormat::from), template);
    let options = ScanOptions {
        strict: config.resolve_strict(strict),
    };

    (time_format, options)
}
