use super::{resolve_options, FormatPreset};
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::libs::tally;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(help = "Path to the document file")]
    file: PathBuf,
    #[arg(long, value_enum, default_value = "csv", help = "Export file format")]
    format: ExportFormat,
    #[arg(long, short, help = "Output file path")]
    output: Option<PathBuf>,
    #[arg(long, value_enum, help = "Built-in time format preset")]
    time_format: Option<FormatPreset>,
    #[arg(long, conflicts_with = "time_format", help = "Custom template with {h} {m} {s} slots")]
    template: Option<String>,
    #[arg(long, help = "Report malformed timestamp ranges instead of skipping them")]
    strict: bool,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let (time_format, options) = resolve_options(args.time_format, args.template, args.strict);
    let result = tally::parse(&args.file, &time_format, &options);

    if !result.other_errors.is_empty() {
        msg_warning!(Message::OtherErrorCount(result.other_errors.len()));
    }

    let path = Exporter::new(args.format, args.output).export(&result)?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));

    Ok(())
}
