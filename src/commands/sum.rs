use super::{resolve_options, FormatPreset};
use crate::libs::messages::Message;
use crate::libs::tally;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_warning};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SumArgs {
    #[arg(help = "Path to the document file")]
    file: PathBuf,
    #[arg(long, value_enum, help = "Built-in time format preset")]
    format: Option<FormatPreset>,
    #[arg(long, conflicts_with = "format", help = "Custom template with {h} {m} {s} slots")]
    template: Option<String>,
    #[arg(long, help = "Report malformed timestamp ranges instead of skipping them")]
    strict: bool,
    #[arg(long, help = "Print the result as JSON")]
    json: bool,
}

pub fn cmd(args: SumArgs) -> Result<()> {
    let (time_format, options) = resolve_options(args.format, args.template, args.strict);
    let result = tally::parse(&args.file, &time_format, &options);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let header = Message::TallyHeader(args.file.display().to_string(), Local::now().format("%B %-d, %Y").to_string());
    msg_print!(header, true);

    if result.is_empty() {
        msg_warning!(Message::EmptyDocumentHint);
        return Ok(());
    }

    if !result.durations.is_empty() {
        View::durations(&result)?;
    }

    if !result.formatting_errors.is_empty() {
        msg_warning!(Message::FormattingErrorCount(result.formatting_errors.len()));
    }
    if !result.other_errors.is_empty() {
        msg_error!(Message::OtherErrorCount(result.other_errors.len()));
    }
    if result.has_errors() {
        msg_info!(Message::ErrorDetailsHint);
    }

    Ok(())
}
