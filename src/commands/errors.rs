use super::resolve_options;
use crate::libs::messages::Message;
use crate::libs::tally;
use crate::libs::view::View;
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ErrorsArgs {
    #[arg(help = "Path to the document file")]
    file: PathBuf,
    #[arg(long, help = "Report malformed timestamp ranges instead of skipping them")]
    strict: bool,
}

/// Detailed error view: the counterpart of the summary hints printed by
/// the sum command.
pub fn cmd(args: ErrorsArgs) -> Result<()> {
    let (time_format, options) = resolve_options(None, None, args.strict);
    let result = tally::parse(&args.file, &time_format, &options);

    if !result.has_errors() {
        msg_success!(Message::NoErrorsFound);
        return Ok(());
    }

    if !result.formatting_errors.is_empty() {
        View::formatting_errors(&result.formatting_errors)?;
    }
    if !result.other_errors.is_empty() {
        View::other_errors(&result.other_errors)?;
    }

    Ok(())
}
