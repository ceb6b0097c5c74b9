//! Display implementation for cuetint application messages.
//!
//! All user-facing message text is defined here, in one place, as the
//! `Display` impl of the [`Message`] enum. Commands and library code pass
//! structured variants around and only render them at the output boundary,
//! which keeps wording consistent and makes the text trivially greppable.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIG MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigReadFailed(error) => format!("Failed to read configuration, using defaults: {}", error),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::PromptTimeFormat => "Default time format".to_string(),
            Message::PromptCustomTemplate => "Custom template with {h} {m} {s} slots".to_string(),
            Message::PromptStrictMode => "Report malformed timestamp ranges as errors".to_string(),

            // === TALLY MESSAGES ===
            Message::TallyHeader(file, date) => format!("Highlight durations for {} ({})", file, date),
            Message::EmptyDocumentHint => "The file appears empty or unreadable, check the document formatting".to_string(),
            Message::FormattingErrorCount(count) => format!("{} cue row(s) without a usable highlight color", count),
            Message::OtherErrorCount(count) => format!("{} document error(s)", count),
            Message::ErrorDetailsHint => "Run the errors command for details".to_string(),
            Message::NoErrorsFound => "No errors found".to_string(),
            Message::MalformedCueRange(text) => format!("Cue row has a malformed timestamp range: {}", text),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Results exported to {}", path),

            // === GENERIC MESSAGES ===
            Message::UnknownFormatPreset(name) => format!("Unknown time format preset '{}', falling back to clock", name),
        };
        write!(f, "{}", text)
    }
}
