//! Tally engine: the public entry point and result contract.
//!
//! [`parse`] composes the loader, the scanner, and the formatter into one
//! synchronous pass: open the document, scan its rows into cue events, fold
//! the events into per-color millisecond totals, and finalize the totals
//! into display strings. The whole invocation is captured in a
//! [`ParseResult`]; no failure ever escapes as an error or panic, callers
//! inspect the three result fields instead.
//!
//! A document-load failure short-circuits the invocation: the result then
//! carries empty totals, an empty formatting-error list, and exactly one
//! other-error entry. Per-row formatting errors never abort the scan.
//!
//! Accumulation is a fold over the event stream into a fresh map, so the
//! scanner and the aggregation stay separable and independently testable.
//! The totals map is a `BTreeMap`, which makes the output ordering
//! deterministic by color key.

use crate::libs::docx;
use crate::libs::formatter::{format_duration, TimeFormat};
use crate::libs::messages::Message;
use crate::libs::scanner::{self, RowEvent, ScanOptions};
use crate::msg_debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Terminal output of one engine invocation.
///
/// Formatting errors and other errors are disjoint categories and are never
/// merged: the former are cue rows without a usable highlight, the latter
/// are failures independent of row content (load errors, and malformed
/// ranges when scanning strictly).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseResult {
    /// Highlight color token to formatted duration, ordered by color.
    pub durations: BTreeMap<String, String>,
    /// Highlighted texts of cue rows without a usable color, in row order.
    pub formatting_errors: Vec<String>,
    /// Document-level failure messages, in occurrence order.
    pub other_errors: Vec<String>,
}

impl ParseResult {
    pub fn has_errors(&self) -> bool {
        !self.formatting_errors.is_empty() || !self.other_errors.is_empty()
    }

    /// True when nothing at all came out of the scan, which usually means
    /// the document has no cue tables.
    pub fn is_empty(&self) -> bool {
        self.durations.is_empty() && !self.has_errors()
    }

    fn load_failure(message: String) -> Self {
        Self {
            other_errors: vec![message],
            ..Self::default()
        }
    }
}

/// Parses a document and tallies cue durations per highlight color.
///
/// This is the single entry point of the engine. It is synchronous and
/// blocking; hosts that need a responsive surface run it off their
/// interactive thread.
pub fn parse(path: &Path, time_format: &TimeFormat, options: &ScanOptions) -> ParseResult {
    let document = match docx::load(path) {
        Ok(document) => document,
        Err(error) => return ParseResult::load_failure(error.to_string()),
    };

    tally_document(&scanner::scan(&document, options), time_format)
}

/// Folds scanned cue events into the final result.
pub fn tally_document(events: &[RowEvent], time_format: &TimeFormat) -> ParseResult {
    let (totals, formatting_errors, other_errors) = events.iter().fold(
        (BTreeMap::<String, i64>::new(), Vec::new(), Vec::new()),
        |(mut totals, mut formatting, mut other), event| {
            match event {
                RowEvent::Duration { color, millis } => {
                    *totals.entry(color.clone()).or_insert(0) += millis;
                }
                RowEvent::FormattingError { text } => {
                    msg_debug!("Cue row matches the timestamp pattern but has no usable highlight: {}", text);
                    formatting.push(text.clone());
                }
                RowEvent::MalformedRange { text } => {
                    other.push(Message::MalformedCueRange(text.clone()).to_string());
                }
            }
            (totals, formatting, other)
        },
    );

    let durations = totals
        .into_iter()
        .map(|(color, millis)| (color, format_duration(millis, time_format)))
        .collect();

    ParseResult {
        durations,
        formatting_errors,
        other_errors,
    }
}
