//! Table scanner: turns document rows into classified cue events.
//!
//! The scanner walks every body-level table row by row and inspects only
//! the first cell of each row. Rows whose first-cell text contains a cue
//! timestamp range are classified into [`RowEvent`]s; everything else is
//! skipped without comment. The scanner holds no state across calls and
//! performs a single sequential pass, so the aggregator can fold its output
//! in any order-preserving way.
//!
//! Classification rules, in order:
//!
//! 1. A row without a first cell, or whose text contains no cue pattern, is
//!    skipped.
//! 2. If splitting the full cell text on the arrow token does not yield
//!    exactly two parts, the row is treated as non-matching. By default it
//!    is skipped silently; with [`ScanOptions::strict`] it becomes a
//!    [`RowEvent::MalformedRange`] so the aggregator can report it.
//! 3. A matching row whose first textual run carries no highlight color
//!    becomes a [`RowEvent::FormattingError`] with the concatenated run
//!    text as payload.
//! 4. A matching, highlighted row with a negative computed duration (end
//!    before start) is also a formatting error; it never reaches the
//!    totals.
//! 5. Everything else is a [`RowEvent::Duration`].

use crate::libs::document::{Document, Highlight};
use crate::libs::timestamp::{arrow_regex, TimeRange};

/// Per-scan behavior switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// Report rows whose arrow split is malformed instead of skipping them.
    pub strict: bool,
}

/// One classified cue row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowEvent {
    /// A usable cue row: highlight color plus elapsed milliseconds.
    Duration { color: String, millis: i64 },
    /// A cue row without a usable highlight color, or with an inverted
    /// range. Carries the concatenated run text, which may be empty.
    FormattingError { text: String },
    /// A cue row whose arrow split did not yield exactly two parts.
    /// Emitted only in strict mode.
    MalformedRange { text: String },
}

/// Scans a document and returns its cue events in row order.
pub fn scan(document: &Document, options: &ScanOptions) -> Vec<RowEvent> {
    let mut events = Vec::new();

    for table in &document.tables {
        for row in &table.rows {
            let Some(cell) = row.cells.first() else {
                continue;
            };
            let cell_text = cell.text();
            let Some(range) = TimeRange::from_text(&cell_text) else {
                continue;
            };

            // The arrow split gates classification: extra or missing arrow
            // tokens make the row non-matching even though the pattern was
            // found somewhere in the text.
            if arrow_regex().split(&cell_text).count() != 2 {
                if options.strict {
                    events.push(RowEvent::MalformedRange { text: cell_text });
                }
                continue;
            }

            match cell.first_highlight() {
                Highlight::Color(color) => {
                    let millis = range.duration_millis();
                    if millis < 0 {
                        events.push(RowEvent::FormattingError { text: cell.run_text() });
                    } else {
                        events.push(RowEvent::Duration { color, millis });
                    }
                }
                Highlight::None => {
                    events.push(RowEvent::FormattingError { text: cell.run_text() });
                }
            }
        }
    }

    events
}
