//! Cue timestamp parsing and duration arithmetic.
//!
//! Subtitle cue rows carry a timestamp range in the SRT shape
//! `HH:MM:SS,mmm --> HH:MM:SS,mmm`. This module owns the pattern, the
//! parsed [`Timestamp`] and [`TimeRange`] types, and the millisecond
//! conversion used by the aggregator. Field widths are fixed by the pattern
//! (two digits for hours, minutes, and seconds, three for milliseconds);
//! values are not re-validated beyond the parse, so `99:99:99,999` converts
//! arithmetically like any other timestamp.

use regex::Regex;
use std::sync::OnceLock;

/// Cue range pattern: two `HH:MM:SS,mmm` timestamps around a `-->` arrow.
pub const CUE_PATTERN: &str = r"(\d{2}):(\d{2}):(\d{2}),(\d{3})\s+-->\s+(\d{2}):(\d{2}):(\d{2}),(\d{3})";

/// Arrow separator used to gate row classification (see the scanner).
pub const ARROW_PATTERN: &str = r"\s+-->\s+";

static CUE_REGEX: OnceLock<Regex> = OnceLock::new();
static ARROW_REGEX: OnceLock<Regex> = OnceLock::new();

pub fn cue_regex() -> &'static Regex {
    CUE_REGEX.get_or_init(|| Regex::new(CUE_PATTERN).expect("cue pattern is valid"))
}

pub fn arrow_regex() -> &'static Regex {
    ARROW_REGEX.get_or_init(|| Regex::new(ARROW_PATTERN).expect("arrow pattern is valid"))
}

/// One parsed `HH:MM:SS,mmm` timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub millis: i64,
}

impl Timestamp {
    pub fn new(hours: i64, minutes: i64, seconds: i64, millis: i64) -> Self {
        Self { hours, minutes, seconds, millis }
    }

    /// Total milliseconds since `00:00:00,000`.
    pub fn to_millis(&self) -> i64 {
        self.hours * 3_600_000 + self.minutes * 60_000 + self.seconds * 1_000 + self.millis
    }
}

/// A `(start, end)` timestamp pair extracted from a cue row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl TimeRange {
    /// Extracts the first cue range found anywhere in `text`.
    ///
    /// Returns `None` when the text contains no cue pattern.
    pub fn from_text(text: &str) -> Option<Self> {
        let captures = cue_regex().captures(text)?;
        let field = |index: usize| -> Option<i64> { captures.get(index)?.as_str().parse().ok() };

        Some(Self {
            start: Timestamp::new(field(1)?, field(2)?, field(3)?, field(4)?),
            end: Timestamp::new(field(5)?, field(6)?, field(7)?, field(8)?),
        })
    }

    /// Elapsed milliseconds between start and end, without clamping.
    ///
    /// The source text can be malformed (end before start), so a negative
    /// result is legal at this level and must be handled by the caller.
    pub fn duration_millis(&self) -> i64 {
        self.end.to_millis() - self.start.to_millis()
    }
}
