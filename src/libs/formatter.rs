//! Duration formatting for tally output.
//!
//! Color totals are accumulated in milliseconds but displayed with a
//! three-slot template (hours, minutes, seconds). Milliseconds are rounded
//! into seconds by ceiling division, so any fraction of a second counts as
//! a whole one: a 500 ms total renders as one second and 59 001 ms renders
//! as a full minute. The rounding behavior is part of the output contract;
//! tests pin the boundary cases.
//!
//! ## Formats
//!
//! - [`TimeFormat::Clock`] renders `HH:MM:SS`, zero-padded
//! - [`TimeFormat::Verbose`] renders `HHh MMm SSs`
//! - [`TimeFormat::Custom`] substitutes `{h}`, `{m}`, `{s}` slots in a
//!   caller-supplied template with zero-padded two-digit values
//!
//! Negative totals cannot occur in practice (the scanner diverts inverted
//! ranges before accumulation), but the formatter still clamps them to zero
//! so it never renders nonsense.

/// A three-slot display template for duration totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeFormat {
    /// Zero-padded `HH:MM:SS`.
    Clock,
    /// Verbose `HHh MMm SSs`.
    Verbose,
    /// Template with `{h}`, `{m}`, `{s}` slots.
    Custom(String),
}

impl Default for TimeFormat {
    fn default() -> Self {
        TimeFormat::Clock
    }
}

impl TimeFormat {
    /// Resolves a configuration preset name, `None` for unknown names.
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "clock" => Some(TimeFormat::Clock),
            "verbose" => Some(TimeFormat::Verbose),
            _ => None,
        }
    }

    fn render(&self, hours: i64, minutes: i64, seconds: i64) -> String {
        match self {
            TimeFormat::Clock => format!("{:02}:{:02}:{:02}", hours, minutes, seconds),
            TimeFormat::Verbose => format!("{:02}h {:02}m {:02}s", hours, minutes, seconds),
            TimeFormat::Custom(template) => template
                .replace("{h}", &format!("{:02}", hours))
                .replace("{m}", &format!("{:02}", minutes))
                .replace("{s}", &format!("{:02}", seconds)),
        }
    }
}

/// Formats a millisecond total with ceiling rounding into seconds.
///
/// Seconds are derived first (`ceil(millis / 1000)`), then folded into
/// minutes and hours; the remainders are applied after deriving hours so
/// the slots always stay below their carry limit.
pub fn format_duration(millis: i64, format: &TimeFormat) -> String {
    let total_seconds = (millis.max(0) + 999) / 1_000;
    let total_minutes = total_seconds / 60;
    let hours = total_minutes / 60;

    format.render(hours, total_minutes % 60, total_seconds % 60)
}
