//! Read-only document model for table-based review documents.
//!
//! This module defines the minimal structural view the scanner works
//! against: body-level tables containing rows, cells, paragraphs, and runs,
//! where each run carries its text and a highlight-color token. Any document
//! binding (currently the DOCX loader in [`crate::libs::docx`]) normalizes
//! its native representation into these types before the engine sees it, so
//! the scanner and aggregator stay independent of the on-disk format.
//!
//! Highlight colors are opaque string tokens taken verbatim from the source
//! markup (e.g. `"yellow"`, `"red"`, `"cyan"`). A dedicated sentinel,
//! [`Highlight::None`], distinguishes "no highlighting" from any real color.

/// A loaded document, reduced to its body-level tables.
///
/// Everything outside tables (headings, free paragraphs) is irrelevant to
/// cue scanning and is dropped at load time.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pub tables: Vec<Table>,
}

#[derive(Debug, Clone, Default)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, Default)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, Default)]
pub struct TableCell {
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

/// A text run with its highlight annotation.
///
/// `text` is `None` when the run carries no text node at all, which is
/// distinct from an empty string (an empty text node still counts as text
/// for the first-run-wins color policy).
#[derive(Debug, Clone, Default)]
pub struct Run {
    pub text: Option<String>,
    pub highlight: Highlight,
}

/// Highlight-color token of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Highlight {
    /// The run is not highlighted.
    #[default]
    None,
    /// The run is highlighted with the given color token.
    Color(String),
}

impl Highlight {
    /// Normalizes a raw markup token into a highlight value.
    ///
    /// WordprocessingML uses the literal value `none` to clear inherited
    /// highlighting; it maps to the sentinel, as does an empty token.
    pub fn from_token(token: &str) -> Self {
        if token.is_empty() || token.eq_ignore_ascii_case("none") {
            Highlight::None
        } else {
            Highlight::Color(token.to_string())
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Highlight::None)
    }
}

impl TableCell {
    /// Full cell text as rendered by the document layer: run texts
    /// concatenated within a paragraph, paragraphs joined by newlines.
    /// This is the string the cue pattern is matched against.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|paragraph| {
                paragraph
                    .runs
                    .iter()
                    .filter_map(|run| run.text.as_deref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Concatenation of every run text in document order, without
    /// separators. This is the "highlighted text" reported for rows that
    /// match the cue pattern but carry no usable color.
    pub fn run_text(&self) -> String {
        self.paragraphs
            .iter()
            .flat_map(|paragraph| paragraph.runs.iter())
            .filter_map(|run| run.text.as_deref())
            .collect()
    }

    /// Highlight of the first run that has a text node.
    ///
    /// Later runs are never consulted, even when the first one is
    /// unhighlighted; mixed-highlight cells resolve to whatever the leading
    /// run carries.
    pub fn first_highlight(&self) -> Highlight {
        self.paragraphs
            .iter()
            .flat_map(|paragraph| paragraph.runs.iter())
            .find(|run| run.text.is_some())
            .map(|run| run.highlight.clone())
            .unwrap_or(Highlight::None)
    }
}
