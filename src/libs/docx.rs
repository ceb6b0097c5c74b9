//! DOCX document loader.
//!
//! A `.docx` file is a ZIP container whose main part, `word/document.xml`,
//! holds the WordprocessingML body. This loader streams that part through a
//! pull XML reader and materializes the minimal model defined in
//! [`crate::libs::document`]: body-level tables, their rows, cells,
//! paragraphs, and runs with highlight tokens. Everything else in the markup
//! is skipped.
//!
//! ## Elements of interest
//!
//! - `w:tbl` / `w:tr` / `w:tc` - table structure (body level only; tables
//!   nested inside a cell are not scanned)
//! - `w:p` / `w:r` / `w:t` - paragraphs, runs, and run text
//! - `w:highlight w:val="…"` inside `w:rPr` - the run's highlight color
//!
//! ## Failure taxonomy
//!
//! Load failures are fatal to an invocation and are surfaced as data by the
//! aggregator, never as a panic:
//!
//! - [`DocxError::Io`] - the file cannot be opened or read
//! - [`DocxError::Container`] - the file is not a ZIP archive or has no
//!   `word/document.xml` entry
//! - [`DocxError::Markup`] - the document part is not well-formed XML
//!
//! All handles (file, archive entry) are scoped to [`load`] and released on
//! every exit path.

use crate::libs::document::{Document, Highlight, Paragraph, Run, Table, TableCell, TableRow};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

/// Archive entry holding the document body.
const DOCUMENT_ENTRY: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum DocxError {
    #[error("Failed to read document file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not a readable document container: {0}")]
    Container(String),
    #[error("Malformed document markup: {0}")]
    Markup(String),
}

/// Opens a `.docx` file and returns its table model.
pub fn load(path: &Path) -> Result<Document, DocxError> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file).map_err(|e| DocxError::Container(e.to_string()))?;
    let entry = archive
        .by_name(DOCUMENT_ENTRY)
        .map_err(|e| DocxError::Container(format!("{}: {}", DOCUMENT_ENTRY, e)))?;

    read_document(BufReader::new(entry))
}

/// Streams a WordprocessingML body into a [`Document`].
fn read_document<R: BufRead>(source: R) -> Result<Document, DocxError> {
    let mut reader = Reader::from_reader(source);
    let mut builder = DocumentBuilder::default();
    let mut buf = Vec::new();

    loop {
        let event = reader.read_event_into(&mut buf).map_err(|e| DocxError::Markup(e.to_string()))?;
        match event {
            Event::Start(element) => match element.name().as_ref() {
                b"w:highlight" => builder.highlight(attr_val(&element)?),
                name => builder.open(name),
            },
            Event::Empty(element) => match element.name().as_ref() {
                b"w:highlight" => builder.highlight(attr_val(&element)?),
                name => builder.empty(name),
            },
            Event::End(element) => builder.close(element.name().as_ref()),
            Event::Text(text) => {
                let text = text.unescape().map_err(|e| DocxError::Markup(e.to_string()))?;
                builder.text(&text);
            }
            Event::CData(data) => builder.text(&String::from_utf8_lossy(&data.into_inner())),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(builder.finish())
}

/// Reads the `w:val` attribute of an element, empty when absent.
fn attr_val(element: &BytesStart) -> Result<String, DocxError> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| DocxError::Markup(e.to_string()))?;
        if attr.key.as_ref() == b"w:val" {
            let value = attr.unescape_value().map_err(|e| DocxError::Markup(e.to_string()))?;
            return Ok(value.into_owned());
        }
    }
    Ok(String::new())
}

/// Incremental model builder driven by the XML event stream.
///
/// `table_depth` tracks `w:tbl` nesting so that only body-level tables are
/// collected; rows and cells of nested tables never open a context here and
/// their content falls through untouched.
#[derive(Default)]
struct DocumentBuilder {
    tables: Vec<Table>,
    table_depth: usize,
    table: Option<Table>,
    row: Option<TableRow>,
    cell: Option<TableCell>,
    paragraph: Option<Paragraph>,
    run: Option<Run>,
    in_properties: bool,
    in_text: bool,
}

impl DocumentBuilder {
    fn open(&mut self, name: &[u8]) {
        match name {
            b"w:tbl" => {
                self.table_depth += 1;
                if self.table_depth == 1 {
                    self.table = Some(Table::default());
                }
            }
            b"w:tr" if self.table_depth == 1 && self.table.is_some() => {
                self.row = Some(TableRow::default());
            }
            b"w:tc" if self.table_depth == 1 && self.row.is_some() => {
                self.cell = Some(TableCell::default());
            }
            b"w:p" if self.table_depth == 1 && self.cell.is_some() => {
                self.paragraph = Some(Paragraph::default());
            }
            b"w:r" if self.paragraph.is_some() => {
                self.run = Some(Run::default());
            }
            b"w:rPr" if self.run.is_some() => {
                self.in_properties = true;
            }
            b"w:t" if !self.in_properties => {
                if let Some(run) = self.run.as_mut() {
                    // An opened text node counts as text even when empty.
                    run.text.get_or_insert_with(String::new);
                    self.in_text = true;
                }
            }
            _ => {}
        }
    }

    fn empty(&mut self, name: &[u8]) {
        if name == b"w:t" && !self.in_properties {
            if let Some(run) = self.run.as_mut() {
                run.text.get_or_insert_with(String::new);
            }
        }
    }

    fn close(&mut self, name: &[u8]) {
        match name {
            b"w:tbl" => {
                if self.table_depth == 1 {
                    if let Some(table) = self.table.take() {
                        self.tables.push(table);
                    }
                }
                self.table_depth = self.table_depth.saturating_sub(1);
            }
            b"w:tr" if self.table_depth == 1 => {
                if let (Some(table), Some(row)) = (self.table.as_mut(), self.row.take()) {
                    table.rows.push(row);
                }
            }
            b"w:tc" if self.table_depth == 1 => {
                if let (Some(row), Some(cell)) = (self.row.as_mut(), self.cell.take()) {
                    row.cells.push(cell);
                }
            }
            b"w:p" if self.table_depth == 1 => {
                if let (Some(cell), Some(paragraph)) = (self.cell.as_mut(), self.paragraph.take()) {
                    cell.paragraphs.push(paragraph);
                }
            }
            b"w:r" => {
                if let (Some(paragraph), Some(run)) = (self.paragraph.as_mut(), self.run.take()) {
                    paragraph.runs.push(run);
                }
            }
            b"w:rPr" => self.in_properties = false,
            b"w:t" => self.in_text = false,
            _ => {}
        }
    }

    fn text(&mut self, content: &str) {
        if !self.in_text {
            return;
        }
        if let Some(text) = self.run.as_mut().and_then(|run| run.text.as_mut()) {
            text.push_str(content);
        }
    }

    fn highlight(&mut self, token: String) {
        if !self.in_properties {
            return;
        }
        if let Some(run) = self.run.as_mut() {
            run.highlight = Highlight::from_token(&token);
        }
    }

    fn finish(self) -> Document {
        Document { tables: self.tables }
    }
}
