//! Tally result export to CSV and JSON files.
//!
//! The exporter writes one flat file per invocation. JSON serializes the
//! [`ParseResult`] as-is; CSV flattens the three result sections into
//! `kind,color,value` records so durations and both error lists land in a
//! single spreadsheet-friendly table.

use crate::libs::tally::ParseResult;
use anyhow::Result;
use chrono::Local;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Flat `kind,color,value` records.
    Csv,
    /// The full result object, pretty-printed.
    Json,
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter, deriving a timestamped default file name when
    /// no output path is given.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("cuetint_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    /// Writes the result and returns the output path.
    pub fn export(&self, result: &ParseResult) -> Result<PathBuf> {
        match self.format {
            ExportFormat::Csv => self.export_csv(result)?,
            ExportFormat::Json => self.export_json(result)?,
        }
        Ok(self.output_path.clone())
    }

    fn export_csv(&self, result: &ParseResult) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.output_path)?;

        writer.write_record(["kind", "color", "value"])?;
        for (color, duration) in &result.durations {
            writer.write_record(["duration", color, duration])?;
        }
        for text in &result.formatting_errors {
            writer.write_record(["formatting_error", "", text])?;
        }
        for message in &result.other_errors {
            writer.write_record(["other_error", "", message])?;
        }
        writer.flush()?;

        Ok(())
    }

    fn export_json(&self, result: &ParseResult) -> Result<()> {
        let json = serde_json::to_string_pretty(result)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;

        Ok(())
    }
}
