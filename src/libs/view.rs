use crate::libs::tally::ParseResult;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn durations(result: &ParseResult) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["COLOR", "DURATION"]);
        for (color, duration) in &result.durations {
            table.add_row(row![color, duration]);
        }
        table.printstd();

        Ok(())
    }

    pub fn formatting_errors(errors: &[String]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "HIGHLIGHTED TEXT"]);
        for (index, text) in errors.iter().enumerate() {
            table.add_row(row![index + 1, text]);
        }
        table.printstd();

        Ok(())
    }

    pub fn other_errors(errors: &[String]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "ERROR"]);
        for (index, message) in errors.iter().enumerate() {
            table.add_row(row![index + 1, message]);
        }
        table.printstd();

        Ok(())
    }
}
