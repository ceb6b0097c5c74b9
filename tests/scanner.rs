#[cfg(test)]
mod tests {
    use cuetint::libs::document::{Document, Highlight, Paragraph, Run, Table, TableCell, TableRow};
    use cuetint::libs::scanner::{scan, RowEvent, ScanOptions};

    fn run(text: Option<&str>, highlight: Highlight) -> Run {
        Run {
            text: text.map(str::to_string),
            highlight,
        }
    }

    fn cell(runs: Vec<Run>) -> TableCell {
        TableCell {
            paragraphs: vec![Paragraph { runs }],
        }
    }

    fn document(rows: Vec<TableRow>) -> Document {
        Document {
            tables: vec![Table { rows }],
        }
    }

    fn cue_cell(color: Option<&str>, range: &str, note: &str) -> TableCell {
        let highlight = match color {
            Some(color) => Highlight::Color(color.to_string()),
            None => Highlight::None,
        };
        cell(vec![run(Some(range), highlight), run(Some(note), Highlight::None)])
    }

    #[test]
    fn test_highlighted_cue_row_emits_duration() {
        let doc = document(vec![TableRow {
            cells: vec![cue_cell(Some("yellow"), "00:00:01,000 --> 00:00:11,000", " intro")],
        }]);

        let events = scan(&doc, &ScanOptions::default());

        assert_eq!(
            events,
            vec![RowEvent::Duration {
                color: "yellow".to_string(),
                millis: 10_000
            }]
        );
    }

    #[test]
    fn test_first_textual_run_decides_the_color() {
        // The leading run has no text node, so the second run's color wins
        let doc = document(vec![TableRow {
            cells: vec![cell(vec![
                run(None, Highlight::Color("red".to_string())),
                run(Some("00:00:00,000 --> 00:00:05,000"), Highlight::Color("green".to_string())),
                run(Some(" tail"), Highlight::Color("blue".to_string())),
            ])],
        }]);

        let events = scan(&doc, &ScanOptions::default());

        assert_eq!(
            events,
            vec![RowEvent::Duration {
                color: "green".to_string(),
                millis: 5_000
            }]
        );
    }

    #[test]
    fn test_unhighlighted_first_run_shadows_later_colors() {
        let doc = document(vec![TableRow {
            cells: vec![cell(vec![
                run(Some("00:00:00,000 --> 00:00:05,000"), Highlight::None),
                run(Some(" colored later"), Highlight::Color("cyan".to_string())),
            ])],
        }]);

        let events = scan(&doc, &ScanOptions::default());

        assert_eq!(
            events,
            vec![RowEvent::FormattingError {
                text: "00:00:00,000 --> 00:00:05,000 colored later".to_string()
            }]
        );
    }

    #[test]
    fn test_cue_row_without_color_is_a_formatting_error() {
        let doc = document(vec![TableRow {
            cells: vec![cue_cell(None, "02:00:00,000 --> 02:00:05,000", " note")],
        }]);

        let events = scan(&doc, &ScanOptions::default());

        assert_eq!(
            events,
            vec![RowEvent::FormattingError {
                text: "02:00:00,000 --> 02:00:05,000 note".to_string()
            }]
        );
    }

    #[test]
    fn test_rows_without_cells_or_matches_are_skipped() {
        let doc = document(vec![
            TableRow { cells: vec![] },
            TableRow {
                cells: vec![cue_cell(Some("red"), "just a note, no cue", "")],
            },
        ]);

        assert!(scan(&doc, &ScanOptions::default()).is_empty());
    }

    #[test]
    fn test_only_the_first_cell_is_consulted() {
        let doc = document(vec![TableRow {
            cells: vec![
                cue_cell(Some("red"), "plain text", ""),
                cue_cell(Some("red"), "00:00:00,000 --> 00:00:05,000", ""),
            ],
        }]);

        assert!(scan(&doc, &ScanOptions::default()).is_empty());
    }

    #[test]
    fn test_malformed_arrow_split_is_skipped_by_default() {
        let doc = document(vec![TableRow {
            cells: vec![cue_cell(Some("red"), "00:00:00,000 --> 00:00:05,000 --> 00:00:09,000", "")],
        }]);

        assert!(scan(&doc, &ScanOptions::default()).is_empty());
    }

    #[test]
    fn test_malformed_arrow_split_is_reported_in_strict_mode() {
        let text = "00:00:00,000 --> 00:00:05,000 --> 00:00:09,000";
        let doc = document(vec![TableRow {
            cells: vec![cue_cell(Some("red"), text, "")],
        }]);

        let events = scan(&doc, &ScanOptions { strict: true });

        assert_eq!(events, vec![RowEvent::MalformedRange { text: text.to_string() }]);
    }

    #[test]
    fn test_negative_duration_is_a_formatting_error() {
        let doc = document(vec![TableRow {
            cells: vec![cue_cell(Some("red"), "00:00:10,000 --> 00:00:05,000", "")],
        }]);

        let events = scan(&doc, &ScanOptions::default());

        assert_eq!(
            events,
            vec![RowEvent::FormattingError {
                text: "00:00:10,000 --> 00:00:05,000".to_string()
            }]
        );
    }

    #[test]
    fn test_single_column_rows_are_scanned() {
        let doc = document(vec![TableRow {
            cells: vec![cue_cell(Some("magenta"), "00:00:00,000 --> 00:00:30,000", "")],
        }]);

        let events = scan(&doc, &ScanOptions::default());

        assert_eq!(
            events,
            vec![RowEvent::Duration {
                color: "magenta".to_string(),
                millis: 30_000
            }]
        );
    }
}
