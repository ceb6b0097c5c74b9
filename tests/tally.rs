#[cfg(test)]
mod tests {
    use cuetint::libs::document::{Document, Highlight, Paragraph, Run, Table, TableCell, TableRow};
    use cuetint::libs::formatter::TimeFormat;
    use cuetint::libs::scanner::{scan, RowEvent, ScanOptions};
    use cuetint::libs::tally::{parse, tally_document};
    use std::path::Path;

    fn duration(color: &str, millis: i64) -> RowEvent {
        RowEvent::Duration {
            color: color.to_string(),
            millis,
        }
    }

    fn cue_row(color: Option<&str>, text: &str) -> TableRow {
        let highlight = match color {
            Some(color) => Highlight::Color(color.to_string()),
            None => Highlight::None,
        };
        TableRow {
            cells: vec![TableCell {
                paragraphs: vec![Paragraph {
                    runs: vec![Run {
                        text: Some(text.to_string()),
                        highlight,
                    }],
                }],
            }],
        }
    }

    #[test]
    fn test_same_color_accumulates() {
        let events = vec![duration("RED", 30_000), duration("RED", 45_000)];

        let result = tally_document(&events, &TimeFormat::Clock);

        assert_eq!(result.durations.len(), 1);
        assert_eq!(result.durations["RED"], "00:01:15");
    }

    #[test]
    fn test_accumulation_is_order_independent() {
        let forward = vec![duration("RED", 30_000), duration("BLUE", 5_000), duration("RED", 45_000)];
        let reversed: Vec<_> = forward.iter().rev().cloned().collect();

        let a = tally_document(&forward, &TimeFormat::Clock);
        let b = tally_document(&reversed, &TimeFormat::Clock);

        assert_eq!(a.durations, b.durations);
    }

    #[test]
    fn test_single_row_round_trip() {
        let events = vec![duration("C", 65_000)];

        let result = tally_document(&events, &TimeFormat::Clock);

        assert_eq!(result.durations["C"], "00:01:05");
        assert!(result.formatting_errors.is_empty());
        assert!(result.other_errors.is_empty());
    }

    #[test]
    fn test_error_buckets_stay_disjoint() {
        let events = vec![
            duration("RED", 10_000),
            RowEvent::FormattingError {
                text: "orphan cue".to_string(),
            },
            RowEvent::MalformedRange {
                text: "a --> b --> c".to_string(),
            },
        ];

        let result = tally_document(&events, &TimeFormat::Clock);

        assert_eq!(result.durations.len(), 1);
        assert_eq!(result.formatting_errors, vec!["orphan cue".to_string()]);
        assert_eq!(result.other_errors.len(), 1);
        assert!(result.other_errors[0].contains("a --> b --> c"));
    }

    #[test]
    fn test_unreadable_path_yields_exactly_one_other_error() {
        let result = parse(
            Path::new("/nonexistent/review.docx"),
            &TimeFormat::Clock,
            &ScanOptions::default(),
        );

        assert!(result.durations.is_empty());
        assert!(result.formatting_errors.is_empty());
        assert_eq!(result.other_errors.len(), 1);
        assert!(!result.is_empty());
    }

    #[test]
    fn test_three_row_document_scenario() {
        let document = Document {
            tables: vec![Table {
                rows: vec![
                    cue_row(Some("RED"), "01:00:00,000 --> 01:00:10,000"),
                    cue_row(Some("BLUE"), "no timestamp in this row"),
                    cue_row(None, "02:00:00,000 --> 02:00:05,000"),
                ],
            }],
        };

        let events = scan(&document, &ScanOptions::default());
        let result = tally_document(&events, &TimeFormat::Clock);

        assert_eq!(result.durations.len(), 1);
        assert_eq!(result.durations["RED"], "00:00:10");
        assert_eq!(result.formatting_errors, vec!["02:00:00,000 --> 02:00:05,000".to_string()]);
        assert!(result.other_errors.is_empty());
    }

    #[test]
    fn test_result_serializes_to_json() {
        let events = vec![duration("RED", 10_000)];
        let result = tally_document(&events, &TimeFormat::Clock);

        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["durations"]["RED"], "00:00:10");
        assert!(json["formatting_errors"].as_array().unwrap().is_empty());
        assert!(json["other_errors"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_empty_document_is_empty_result() {
        let result = tally_document(&[], &TimeFormat::Clock);

        assert!(result.is_empty());
        assert!(!result.has_errors());
    }
}
