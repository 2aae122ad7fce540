//! Tests for output writers (JSON, JSONL, CSV)

use chatlens::RecordSet;
use chatlens::core::OutputConfig;
use chatlens::core::output::{to_csv, to_json, to_jsonl, write_csv, write_json, write_jsonl};
use chatlens::parse_chat;
use std::fs;
use tempfile::tempdir;

const CHAT: &str = "\
1/15/24, 10:30 AM - Alice: Hello!
1/15/24, 10:31 AM - Bob: Hi Alice; \"quoted\"
and a second line
1/15/24, 10:32 AM - Carol joined using this group's invite link
1/16/24, 9:05 PM - Alice: 🎉 party
";

fn sample_records() -> RecordSet {
    parse_chat(CHAT).unwrap()
}

// ============================================================================
// JSON Writer Tests
// ============================================================================

mod json_writer_tests {
    use super::*;

    #[test]
    fn test_write_json_basic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.json");
        let records = sample_records();

        write_json(records.records(), path.to_str().unwrap(), &OutputConfig::new()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        let rows = parsed.as_array().unwrap();

        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0]["timestamp"], "2024-01-15 10:30:00");
        assert_eq!(rows[0]["sender"], "Alice");
        assert_eq!(rows[0]["message"], "Hello!");
        assert!(rows[0].get("date").is_none());
    }

    #[test]
    fn test_json_keeps_multiline_and_quotes() {
        let json = to_json(sample_records().records(), &OutputConfig::new()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed[1]["message"], "Hi Alice; \"quoted\"\nand a second line");
    }

    #[test]
    fn test_json_with_calendar() {
        let json = to_json(sample_records().records(), &OutputConfig::new().with_calendar()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        let last = &parsed[3];

        assert_eq!(last["date"], "2024-01-16");
        assert_eq!(last["year"], 2024);
        assert_eq!(last["month"], 1);
        assert_eq!(last["month_name"], "January");
        assert_eq!(last["day"], 16);
        assert_eq!(last["day_name"], "Tuesday");
        assert_eq!(last["hour"], 21);
        assert_eq!(last["minute"], 5);
    }

    #[test]
    fn test_json_notification_sender() {
        let json = to_json(sample_records().records(), &OutputConfig::new()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[2]["sender"], chatlens::GROUP_NOTIFICATION);
    }

    #[test]
    fn test_json_without_notifications() {
        let json = to_json(
            sample_records().records(),
            &OutputConfig::new().without_notifications(),
        )
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_json_empty_slice() {
        let json = to_json(&[], &OutputConfig::new()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed.as_array().unwrap().is_empty());
    }
}

// ============================================================================
// JSONL Writer Tests
// ============================================================================

mod jsonl_writer_tests {
    use super::*;

    #[test]
    fn test_write_jsonl_basic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.jsonl");

        write_jsonl(
            sample_records().records(),
            path.to_str().unwrap(),
            &OutputConfig::new(),
        )
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);

        for line in &lines {
            let row: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(row.get("timestamp").is_some());
            assert!(row.get("sender").is_some());
            assert!(row.get("message").is_some());
        }
    }

    #[test]
    fn test_jsonl_multiline_body_stays_on_one_line() {
        let jsonl = to_jsonl(sample_records().records(), &OutputConfig::new()).unwrap();
        assert_eq!(jsonl.lines().count(), 4);
        assert!(jsonl.contains(r#"\nand a second line"#));
    }

    #[test]
    fn test_jsonl_calendar_and_filtering() {
        let config = OutputConfig::new().with_calendar().without_notifications();
        let jsonl = to_jsonl(sample_records().records(), &config).unwrap();

        assert_eq!(jsonl.lines().count(), 3);
        let first: serde_json::Value = serde_json::from_str(jsonl.lines().next().unwrap()).unwrap();
        assert_eq!(first["day_name"], "Monday");
    }

    #[test]
    fn test_jsonl_unicode() {
        let jsonl = to_jsonl(sample_records().records(), &OutputConfig::new()).unwrap();
        let last: serde_json::Value = serde_json::from_str(jsonl.lines().last().unwrap()).unwrap();
        assert_eq!(last["message"], "🎉 party");
    }
}

// ============================================================================
// CSV Writer Tests
// ============================================================================

mod csv_writer_tests {
    use super::*;

    fn read_rows(content: &str) -> (Vec<String>, Vec<Vec<String>>) {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(content.as_bytes());
        let header = reader
            .headers()
            .unwrap()
            .iter()
            .map(String::from)
            .collect();
        let rows = reader
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect();
        (header, rows)
    }

    #[test]
    fn test_write_csv_basic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.csv");

        write_csv(
            sample_records().records(),
            path.to_str().unwrap(),
            &OutputConfig::new(),
        )
        .unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let (header, rows) = read_rows(&content);

        assert_eq!(header, vec!["timestamp", "sender", "message"]);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], vec!["2024-01-15 10:30:00", "Alice", "Hello!"]);
    }

    #[test]
    fn test_csv_escapes_delimiter_quotes_and_newlines() {
        let csv = to_csv(sample_records().records(), &OutputConfig::new()).unwrap();
        let (_, rows) = read_rows(&csv);

        assert_eq!(rows[1][2], "Hi Alice; \"quoted\"\nand a second line");
    }

    #[test]
    fn test_csv_with_calendar() {
        let csv = to_csv(sample_records().records(), &OutputConfig::new().with_calendar()).unwrap();
        let (header, rows) = read_rows(&csv);

        assert_eq!(header.len(), 11);
        assert_eq!(header[3], "date");
        assert_eq!(header[10], "minute");
        assert_eq!(rows[3][3], "2024-01-16");
        assert_eq!(rows[3][8], "Tuesday");
        assert_eq!(rows[3][9], "21");
    }

    #[test]
    fn test_csv_without_notifications() {
        let csv = to_csv(
            sample_records().records(),
            &OutputConfig::new().without_notifications(),
        )
        .unwrap();
        let (_, rows) = read_rows(&csv);

        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row[1] != chatlens::GROUP_NOTIFICATION));
    }

    #[test]
    fn test_csv_empty_slice_writes_header() {
        let csv = to_csv(&[], &OutputConfig::new()).unwrap();
        assert_eq!(csv.trim_end(), "timestamp;sender;message");
    }

    #[test]
    fn test_write_csv_bad_path_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing_dir").join("out.csv");
        let err = write_csv(
            sample_records().records(),
            path.to_str().unwrap(),
            &OutputConfig::new(),
        )
        .unwrap_err();
        assert!(err.is_io());
    }
}
