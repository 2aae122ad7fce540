//! JSON Lines (JSONL) output writer.
//!
//! One record per line, which suits line-oriented tools and loading into
//! dataframes without holding the whole array in memory.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::core::models::{OutputConfig, OutputRow};
use crate::error::Result;
use crate::record::ChatRecord;

/// Writes records to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"timestamp":"2024-01-15 10:30:00","sender":"Alice","message":"Hello"}
/// {"timestamp":"2024-01-15 10:31:00","sender":"Bob","message":"Hi"}
/// ```
pub fn write_jsonl(records: &[ChatRecord], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_jsonl_to(records, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
///
/// Same format as [`write_jsonl`], but returns a String instead of writing to file.
pub fn to_jsonl(records: &[ChatRecord], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_jsonl_to(records, &mut buffer, config)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_jsonl_to<W: Write>(records: &[ChatRecord], writer: &mut W, config: &OutputConfig) -> Result<()> {
    for record in records.iter().filter(|r| config.keeps(r)) {
        let line = serde_json::to_string(&OutputRow::from_record(record, config))?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::{BufRead, BufReader};
    use tempfile::NamedTempFile;

    fn record(sender: &str, body: &str) -> ChatRecord {
        let ts = NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap();
        ChatRecord::new(ts, sender, body)
    }

    #[test]
    fn test_write_jsonl_basic() {
        let records = vec![record("Alice", "Hello\n"), record("Bob", "Hi\n")];

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();
        write_jsonl(&records, path, &OutputConfig::new()).unwrap();

        let file = std::fs::File::open(path).unwrap();
        let lines: Vec<String> = BufReader::new(file).lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["sender"], "Alice");
        assert_eq!(first["message"], "Hello");

        let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(second["sender"], "Bob");
    }

    #[test]
    fn test_multiline_body_stays_on_one_line() {
        let jsonl = to_jsonl(&[record("Alice", "line one\nline two\n")], &OutputConfig::new()).unwrap();
        assert_eq!(jsonl.lines().count(), 1);
        assert!(jsonl.contains(r#"line one\nline two"#));
    }

    #[test]
    fn test_jsonl_no_array_brackets() {
        let jsonl = to_jsonl(&[record("Alice", "Hello\n")], &OutputConfig::new()).unwrap();
        assert!(!jsonl.starts_with('['));
        assert!(jsonl.ends_with('\n'));
    }
}
