//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::core::models::{OutputConfig, OutputRow};
use crate::error::Result;
use crate::record::ChatRecord;

/// Writes records to JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2024-01-15 10:30:00", "sender": "Alice", "message": "Hello"},
///   {"timestamp": "2024-01-15 10:31:00", "sender": "Bob", "message": "Hi"}
/// ]
/// ```
pub fn write_json(records: &[ChatRecord], output_path: &str, config: &OutputConfig) -> Result<()> {
    let json = to_json(records, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a pretty-printed JSON array.
///
/// Same format as [`write_json`], but returns a String instead of writing to file.
pub fn to_json(records: &[ChatRecord], config: &OutputConfig) -> Result<String> {
    let rows: Vec<OutputRow<'_>> = records
        .iter()
        .filter(|r| config.keeps(r))
        .map(|r| OutputRow::from_record(r, config))
        .collect();

    Ok(serde_json::to_string_pretty(&rows)?)
}
