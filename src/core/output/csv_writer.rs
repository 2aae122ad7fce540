//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::core::models::{OutputConfig, OutputRow};
use crate::error::Result;
use crate::record::ChatRecord;

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: Depends on OutputConfig
///   - Basic: `timestamp`, `sender`, `message`
///   - With calendar: adds `date`, `year`, `month`, `month_name`, `day`,
///     `day_name`, `hour`, `minute`
/// - Encoding: UTF-8
pub fn write_csv(records: &[ChatRecord], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_csv_to(records, file, config)
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to file.
pub fn to_csv(records: &[ChatRecord], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv_to(records, &mut buffer, config)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn write_csv_to<W: Write>(records: &[ChatRecord], sink: W, config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(OutputRow::header(config))?;
    for record in records.iter().filter(|r| config.keeps(r)) {
        writer.write_record(OutputRow::from_record(record, config).fields())?;
    }

    writer.flush()?;
    Ok(())
}
