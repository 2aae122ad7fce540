//! Output format selection for record exports.
//!
//! [`OutputFormat`] names a writer in [`core::output`](crate::core::output);
//! [`write_to_format`] and [`to_format_string`] dispatch to it. The types
//! here carry no CLI dependency.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::format::{OutputFormat, to_format_string};
//! use chatlens::core::models::OutputConfig;
//! use chatlens::parse_chat;
//!
//! let records = parse_chat("1/15/24, 10:30 AM - Alice: Hello!\n")?;
//!
//! let format = OutputFormat::from_path("chat.jsonl")?;
//! let jsonl = to_format_string(records.records(), format, &OutputConfig::new())?;
//! assert!(jsonl.contains("\"sender\":\"Alice\""));
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::models::OutputConfig;
use crate::error::ChatlensError;
use crate::record::ChatRecord;

/// File format for exported records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// Pretty-printed JSON array
    Json,

    /// JSON Lines, one object per line (also known as NDJSON)
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Jsonl.extension(), "jsonl");
    /// ```
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Every format with a writer, in CLI listing order.
    pub fn all() -> &'static [OutputFormat] {
        const ALL: [OutputFormat; 3] = [OutputFormat::Csv, OutputFormat::Json, OutputFormat::Jsonl];
        &ALL
    }

    /// Returns the cargo feature that enables this format's writer.
    pub fn required_feature(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }

    /// Detects the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidValue`] for unknown or missing extensions.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatlensError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        ext.parse().map_err(|_| {
            ChatlensError::invalid_value(
                "output format",
                format!("unknown file extension '.{ext}'. Expected one of: csv, json, jsonl"),
            )
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ChatlensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if name == "ndjson" {
            return Ok(OutputFormat::Jsonl);
        }
        OutputFormat::all()
            .iter()
            .copied()
            .find(|format| format.extension() == name)
            .ok_or_else(|| {
                ChatlensError::invalid_value(
                    "output format",
                    format!("unknown format '{s}'. Expected one of: csv, json, jsonl (ndjson)"),
                )
            })
    }
}

fn missing_feature(format: OutputFormat) -> ChatlensError {
    ChatlensError::invalid_value(
        "output format",
        format!(
            "{format} output requires the '{}' feature to be enabled",
            format.required_feature()
        ),
    )
}

/// Writes records to a file in the given format.
///
/// # Errors
///
/// Returns an error if the format's feature is disabled or the file cannot
/// be written.
#[allow(unused_variables)]
pub fn write_to_format(
    records: &[ChatRecord],
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), ChatlensError> {
    tracing::debug!(path, %format, records = records.len(), "writing records");
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(records, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Converts records to a string in the given format.
#[allow(unused_variables)]
pub fn to_format_string(
    records: &[ChatRecord],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, ChatlensError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(records, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(records, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(records, config),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}
