//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one record per line - requires `json-output` feature
//!
//! Every writer emits `timestamp`, `sender` and `message` columns, plus the
//! derived calendar columns when [`OutputConfig::include_calendar`] is set.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::core::output::{write_csv, write_jsonl, to_json};
//! use chatlens::core::models::OutputConfig;
//! use chatlens::parse_chat;
//!
//! let records = parse_chat("1/15/24, 10:30 AM - Alice: Hello!\n")?;
//! let config = OutputConfig::new().with_calendar();
//!
//! write_csv(records.records(), "chat.csv", &config)?;
//! write_jsonl(records.records(), "chat.jsonl", &config)?;
//!
//! let json_string = to_json(records.records(), &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```
//!
//! [`OutputConfig::include_calendar`]: crate::core::models::OutputConfig::include_calendar

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
