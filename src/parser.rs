//! Single entry point for parsing chat exports.
//!
//! [`ChatParser`] runs the full pipeline:
//!
//! ```text
//! file / bytes ──► intake ──► clean_export_text ──► split_records ──► normalize_records ──► RecordSet
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use chatlens::ChatParser;
//! use std::path::Path;
//!
//! let parser = ChatParser::new();
//! let records = parser.parse(Path::new("WhatsApp Chat with Alice.txt"))?;
//!
//! for record in &records {
//!     println!("{} {}: {}", record.timestamp, record.sender, record.text());
//! }
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::borrow::Cow;
use std::path::Path;

use crate::config::ParserConfig;
use crate::error::Result;
use crate::intake;
use crate::parsing::{clean_export_text, normalize_records, split_records};
use crate::record::RecordSet;

/// Parser for plain-text chat exports.
///
/// Parsing is a pure function of the input text and the configuration; the
/// parser holds no state between calls.
///
/// # Example
///
/// ```rust
/// use chatlens::ChatParser;
///
/// let parser = ChatParser::new();
/// let records = parser.parse_str("31/12/2023, 23:59 - Alice: bye 2023\n")?;
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records.get(0).unwrap().sender, "Alice");
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChatParser {
    config: ParserConfig,
}

impl ChatParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses export text into a record set.
    ///
    /// # Errors
    ///
    /// - [`ChatlensError::Format`](crate::ChatlensError::Format) if no
    ///   timestamp prefix is found
    /// - [`ChatlensError::TimestampParse`](crate::ChatlensError::TimestampParse)
    ///   if timestamps do not parse under a single day/month ordering
    /// - [`ChatlensError::EmptyChat`](crate::ChatlensError::EmptyChat) if no
    ///   record is produced
    pub fn parse_str(&self, content: &str) -> Result<RecordSet> {
        let text: Cow<'_, str> = if self.config.clean_text {
            Cow::Owned(clean_export_text(content))
        } else {
            Cow::Borrowed(content)
        };

        let raw = split_records(&text)?;
        let records = normalize_records(&raw, self.config.date_order)?;

        tracing::debug!(
            records = records.len(),
            senders = records.senders().len(),
            order = %records.date_order(),
            "parsed chat export"
        );
        Ok(records)
    }

    /// Decodes raw export bytes and parses them.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<RecordSet> {
        let text = intake::decode_chat_bytes(bytes)?;
        self.parse_str(&text)
    }

    /// Reads an export file and parses it.
    pub fn parse(&self, path: &Path) -> Result<RecordSet> {
        let text = intake::load_chat_file(path)?;
        self.parse_str(&text)
    }
}

/// Parses export text with the default configuration.
///
/// # Example
///
/// ```rust
/// use chatlens::parse_chat;
///
/// let records = parse_chat("1/15/24, 10:30 AM - Alice: Hello!\n1/15/24, 10:31 AM - Bob joined\n")?;
/// assert_eq!(records.len(), 2);
/// assert!(records.get(1).unwrap().is_notification());
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn parse_chat(content: &str) -> Result<RecordSet> {
    ChatParser::new().parse_str(content)
}
