//! Record splitting: locating message boundaries in export text.
//!
//! Every entry in an export starts with a prefix such as
//! `12/31/23, 11:59 PM - `. The splitter finds each prefix, keeps the
//! timestamp text, drops the ` - ` separator, and pairs the timestamp with
//! the text that runs until the next prefix.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ChatlensError, Result};

/// Timestamp prefix: `D/M/Y, H:MM[ AM|PM] - ` with `/` or `-` between date
/// fields and ASCII hyphen, en dash or em dash before the body.
const TIMESTAMP_PREFIX_PATTERN: &str = r"(\d{1,2}[/\-]\d{1,2}[/\-]\d{2,4},\s+\d{1,2}:\d{2}(?:\s?(?:[AaPp][Mm]|[AaPp]\.[Mm]\.))?)\s[-\x{2013}\x{2014}]\s";

fn timestamp_prefix_regex() -> &'static Regex {
    static TIMESTAMP_PREFIX_RE: OnceLock<Regex> = OnceLock::new();
    TIMESTAMP_PREFIX_RE
        .get_or_init(|| Regex::new(TIMESTAMP_PREFIX_PATTERN).expect("timestamp prefix regex compiles"))
}

/// One `(timestamp text, message text)` pair produced by the splitter.
///
/// Borrowed from the input and only lives for the duration of a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    /// Captured timestamp, e.g. `"12/31/23, 11:59 PM"`.
    pub timestamp_text: &'a str,
    /// Everything after the separator up to the next timestamp or end of text.
    pub message_text: &'a str,
}

/// Splits text into the alternating `[timestamp, message, timestamp, message, ...]`
/// sequence.
///
/// Text before the first timestamp is discarded. The result is empty when no
/// timestamp is found and otherwise always has even length.
///
/// # Example
///
/// ```
/// use chatlens::parsing::split_parts;
///
/// let parts = split_parts("1/2/24, 9:00 - Alice: hi\n1/2/24, 9:01 - Bob: yo\n");
/// assert_eq!(parts, vec!["1/2/24, 9:00", "Alice: hi\n", "1/2/24, 9:01", "Bob: yo\n"]);
/// ```
pub fn split_parts(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut body_start: Option<usize> = None;

    for caps in timestamp_prefix_regex().captures_iter(text) {
        let (Some(whole), Some(timestamp)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if let Some(start) = body_start {
            parts.push(&text[start..whole.start()]);
        }
        parts.push(timestamp.as_str());
        body_start = Some(whole.end());
    }

    if let Some(start) = body_start {
        parts.push(&text[start..]);
    }

    parts
}

/// Splits export text into paired raw records.
///
/// # Errors
///
/// - [`ChatlensError::Format`] with "no timestamps detected" when the text
///   contains no timestamp prefix
/// - [`ChatlensError::Format`] with "mismatched timestamp/message pairing" if
///   the timestamp and message slots differ in count
pub fn split_records(text: &str) -> Result<Vec<RawRecord<'_>>> {
    let parts = split_parts(text);
    if parts.is_empty() {
        return Err(ChatlensError::format(
            "no timestamps detected. Make sure the file is a plain-text chat export \
             with lines like '12/31/23, 11:59 PM - Name: message'",
        ));
    }

    let timestamps: Vec<&str> = parts.iter().copied().step_by(2).collect();
    let messages: Vec<&str> = parts.iter().copied().skip(1).step_by(2).collect();

    if timestamps.len() != messages.len() {
        return Err(ChatlensError::format(format!(
            "mismatched timestamp/message pairing ({} timestamps, {} messages)",
            timestamps.len(),
            messages.len()
        )));
    }

    tracing::debug!(records = timestamps.len(), "split export text");

    Ok(timestamps
        .into_iter()
        .zip(messages)
        .map(|(timestamp_text, message_text)| RawRecord {
            timestamp_text,
            message_text,
        })
        .collect())
}
