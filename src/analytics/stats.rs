//! Message counts and per-sender rankings.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{Selection, count_ranked, is_media};
use crate::record::ChatRecord;

/// Headline numbers for a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSummary {
    /// Number of records.
    pub messages: usize,
    /// Whitespace-separated tokens across all bodies.
    pub words: usize,
    /// Records whose body is the media placeholder.
    pub media: usize,
    /// URLs found in bodies.
    pub links: usize,
}

/// A sender's share of all records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenderShare {
    pub sender: String,
    pub messages: usize,
    /// Percentage of all records, rounded to two decimals.
    pub percent: f64,
}

/// A sender's longest text message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongestMessage {
    pub sender: String,
    /// Length in characters.
    pub length: usize,
    pub text: String,
}

fn link_regex() -> &'static Regex {
    static LINK_RE: OnceLock<Regex> = OnceLock::new();
    LINK_RE.get_or_init(|| {
        Regex::new(r#"(?i)\b(?:https?://|www\.)[^\s<>"]+"#).expect("link regex compiles")
    })
}

/// Counts messages, words, media placeholders and links.
pub fn summary(records: &[ChatRecord], selection: &Selection) -> ChatSummary {
    selection
        .apply(records)
        .fold(ChatSummary::default(), |mut acc, record| {
            acc.messages += 1;
            acc.words += record.message_body.split_whitespace().count();
            if is_media(record) {
                acc.media += 1;
            }
            acc.links += link_regex().find_iter(&record.message_body).count();
            acc
        })
}

/// Returns the `n` senders with the most messages.
///
/// System notifications are not counted. Ties keep the order in which the
/// senders first appear.
///
/// # Example
///
/// ```rust
/// use chatlens::analytics::busiest_users;
/// use chatlens::parse_chat;
///
/// let records = parse_chat(
///     "1/1/24, 9:00 - Bob: a\n1/1/24, 9:01 - Alice: b\n1/1/24, 9:02 - Alice: c\n1/1/24, 9:03 - Carol joined\n",
/// )?;
/// let top = busiest_users(records.records(), 5);
/// assert_eq!(top, vec![("Alice".to_string(), 2), ("Bob".to_string(), 1)]);
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn busiest_users(records: &[ChatRecord], n: usize) -> Vec<(String, usize)> {
    let mut ranked = count_ranked(
        records
            .iter()
            .filter(|r| !r.is_notification())
            .map(|r| r.sender.as_str()),
    );
    ranked.truncate(n);
    ranked
        .into_iter()
        .map(|(sender, count)| (sender.to_string(), count))
        .collect()
}

/// Returns every sender's share of all records, largest first.
///
/// Unlike [`busiest_users`], notifications are included under the
/// sentinel sender so the percentages sum to 100.
pub fn sender_shares(records: &[ChatRecord]) -> Vec<SenderShare> {
    let total = records.len();
    if total == 0 {
        return Vec::new();
    }

    count_ranked(records.iter().map(|r| r.sender.as_str()))
        .into_iter()
        .map(|(sender, messages)| SenderShare {
            sender: sender.to_string(),
            messages,
            percent: round2(messages as f64 * 100.0 / total as f64),
        })
        .collect()
}

/// Returns each sender's longest non-media message, longest first.
///
/// Length is measured in characters of the trimmed body. On equal length
/// the earlier message wins.
pub fn longest_messages(records: &[ChatRecord], selection: &Selection) -> Vec<LongestMessage> {
    let mut best: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<LongestMessage> = Vec::new();

    for record in selection.apply(records) {
        if record.is_notification() || is_media(record) {
            continue;
        }
        let text = record.text();
        let length = text.chars().count();

        match best.get(record.sender.as_str()) {
            Some(&slot) => {
                if length > out[slot].length {
                    out[slot].length = length;
                    out[slot].text = text.to_string();
                }
            }
            None => {
                best.insert(record.sender.as_str(), out.len());
                out.push(LongestMessage {
                    sender: record.sender.clone(),
                    length,
                    text: text.to_string(),
                });
            }
        }
    }

    out.sort_by(|a, b| b.length.cmp(&a.length));
    out
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
