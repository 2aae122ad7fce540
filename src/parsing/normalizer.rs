//! Record normalization: raw pairs to typed [`ChatRecord`]s.

use crate::error::Result;
use crate::parsing::sender::split_sender;
use crate::parsing::splitter::RawRecord;
use crate::parsing::timestamp::{DateOrder, resolve_timestamps};
use crate::record::{ChatRecord, GROUP_NOTIFICATION, RecordSet};

/// Turns split raw records into a [`RecordSet`].
///
/// Timestamps are resolved for the whole batch first (see
/// [`resolve_timestamps`]); only then are senders separated and derived
/// calendar fields computed. Output order equals input order.
///
/// # Errors
///
/// - [`ChatlensError::TimestampParse`](crate::ChatlensError::TimestampParse)
///   if no day/month ordering parses every timestamp
/// - [`ChatlensError::EmptyChat`](crate::ChatlensError::EmptyChat) if
///   `raw` is empty
pub fn normalize_records(raw: &[RawRecord<'_>], pinned: Option<DateOrder>) -> Result<RecordSet> {
    let texts: Vec<&str> = raw.iter().map(|r| r.timestamp_text).collect();
    let (order, timestamps) = resolve_timestamps(&texts, pinned)?;

    let records: Vec<ChatRecord> = raw
        .iter()
        .zip(timestamps)
        .map(|(raw, timestamp)| {
            let (sender, body) = split_sender(raw.message_text);
            ChatRecord::new(timestamp, sender.unwrap_or(GROUP_NOTIFICATION), body)
        })
        .collect();

    RecordSet::new(records, order)
}
