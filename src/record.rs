//! Typed chat records and the ordered record set.
//!
//! This module provides [`ChatRecord`], the normalized representation of one
//! entry in a chat export, and [`RecordSet`], the ordered, non-empty
//! collection the parser returns.
//!
//! # Overview
//!
//! A record consists of:
//! - **Parsed**: `timestamp`, `sender`, `message_body`
//! - **Derived**: `date`, `year`, `month`, `month_name`, `day`, `day_name`,
//!   `hour`, `minute` (computed once, when the record is built)
//!
//! System events (member added, subject changed, encryption notice) carry the
//! sender [`GROUP_NOTIFICATION`].
//!
//! # Examples
//!
//! ```
//! use chatlens::ChatRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 1, 15)
//!     .unwrap()
//!     .and_hms_opt(10, 30, 0)
//!     .unwrap();
//! let record = ChatRecord::new(ts, "Alice", "Hello!");
//!
//! assert_eq!(record.month_name, "January");
//! assert_eq!(record.day_name, "Monday");
//! assert!(!record.is_notification());
//! ```
//!
//! ## Column Access
//!
//! ```
//! use chatlens::parse_chat;
//! use chatlens::record::Column;
//!
//! let records = parse_chat("1/15/24, 10:30 - Alice: Hi\n1/15/24, 10:31 - Bob: Hey\n")?;
//! let senders: Vec<String> = records
//!     .column(Column::Sender)
//!     .map(|value| value.to_string())
//!     .collect();
//!
//! assert_eq!(senders, vec!["Alice", "Bob"]);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{ChatlensError, Result};
use crate::parsing::DateOrder;

/// Sender assigned to system events that have no author prefix.
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// A single normalized entry from a chat export.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Local time as written in the export |
/// | `sender` | `String` | Author, or [`GROUP_NOTIFICATION`] |
/// | `message_body` | `String` | Text after the `name: ` prefix, verbatim |
/// | `date` | `NaiveDate` | Date portion of `timestamp` |
/// | `year`, `month`, `day` | integers | Calendar components |
/// | `month_name`, `day_name` | `String` | English full names |
/// | `hour`, `minute` | `u32` | Time-of-day components |
///
/// The body is kept exactly as it appears in the export, including the line
/// break that precedes the next entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRecord {
    /// When the message was sent (export-local, no timezone).
    pub timestamp: NaiveDateTime,

    /// Display name of the author, or [`GROUP_NOTIFICATION`].
    pub sender: String,

    /// Message text following the sender prefix.
    pub message_body: String,

    /// Calendar date of `timestamp`.
    pub date: NaiveDate,

    /// Calendar year.
    pub year: i32,

    /// Month number (1-12).
    pub month: u32,

    /// English month name, e.g. `"January"`.
    pub month_name: String,

    /// Day of the month (1-31).
    pub day: u32,

    /// English weekday name, e.g. `"Monday"`.
    pub day_name: String,

    /// Hour of the day (0-23).
    pub hour: u32,

    /// Minute of the hour (0-59).
    pub minute: u32,
}

impl ChatRecord {
    /// Creates a record and computes all derived calendar fields.
    pub fn new(
        timestamp: NaiveDateTime,
        sender: impl Into<String>,
        message_body: impl Into<String>,
    ) -> Self {
        let date = timestamp.date();
        Self {
            timestamp,
            sender: sender.into(),
            message_body: message_body.into(),
            date,
            year: date.year(),
            month: date.month(),
            month_name: date.format("%B").to_string(),
            day: date.day(),
            day_name: date.format("%A").to_string(),
            hour: timestamp.hour(),
            minute: timestamp.minute(),
        }
    }

    /// Creates a system-event record attributed to [`GROUP_NOTIFICATION`].
    pub fn notification(timestamp: NaiveDateTime, message_body: impl Into<String>) -> Self {
        Self::new(timestamp, GROUP_NOTIFICATION, message_body)
    }

    /// Returns `true` if this record is a system event rather than an authored message.
    pub fn is_notification(&self) -> bool {
        self.sender == GROUP_NOTIFICATION
    }

    /// Returns the body without the trailing line break left by the export.
    pub fn text(&self) -> &str {
        self.message_body.trim_end_matches(['\r', '\n'])
    }

    /// Returns the value of a single column.
    pub fn field(&self, column: Column) -> FieldValue<'_> {
        match column {
            Column::Timestamp => FieldValue::DateTime(self.timestamp),
            Column::Sender => FieldValue::Text(&self.sender),
            Column::MessageBody => FieldValue::Text(&self.message_body),
            Column::Date => FieldValue::Date(self.date),
            Column::Year => FieldValue::Number(i64::from(self.year)),
            Column::Month => FieldValue::Number(i64::from(self.month)),
            Column::MonthName => FieldValue::Text(&self.month_name),
            Column::Day => FieldValue::Number(i64::from(self.day)),
            Column::DayName => FieldValue::Text(&self.day_name),
            Column::Hour => FieldValue::Number(i64::from(self.hour)),
            Column::Minute => FieldValue::Number(i64::from(self.minute)),
        }
    }
}

/// Named columns of a [`RecordSet`].
///
/// Column names match the field names of [`ChatRecord`] and can be parsed
/// from strings:
///
/// ```
/// use chatlens::record::Column;
///
/// let column: Column = "day_name".parse().unwrap();
/// assert_eq!(column, Column::DayName);
/// assert_eq!(column.name(), "day_name");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Timestamp,
    Sender,
    MessageBody,
    Date,
    Year,
    Month,
    MonthName,
    Day,
    DayName,
    Hour,
    Minute,
}

impl Column {
    /// Returns the column name.
    pub fn name(self) -> &'static str {
        match self {
            Column::Timestamp => "timestamp",
            Column::Sender => "sender",
            Column::MessageBody => "message_body",
            Column::Date => "date",
            Column::Year => "year",
            Column::Month => "month",
            Column::MonthName => "month_name",
            Column::Day => "day",
            Column::DayName => "day_name",
            Column::Hour => "hour",
            Column::Minute => "minute",
        }
    }

    /// Returns all columns in record order.
    pub fn all() -> &'static [Column] {
        &[
            Column::Timestamp,
            Column::Sender,
            Column::MessageBody,
            Column::Date,
            Column::Year,
            Column::Month,
            Column::MonthName,
            Column::Day,
            Column::DayName,
            Column::Hour,
            Column::Minute,
        ]
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Column {
    type Err = ChatlensError;

    fn from_str(s: &str) -> Result<Self> {
        Column::all()
            .iter()
            .copied()
            .find(|column| column.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Column::all().iter().map(|c| c.name()).collect();
                ChatlensError::invalid_value(
                    "column",
                    format!("unknown column '{}'. Expected one of: {}", s, names.join(", ")),
                )
            })
    }
}

/// A single cell of a column projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    Text(&'a str),
    Number(i64),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::DateTime(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S")),
            FieldValue::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Number(n) => write!(f, "{n}"),
        }
    }
}

/// The ordered, non-empty result of parsing one chat export.
///
/// Records keep the order in which they appear in the source text; nothing
/// is re-sorted. A `RecordSet` can never be empty: construction fails with
/// [`ChatlensError::EmptyChat`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<ChatRecord>,
    date_order: DateOrder,
}

impl RecordSet {
    /// Wraps parsed records, rejecting an empty collection.
    pub fn new(records: Vec<ChatRecord>, date_order: DateOrder) -> Result<Self> {
        if records.is_empty() {
            return Err(ChatlensError::EmptyChat);
        }
        Ok(Self {
            records,
            date_order,
        })
    }

    /// Returns the day/month convention that resolved this export.
    pub fn date_order(&self) -> DateOrder {
        self.date_order
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at `row`, if any.
    pub fn get(&self, row: usize) -> Option<&ChatRecord> {
        self.records.get(row)
    }

    /// Returns all records as a slice.
    pub fn records(&self) -> &[ChatRecord] {
        &self.records
    }

    /// Consumes the set and returns the records.
    pub fn into_records(self) -> Vec<ChatRecord> {
        self.records
    }

    /// Iterates over records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, ChatRecord> {
        self.records.iter()
    }

    /// Projects one column across all rows.
    pub fn column(&self, column: Column) -> impl Iterator<Item = FieldValue<'_>> + '_ {
        self.records.iter().map(move |record| record.field(column))
    }

    /// Projects a column looked up by name.
    pub fn column_by_name(&self, name: &str) -> Result<Vec<FieldValue<'_>>> {
        let column: Column = name.parse()?;
        Ok(self.column(column).collect())
    }

    /// Returns distinct authored senders, sorted, without [`GROUP_NOTIFICATION`].
    pub fn senders(&self) -> Vec<&str> {
        let mut senders: Vec<&str> = self
            .records
            .iter()
            .filter(|r| !r.is_notification())
            .map(|r| r.sender.as_str())
            .collect();
        senders.sort_unstable();
        senders.dedup();
        senders
    }

    /// Returns the first and last timestamps in source order.
    pub fn span(&self) -> (NaiveDateTime, NaiveDateTime) {
        // Non-empty by construction.
        let first = self.records[0].timestamp;
        let last = self.records[self.records.len() - 1].timestamp;
        (first, last)
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a ChatRecord;
    type IntoIter = std::slice::Iter<'a, ChatRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl AsRef<[ChatRecord]> for RecordSet {
    fn as_ref(&self) -> &[ChatRecord] {
        &self.records
    }
}
