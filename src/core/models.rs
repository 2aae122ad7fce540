//! Output configuration and the serialized row shape.

use serde::{Deserialize, Serialize};

use crate::record::ChatRecord;

/// Timestamp layout used by every writer.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Configuration for output format.
/// Controls which columns and rows are written.
///
/// # Example
///
/// ```rust
/// use chatlens::core::models::OutputConfig;
///
/// let config = OutputConfig::new().with_calendar().without_notifications();
/// assert!(config.include_calendar);
/// assert!(!config.include_notifications);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Write the derived calendar columns (date, year, month, ...).
    pub include_calendar: bool,
    /// Write system notification rows.
    pub include_notifications: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_calendar: false,
            include_notifications: true,
        }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_calendar(mut self) -> Self {
        self.include_calendar = true;
        self
    }

    #[must_use]
    pub fn without_notifications(mut self) -> Self {
        self.include_notifications = false;
        self
    }

    /// Returns `true` if `record` should be written.
    pub fn keeps(&self, record: &ChatRecord) -> bool {
        self.include_notifications || !record.is_notification()
    }
}

/// Derived calendar columns of a row.
#[derive(Debug, Serialize)]
pub(crate) struct CalendarColumns<'a> {
    pub date: String,
    pub year: i32,
    pub month: u32,
    pub month_name: &'a str,
    pub day: u32,
    pub day_name: &'a str,
    pub hour: u32,
    pub minute: u32,
}

/// One written row, borrowing from the record.
///
/// The message is the body without its trailing line break.
#[derive(Debug, Serialize)]
pub(crate) struct OutputRow<'a> {
    pub timestamp: String,
    pub sender: &'a str,
    pub message: &'a str,
    #[serde(flatten)]
    pub calendar: Option<CalendarColumns<'a>>,
}

impl<'a> OutputRow<'a> {
    pub(crate) fn from_record(record: &'a ChatRecord, config: &OutputConfig) -> Self {
        let calendar = config.include_calendar.then(|| CalendarColumns {
            date: record.date.format("%Y-%m-%d").to_string(),
            year: record.year,
            month: record.month,
            month_name: &record.month_name,
            day: record.day,
            day_name: &record.day_name,
            hour: record.hour,
            minute: record.minute,
        });

        Self {
            timestamp: record.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            sender: &record.sender,
            message: record.text(),
            calendar,
        }
    }

    /// Column names in write order.
    pub(crate) fn header(config: &OutputConfig) -> Vec<&'static str> {
        let mut header = vec!["timestamp", "sender", "message"];
        if config.include_calendar {
            header.extend([
                "date",
                "year",
                "month",
                "month_name",
                "day",
                "day_name",
                "hour",
                "minute",
            ]);
        }
        header
    }

    /// Field values in [`header`](Self::header) order.
    pub(crate) fn fields(&self) -> Vec<String> {
        let mut fields = vec![
            self.timestamp.clone(),
            self.sender.to_string(),
            self.message.to_string(),
        ];
        if let Some(cal) = &self.calendar {
            fields.extend([
                cal.date.clone(),
                cal.year.to_string(),
                cal.month.to_string(),
                cal.month_name.to_string(),
                cal.day.to_string(),
                cal.day_name.to_string(),
                cal.hour.to_string(),
                cal.minute.to_string(),
            ]);
        }
        fields
    }
}
