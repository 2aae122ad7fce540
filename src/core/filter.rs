//! Filter records by date range and sender.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for narrowing a record set before output or analysis.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Records on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Records on or before date |
//! | Sender | [`with_sender`](FilterConfig::with_sender) | Records from a specific user |
//! | Notifications | [`include_notifications`](FilterConfig::include_notifications) | Keep or drop system events |
//!
//! # Example
//!
//! ```
//! use chatlens::core::filter::{FilterConfig, apply_filters};
//! use chatlens::parse_chat;
//!
//! # fn main() -> chatlens::Result<()> {
//! let records = parse_chat(
//!     "1/1/24, 9:00 - Alice: Old\n6/15/24, 9:00 - Alice: New\n6/16/24, 9:00 - Bob: Hi\n",
//! )?;
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_sender("alice");
//!
//! let filtered = apply_filters(&records, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].text(), "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Date bounds are inclusive and compare calendar dates
//! - Sender matching is case-insensitive for ASCII characters
//! - Multiple filters are combined with AND logic

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ChatlensError;
use crate::record::ChatRecord;

/// Configuration for filtering records by date and sender.
///
/// Filters are combined with AND logic: a record must match all active
/// filters to be included in the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Include only records on or after this date.
    pub after: Option<NaiveDate>,

    /// Include only records on or before this date.
    pub before: Option<NaiveDate>,

    /// Include only records from this sender (case-insensitive).
    pub from: Option<String>,

    /// Keep system notifications (default: true).
    pub notifications: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            after: None,
            before: None,
            from: None,
            notifications: true,
        }
    }
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        self.after = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        self.before = Some(parse_filter_date(date_str)?);
        Ok(self)
    }

    /// Sets the sender filter.
    ///
    /// ```
    /// use chatlens::core::filter::FilterConfig;
    ///
    /// // Matches "Alice", "alice", "ALICE"
    /// let config = FilterConfig::new().with_sender("Alice");
    /// assert!(config.has_user_filter());
    /// ```
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.from = Some(sender.into());
        self
    }

    /// Keeps or drops system notifications.
    #[must_use]
    pub fn include_notifications(mut self, include: bool) -> Self {
        self.notifications = include;
        self
    }

    /// Sets the start date directly.
    #[must_use]
    pub fn with_after(mut self, date: NaiveDate) -> Self {
        self.after = Some(date);
        self
    }

    /// Sets the end date directly.
    #[must_use]
    pub fn with_before(mut self, date: NaiveDate) -> Self {
        self.before = Some(date);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.has_user_filter() || !self.notifications
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if sender filter is active.
    pub fn has_user_filter(&self) -> bool {
        self.from.is_some()
    }

    /// Returns `true` if `record` passes every active filter.
    pub fn matches(&self, record: &ChatRecord) -> bool {
        if !self.notifications && record.is_notification() {
            return false;
        }
        if let Some(ref from) = self.from {
            if !record.sender.eq_ignore_ascii_case(from) {
                return false;
            }
        }
        if self.after.is_some_and(|after| record.date < after) {
            return false;
        }
        if self.before.is_some_and(|before| record.date > before) {
            return false;
        }
        true
    }
}

fn parse_filter_date(date_str: &str) -> Result<NaiveDate, ChatlensError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| ChatlensError::invalid_date(date_str))
}

/// Returns copies of the records that match all active filters, in order.
///
/// Accepts a [`RecordSet`](crate::RecordSet) or any slice of records. The
/// input is left untouched.
pub fn apply_filters<R>(records: &R, config: &FilterConfig) -> Vec<ChatRecord>
where
    R: AsRef<[ChatRecord]> + ?Sized,
{
    let records = records.as_ref();
    if !config.is_active() {
        return records.to_vec();
    }

    let filtered: Vec<ChatRecord> = records
        .iter()
        .filter(|record| config.matches(record))
        .cloned()
        .collect();

    tracing::debug!(kept = filtered.len(), total = records.len(), "applied record filters");
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::GROUP_NOTIFICATION;

    fn make_record(sender: &str, body: &str, date: &str) -> ChatRecord {
        let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        ChatRecord::new(day.and_hms_opt(12, 0, 0).unwrap(), sender, body)
    }

    #[test]
    fn test_filter_by_sender() {
        let records = vec![
            make_record("Alice", "Hello", "2024-01-01"),
            make_record("Bob", "Hi", "2024-01-01"),
            make_record("alice", "Bye", "2024-01-01"), // lowercase
        ];

        let config = FilterConfig::new().with_sender("Alice");
        let filtered = apply_filters(&records, &config);

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.sender.eq_ignore_ascii_case("Alice")));
    }

    #[test]
    fn test_filter_by_date_after() {
        let records = vec![
            make_record("Alice", "Old", "2024-01-01"),
            make_record("Alice", "New", "2024-06-15"),
        ];

        let config = FilterConfig::new().with_date_from("2024-06-01").unwrap();
        let filtered = apply_filters(&records, &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].message_body, "New");
    }

    #[test]
    fn test_filter_by_date_before_is_inclusive() {
        let records = vec![
            make_record("Alice", "Old", "2024-01-01"),
            make_record("Alice", "Edge", "2024-03-01"),
            make_record("Alice", "New", "2024-06-15"),
        ];

        let config = FilterConfig::new().with_date_to("2024-03-01").unwrap();
        let filtered = apply_filters(&records, &config);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[1].message_body, "Edge");
    }

    #[test]
    fn test_drop_notifications() {
        let records = vec![
            make_record("Alice", "hi", "2024-01-01"),
            make_record(GROUP_NOTIFICATION, "Bob joined", "2024-01-01"),
        ];

        let config = FilterConfig::new().include_notifications(false);
        let filtered = apply_filters(&records, &config);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].sender, "Alice");
    }

    #[test]
    fn test_invalid_date_format() {
        let result = FilterConfig::new().with_date_from("01-01-2024");
        assert!(matches!(result, Err(ChatlensError::InvalidDate { .. })));
    }

    #[test]
    fn test_combined_filters() {
        let records = vec![
            make_record("Alice", "Old Alice", "2024-01-01"),
            make_record("Alice", "New Alice", "2024-06-15"),
            make_record("Bob", "New Bob", "2024-06-15"),
        ];

        let config = FilterConfig::new()
            .with_date_from("2024-06-01")
            .unwrap()
            .with_sender("Alice");

        let filtered = apply_filters(&records, &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].message_body, "New Alice");
    }

    #[test]
    fn test_inactive_filter_keeps_everything() {
        let records = vec![make_record("Alice", "a", "2024-01-01")];
        let filtered = apply_filters(records.as_slice(), &FilterConfig::new());
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_is_active() {
        assert!(!FilterConfig::new().is_active());
        assert!(FilterConfig::new().with_sender("Alice").is_active());
        assert!(FilterConfig::new().include_notifications(false).is_active());
        assert!(
            FilterConfig::new()
                .with_date_from("2024-01-01")
                .unwrap()
                .is_active()
        );
    }
}
