//! Time-bucketed message counts.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Selection, count_ranked};
use crate::record::ChatRecord;

/// Messages in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyBucket {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub messages: usize,
    /// Display label, e.g. `"January-2024"`.
    pub label: String,
}

/// Counts messages per calendar month, oldest first.
///
/// # Example
///
/// ```rust
/// use chatlens::analytics::{Selection, monthly_timeline};
/// use chatlens::parse_chat;
///
/// let records = parse_chat("1/5/24, 9:00 - A: x\n2/1/24, 9:00 - A: y\n1/9/24, 9:00 - B: z\n")?;
/// let timeline = monthly_timeline(records.records(), &Selection::Overall);
///
/// assert_eq!(timeline[0].label, "January-2024");
/// assert_eq!(timeline[0].messages, 2);
/// assert_eq!(timeline[1].label, "February-2024");
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn monthly_timeline(records: &[ChatRecord], selection: &Selection) -> Vec<MonthlyBucket> {
    let mut buckets: BTreeMap<(i32, u32), MonthlyBucket> = BTreeMap::new();

    for record in selection.apply(records) {
        buckets
            .entry((record.year, record.month))
            .or_insert_with(|| MonthlyBucket {
                year: record.year,
                month: record.month,
                month_name: record.month_name.clone(),
                messages: 0,
                label: format!("{}-{}", record.month_name, record.year),
            })
            .messages += 1;
    }

    buckets.into_values().collect()
}

/// Counts messages per calendar date, oldest first.
pub fn daily_timeline(records: &[ChatRecord], selection: &Selection) -> Vec<(NaiveDate, usize)> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for record in selection.apply(records) {
        *days.entry(record.date).or_default() += 1;
    }
    days.into_iter().collect()
}

/// Counts messages per weekday name, busiest first.
pub fn weekday_activity(records: &[ChatRecord], selection: &Selection) -> Vec<(String, usize)> {
    owned(count_ranked(
        selection.apply(records).map(|r| r.day_name.as_str()),
    ))
}

/// Counts messages per month name across all years, busiest first.
pub fn month_activity(records: &[ChatRecord], selection: &Selection) -> Vec<(String, usize)> {
    owned(count_ranked(
        selection.apply(records).map(|r| r.month_name.as_str()),
    ))
}

/// Counts messages per hour of day for the hours that occur, ascending.
pub fn hourly_activity(records: &[ChatRecord], selection: &Selection) -> Vec<(u32, usize)> {
    let mut hours: BTreeMap<u32, usize> = BTreeMap::new();
    for record in selection.apply(records) {
        *hours.entry(record.hour).or_default() += 1;
    }
    hours.into_iter().collect()
}

fn owned(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts
        .into_iter()
        .map(|(name, count)| (name.to_string(), count))
        .collect()
}
