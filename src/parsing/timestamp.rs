//! Timestamp parsing with global day/month resolution.
//!
//! Numeric export dates like `02/03/2023` are ambiguous. The ordering is
//! decided once for the whole export: every timestamp must parse under the
//! chosen convention, otherwise the next convention is tried, and if none
//! fits the parse fails. Conventions are never mixed within one export.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ChatlensError, Result};

/// Interpretation of the first two numeric date fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// `M/D/Y`, as in US exports.
    MonthFirst,
    /// `D/M/Y`, as in most other locales.
    DayFirst,
}

impl DateOrder {
    /// Conventions tried, in order, when none is pinned.
    pub fn resolution_sequence() -> &'static [DateOrder] {
        &[DateOrder::MonthFirst, DateOrder::DayFirst]
    }

    /// Returns the canonical name.
    pub fn name(self) -> &'static str {
        match self {
            DateOrder::MonthFirst => "month-first",
            DateOrder::DayFirst => "day-first",
        }
    }
}

impl fmt::Display for DateOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DateOrder {
    type Err = ChatlensError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "month-first" | "mdy" | "us" => Ok(DateOrder::MonthFirst),
            "day-first" | "dmy" | "eu" => Ok(DateOrder::DayFirst),
            _ => Err(ChatlensError::invalid_value(
                "date order",
                format!("unknown date order '{s}'. Expected one of: month-first, day-first"),
            )),
        }
    }
}

/// Period-of-day marker on 12-hour timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Period {
    Am,
    Pm,
}

/// Numeric components of a timestamp before the day/month decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TimestampFields {
    first: u32,
    second: u32,
    year: i32,
    hour: u32,
    minute: u32,
    period: Option<Period>,
}

fn timestamp_fields_regex() -> &'static Regex {
    static TIMESTAMP_FIELDS_RE: OnceLock<Regex> = OnceLock::new();
    TIMESTAMP_FIELDS_RE.get_or_init(|| {
        Regex::new(
            r"^\s*(\d{1,2})[/\-](\d{1,2})[/\-](\d{2}|\d{4}),\s+(\d{1,2}):(\d{2})(?:\s?([AaPp])\.?[Mm]\.?)?\s*$",
        )
        .expect("timestamp fields regex compiles")
    })
}

impl TimestampFields {
    fn parse(text: &str) -> Option<Self> {
        let caps = timestamp_fields_regex().captures(text)?;
        let year_text = caps.get(3)?.as_str();
        let raw_year: i32 = year_text.parse().ok()?;
        // Two-digit years follow the `%y` pivot: 69-99 -> 19xx, 00-68 -> 20xx.
        let year = if year_text.len() == 2 {
            if raw_year >= 69 {
                1900 + raw_year
            } else {
                2000 + raw_year
            }
        } else {
            raw_year
        };

        let period = caps.get(6).map(|m| {
            if m.as_str().eq_ignore_ascii_case("a") {
                Period::Am
            } else {
                Period::Pm
            }
        });

        Some(Self {
            first: caps.get(1)?.as_str().parse().ok()?,
            second: caps.get(2)?.as_str().parse().ok()?,
            year,
            hour: caps.get(4)?.as_str().parse().ok()?,
            minute: caps.get(5)?.as_str().parse().ok()?,
            period,
        })
    }

    fn to_datetime(self, order: DateOrder) -> Option<NaiveDateTime> {
        let (month, day) = match order {
            DateOrder::MonthFirst => (self.first, self.second),
            DateOrder::DayFirst => (self.second, self.first),
        };

        let hour = match self.period {
            None => self.hour,
            Some(_) if self.hour > 12 => return None,
            Some(Period::Am) => self.hour % 12,
            Some(Period::Pm) => self.hour % 12 + 12,
        };

        NaiveDate::from_ymd_opt(self.year, month, day)?.and_hms_opt(hour, self.minute, 0)
    }
}

/// Parses one timestamp under a fixed convention.
///
/// Accepts `D/M/Y, H:MM` with an optional `AM`/`PM` marker (any case, with
/// or without dots, attached or space-separated). Returns `None` when the
/// text does not form a valid date and time under `order`.
///
/// # Example
///
/// ```
/// use chatlens::parsing::{DateOrder, parse_timestamp};
///
/// let us = parse_timestamp("02/03/2023, 9:15 PM", DateOrder::MonthFirst).unwrap();
/// let eu = parse_timestamp("02/03/2023, 9:15 PM", DateOrder::DayFirst).unwrap();
/// assert_eq!(us.to_string(), "2023-02-03 21:15:00");
/// assert_eq!(eu.to_string(), "2023-03-02 21:15:00");
///
/// assert!(parse_timestamp("13/02/2023, 10:00", DateOrder::MonthFirst).is_none());
/// ```
pub fn parse_timestamp(text: &str, order: DateOrder) -> Option<NaiveDateTime> {
    TimestampFields::parse(text)?.to_datetime(order)
}

/// Parses every timestamp under one convention chosen for the whole export.
///
/// With `pinned = None` the month-first convention is tried across all
/// timestamps, then day-first. With `pinned = Some(order)` only that
/// convention is tried. The first convention under which *every* timestamp
/// parses wins.
///
/// # Errors
///
/// Returns [`ChatlensError::TimestampParse`] when no tried convention parses
/// all timestamps. The error reports the first failing text and the failure
/// count under the last convention tried.
pub fn resolve_timestamps(
    texts: &[&str],
    pinned: Option<DateOrder>,
) -> Result<(DateOrder, Vec<NaiveDateTime>)> {
    let fields: Vec<Option<TimestampFields>> =
        texts.iter().map(|text| TimestampFields::parse(text)).collect();

    let candidates: &[DateOrder] = match pinned {
        Some(DateOrder::MonthFirst) => &[DateOrder::MonthFirst],
        Some(DateOrder::DayFirst) => &[DateOrder::DayFirst],
        None => DateOrder::resolution_sequence(),
    };

    let mut last_failure: Option<(usize, usize)> = None;

    for &order in candidates {
        let parsed: Vec<Option<NaiveDateTime>> = fields
            .iter()
            .map(|f| f.and_then(|f| f.to_datetime(order)))
            .collect();

        let failures = parsed.iter().filter(|p| p.is_none()).count();
        if failures == 0 {
            tracing::debug!(order = %order, count = parsed.len(), "resolved timestamp ordering");
            return Ok((order, parsed.into_iter().flatten().collect()));
        }

        tracing::debug!(order = %order, failures, "timestamp ordering rejected");
        let first_failure = parsed.iter().position(Option::is_none).unwrap_or_default();
        last_failure = Some((first_failure, failures));
    }

    let (index, failures) = last_failure.unwrap_or((0, texts.len()));
    let sample = texts.get(index).copied().unwrap_or_default();
    tracing::warn!(sample, failures, total = texts.len(), "no date ordering parses every timestamp");
    Err(ChatlensError::timestamp_parse(sample, failures, texts.len()))
}
