//! Runs of consecutive active days.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Selection;
use crate::record::ChatRecord;

/// Longest and most recent runs of consecutive active days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    /// Longest run anywhere in the history.
    pub longest: usize,
    /// Run ending at the last active day.
    pub current: usize,
}

impl Streak {
    /// Computes streaks over calendar dates in any order, duplicates allowed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::analytics::Streak;
    /// use chrono::NaiveDate;
    ///
    /// let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
    /// let streak = Streak::from_dates([d(1), d(2), d(3), d(5)]);
    /// assert_eq!((streak.longest, streak.current), (3, 1));
    /// ```
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        let mut days: Vec<NaiveDate> = dates.into_iter().collect();
        days.sort_unstable();
        days.dedup();

        if days.is_empty() {
            return Self::default();
        }

        let mut longest = 1;
        let mut current = 1;
        for pair in days.windows(2) {
            if pair[0].succ_opt() == Some(pair[1]) {
                current += 1;
                longest = longest.max(current);
            } else {
                current = 1;
            }
        }

        Self { longest, current }
    }
}

/// Computes streaks over the days with at least one authored message.
///
/// System notifications do not make a day active. An empty selection
/// yields `(0, 0)`.
pub fn streaks(records: &[ChatRecord], selection: &Selection) -> Streak {
    Streak::from_dates(
        selection
            .apply(records)
            .filter(|r| !r.is_notification())
            .map(|r| r.date),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::GROUP_NOTIFICATION;

    fn d(month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, day).unwrap()
    }

    fn record(date: NaiveDate, sender: &str) -> ChatRecord {
        ChatRecord::new(date.and_hms_opt(10, 0, 0).unwrap(), sender, "x\n")
    }

    #[test]
    fn test_gap_resets_current() {
        let streak = Streak::from_dates([d(1, 1), d(1, 2), d(1, 3), d(1, 5)]);
        assert_eq!(streak, Streak { longest: 3, current: 1 });
    }

    #[test]
    fn test_unsorted_with_duplicates() {
        let streak = Streak::from_dates([d(1, 3), d(1, 1), d(1, 2), d(1, 2), d(1, 1)]);
        assert_eq!(streak, Streak { longest: 3, current: 3 });
    }

    #[test]
    fn test_across_month_boundary() {
        let streak = Streak::from_dates([d(1, 30), d(1, 31), d(2, 1)]);
        assert_eq!(streak.longest, 3);
    }

    #[test]
    fn test_single_and_empty() {
        assert_eq!(Streak::from_dates([d(6, 1)]), Streak { longest: 1, current: 1 });
        assert_eq!(Streak::from_dates(Vec::<NaiveDate>::new()), Streak::default());
    }

    #[test]
    fn test_notifications_do_not_count() {
        let records = vec![
            record(d(1, 1), "Alice"),
            record(d(1, 2), GROUP_NOTIFICATION),
            record(d(1, 3), "Alice"),
        ];
        assert_eq!(streaks(&records, &Selection::Overall), Streak { longest: 1, current: 1 });
    }

    #[test]
    fn test_user_selection() {
        let records = vec![
            record(d(1, 1), "Alice"),
            record(d(1, 2), "Bob"),
            record(d(1, 3), "Bob"),
        ];
        assert_eq!(streaks(&records, &Selection::user("Bob")).longest, 2);
        assert_eq!(streaks(&records, &Selection::user("Zed")), Streak::default());
    }
}
