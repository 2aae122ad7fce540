//! A complete analysis of one selection, ready to print or serialize.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use super::{
    ChatSummary, LongestMessage, MonthlyBucket, Selection, SenderShare, Stopwords, Streak,
    busiest_users, daily_timeline, emoji_frequency, hourly_activity, longest_messages,
    month_activity, monthly_timeline, sender_shares, streaks, summary, weekday_activity,
    word_frequency,
};
use crate::config::AnalysisConfig;
use crate::parsing::DateOrder;
use crate::record::{ChatRecord, RecordSet};

/// Every analytics table for one selection of a record set.
///
/// Per-sender rankings (`busiest_users`, `sender_shares`) only make sense
/// for the whole conversation and are `None` for a single-user selection.
///
/// # Example
///
/// ```rust
/// use chatlens::analytics::{Report, Selection, Stopwords};
/// use chatlens::config::AnalysisConfig;
/// use chatlens::parse_chat;
///
/// let records = parse_chat("1/1/24, 9:00 - Alice: hi\n1/2/24, 9:00 - Bob: hey\n")?;
/// let report = Report::build(
///     &records,
///     &Selection::Overall,
///     &AnalysisConfig::default(),
///     Stopwords::builtin(),
/// );
///
/// assert_eq!(report.summary.messages, 2);
/// assert_eq!(report.streak.longest, 2);
/// assert!(report.busiest_users.is_some());
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub selection: Selection,
    pub date_order: DateOrder,
    pub first_message: NaiveDateTime,
    pub last_message: NaiveDateTime,
    pub senders: Vec<String>,
    pub summary: ChatSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busiest_users: Option<Vec<(String, usize)>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_shares: Option<Vec<SenderShare>>,
    pub monthly_timeline: Vec<MonthlyBucket>,
    pub daily_timeline: Vec<(NaiveDate, usize)>,
    pub weekday_activity: Vec<(String, usize)>,
    pub month_activity: Vec<(String, usize)>,
    pub hourly_activity: Vec<(u32, usize)>,
    pub streak: Streak,
    pub top_words: Vec<(String, usize)>,
    pub top_emoji: Vec<(char, usize)>,
    pub longest_messages: Vec<LongestMessage>,
}

impl Report {
    /// Runs every analysis over `records` restricted to `selection`.
    pub fn build(
        records: &RecordSet,
        selection: &Selection,
        config: &AnalysisConfig,
        stopwords: &Stopwords,
    ) -> Self {
        let rows: &[ChatRecord] = records.records();
        let (first_message, last_message) = records.span();

        let (busiest, shares) = if selection.is_overall() {
            (
                Some(busiest_users(rows, config.top_users)),
                Some(sender_shares(rows)),
            )
        } else {
            (None, None)
        };

        let mut top_emoji = emoji_frequency(rows, selection);
        top_emoji.truncate(config.top_emoji);

        let report = Self {
            selection: selection.clone(),
            date_order: records.date_order(),
            first_message,
            last_message,
            senders: records.senders().into_iter().map(String::from).collect(),
            summary: summary(rows, selection),
            busiest_users: busiest,
            sender_shares: shares,
            monthly_timeline: monthly_timeline(rows, selection),
            daily_timeline: daily_timeline(rows, selection),
            weekday_activity: weekday_activity(rows, selection),
            month_activity: month_activity(rows, selection),
            hourly_activity: hourly_activity(rows, selection),
            streak: streaks(rows, selection),
            top_words: word_frequency(rows, selection, stopwords, config.top_words),
            top_emoji,
            longest_messages: longest_messages(rows, selection),
        };

        tracing::debug!(
            selection = %report.selection,
            messages = report.summary.messages,
            "built analytics report"
        );
        report
    }
}
