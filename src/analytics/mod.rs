//! Descriptive statistics over parsed chat records.
//!
//! Every function here is a pure aggregation over a slice of
//! [`ChatRecord`]s narrowed by a [`Selection`]. Nothing mutates its input.
//!
//! - [`stats`] - counts, busiest users, sender shares, longest messages
//! - [`timeline`] - monthly/daily timelines and weekday/month/hour histograms
//! - [`streak`] - longest and current runs of active days
//! - [`words`] - word frequency with a stopword filter
//! - [`emoji`] - emoji frequency
//! - [`stopwords`] - the built-in and custom stopword lists
//! - [`report`] - all of the above bundled into one serializable value
//!
//! # Example
//!
//! ```rust
//! use chatlens::analytics::{self, Selection};
//! use chatlens::parse_chat;
//!
//! let records = parse_chat(
//!     "1/1/24, 9:00 - Alice: hi 😀\n1/2/24, 9:00 - Bob: hello\n1/2/24, 9:05 - Alice: again\n",
//! )?;
//!
//! let overall = analytics::summary(records.records(), &Selection::Overall);
//! assert_eq!(overall.messages, 3);
//!
//! let alice = analytics::summary(records.records(), &Selection::user("Alice"));
//! assert_eq!(alice.messages, 2);
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

pub mod emoji;
pub mod report;
pub mod stats;
pub mod stopwords;
pub mod streak;
pub mod timeline;
pub mod words;

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::record::ChatRecord;

pub use emoji::{emoji_frequency, is_emoji};
pub use report::Report;
pub use stats::{
    ChatSummary, LongestMessage, SenderShare, busiest_users, longest_messages, sender_shares,
    summary,
};
pub use stopwords::Stopwords;
pub use streak::{Streak, streaks};
pub use timeline::{
    MonthlyBucket, daily_timeline, hourly_activity, month_activity, monthly_timeline,
    weekday_activity,
};
pub use words::{DEFAULT_TOP_WORDS, word_frequency};

/// Body the exporter writes in place of attachments when media is excluded.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Which records an aggregation looks at.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// Every record in the set.
    #[default]
    Overall,
    /// Records whose sender equals the given name exactly.
    User(String),
}

impl Selection {
    /// Selects one sender's records.
    pub fn user(name: impl Into<String>) -> Self {
        Selection::User(name.into())
    }

    /// Builds a selection from an optional sender name.
    pub fn from_user(name: Option<&str>) -> Self {
        name.map_or(Selection::Overall, Selection::user)
    }

    /// Returns `true` if `record` is part of this selection.
    pub fn matches(&self, record: &ChatRecord) -> bool {
        match self {
            Selection::Overall => true,
            Selection::User(name) => record.sender == *name,
        }
    }

    /// Returns `true` for [`Selection::Overall`].
    pub fn is_overall(&self) -> bool {
        matches!(self, Selection::Overall)
    }

    /// Iterates over the records in this selection, in order.
    pub fn apply<'a>(&'a self, records: &'a [ChatRecord]) -> impl Iterator<Item = &'a ChatRecord> + 'a {
        records.iter().filter(move |record| self.matches(record))
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Overall => f.write_str("Overall"),
            Selection::User(name) => f.write_str(name),
        }
    }
}

/// Returns `true` if the body is the media placeholder.
pub fn is_media(record: &ChatRecord) -> bool {
    record.message_body.trim_end() == MEDIA_PLACEHOLDER
}

/// Counts keys and orders them by count descending, ties by first appearance.
pub(crate) fn count_ranked<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for key in keys {
        match index.get(&key) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }

    // Stable sort keeps first-appearance order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
