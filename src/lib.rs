//! # Chatlens
//!
//! A Rust library for turning exported chat logs into typed records and
//! computing descriptive conversation analytics.
//!
//! ## Overview
//!
//! Messaging apps export conversations as plain text, one message per
//! timestamp-prefixed line:
//!
//! ```text
//! 1/15/24, 10:30 AM - Alice: Hello!
//! 1/15/24, 10:31 AM - Bob joined using this group's invite link
//! ```
//!
//! The export format is loose: numeric dates can be day-first or
//! month-first, clocks can be 12- or 24-hour, bodies span multiple lines,
//! and system events have no author. Chatlens resolves all of that into an
//! ordered [`RecordSet`] of [`ChatRecord`]s, then runs aggregations over it.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let records = parse_chat(
//!         "1/15/24, 10:30 AM - Alice: Hello!\n1/15/24, 10:31 AM - Bob: Hi 👋\n",
//!     )?;
//!
//!     let stats = summary(records.records(), &Selection::Overall);
//!     assert_eq!(stats.messages, 2);
//!
//!     let report = Report::build(
//!         &records,
//!         &Selection::user("Alice"),
//!         &AnalysisConfig::default(),
//!         Stopwords::builtin(),
//!     );
//!     assert_eq!(report.summary.messages, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`ChatParser`] facade and [`parse_chat`]
//! - [`parsing`] - the pipeline stages (text cleanup, splitting, timestamps, senders)
//! - [`record`] - [`ChatRecord`], [`RecordSet`] and column access
//! - [`intake`] - reading and decoding export files
//! - [`cache`] - [`ParseCache`](cache::ParseCache), memoized parsing by content
//! - [`analytics`] - statistics, timelines, streaks, word and emoji tables
//! - [`config`] - parser and analysis configuration
//! - [`core`] - record filters and output writers (CSV, JSON, JSONL)
//! - [`format`] - output format selection
//! - [`cli`] - CLI types (requires the `cli` feature)
//! - [`error`] - unified error type ([`ChatlensError`], [`Result`])
//! - [`prelude`] - convenient re-exports

pub mod analytics;
pub mod cache;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod intake;
pub mod parser;
pub mod parsing;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use parser::{ChatParser, parse_chat};
pub use record::{ChatRecord, GROUP_NOTIFICATION, RecordSet};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    // Records
    pub use crate::record::{ChatRecord, Column, FieldValue, GROUP_NOTIFICATION, RecordSet};

    // Error types
    pub use crate::error::{ChatlensError, Result};

    // Parsing
    pub use crate::cache::ParseCache;
    pub use crate::parser::{ChatParser, parse_chat};
    pub use crate::parsing::DateOrder;

    // Configuration
    pub use crate::config::{AnalysisConfig, ParserConfig};

    // Analytics
    pub use crate::analytics::{
        ChatSummary, Report, Selection, Stopwords, Streak, busiest_users, daily_timeline,
        emoji_frequency, hourly_activity, longest_messages, month_activity, monthly_timeline,
        sender_shares, streaks, summary, weekday_activity, word_frequency,
    };

    // Filtering and output
    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::models::OutputConfig;
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}
