//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - how export text is turned into records
//! - [`AnalysisConfig`] - sizes of the ranked tables in a report
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::ParserConfig;
//! use chatlens::parsing::DateOrder;
//! use chatlens::ChatParser;
//!
//! let config = ParserConfig::new().with_date_order(DateOrder::DayFirst);
//! let parser = ChatParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

use crate::parsing::DateOrder;

/// Configuration for export parsing.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
///
/// let config = ParserConfig::new().with_clean_text(false);
/// assert!(config.date_order.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Pin the day/month convention instead of resolving it (default: `None`, auto)
    pub date_order: Option<DateOrder>,

    /// Strip invisible characters and rewrite verbose periods before splitting (default: true)
    pub clean_text: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            date_order: None,
            clean_text: true,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the day/month convention.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = Some(order);
        self
    }

    /// Resolves the day/month convention automatically (month-first, then day-first).
    #[must_use]
    pub fn with_auto_date_order(mut self) -> Self {
        self.date_order = None;
        self
    }

    /// Enables or disables text cleanup before splitting.
    #[must_use]
    pub fn with_clean_text(mut self, enabled: bool) -> Self {
        self.clean_text = enabled;
        self
    }
}

/// Configuration for analytics reports.
///
/// # Example
///
/// ```rust
/// use chatlens::config::AnalysisConfig;
///
/// let config = AnalysisConfig::new().with_top_words(10);
/// assert_eq!(config.top_words, 10);
/// assert_eq!(config.top_users, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of busiest users listed (default: 5)
    pub top_users: usize,

    /// Number of most common words listed (default: 20)
    pub top_words: usize,

    /// Number of most common emoji listed (default: 10)
    pub top_emoji: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_users: 5,
            top_words: 20,
            top_emoji: 10,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of busiest users listed.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Sets the number of most common words listed.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the number of most common emoji listed.
    #[must_use]
    pub fn with_top_emoji(mut self, n: usize) -> Self {
        self.top_emoji = n;
        self
    }
}
