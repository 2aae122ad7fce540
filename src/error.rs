//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers every
//! failure the library can report. The parsing pipeline never returns a
//! partial record set: any failure below aborts the whole parse.
//!
//! # Error Kinds
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`Format`](ChatlensError::Format) | No timestamp prefix found, or timestamps and bodies do not pair up |
//! | [`TimestampParse`](ChatlensError::TimestampParse) | Neither month-first nor day-first parses every timestamp |
//! | [`EmptyChat`](ChatlensError::EmptyChat) | Parsing produced zero records |
//! | [`Intake`](ChatlensError::Intake) | The input file is empty, an archive, or unreadable |

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::ChatRecord;
///
/// fn my_function() -> Result<Vec<ChatRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
///
/// Each variant carries enough context for a host application to show a
/// precise, user-facing message and wait for a new input.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// The text is not a recognized chat export.
    ///
    /// This occurs when:
    /// - No `date, time - ` prefix was found anywhere in the text
    /// - The split produced a different number of timestamps and bodies
    #[error("Format error: {message}")]
    Format {
        /// Description of what's wrong
        message: String,
    },

    /// Timestamps were found but no single day/month ordering parses all of them.
    #[error(
        "Could not parse timestamps: {failures} of {total} entries do not fit a single day/month ordering (first failure: '{sample}')"
    )]
    TimestampParse {
        /// The first timestamp text that failed to parse
        sample: String,
        /// Number of timestamps that failed under the last ordering tried
        failures: usize,
        /// Total number of timestamps in the export
        total: usize,
    },

    /// Parsing succeeded but produced no records.
    #[error("The chat export contains no messages")]
    EmptyChat,

    /// The input could not be turned into chat text.
    ///
    /// This occurs when:
    /// - The file is empty
    /// - A zip archive is corrupt or holds no `.txt` export
    #[error("Intake error: {message}")]
    Intake {
        /// Description of what's wrong
        message: String,
    },

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid date in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A named value (output format, column, date order) is not recognized.
    #[error("Invalid {kind}: {message}")]
    InvalidValue {
        /// What kind of value was expected
        kind: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a format error.
    pub fn format(message: impl Into<String>) -> Self {
        ChatlensError::Format {
            message: message.into(),
        }
    }

    /// Creates a timestamp parse error.
    pub fn timestamp_parse(sample: impl Into<String>, failures: usize, total: usize) -> Self {
        ChatlensError::TimestampParse {
            sample: sample.into(),
            failures,
            total,
        }
    }

    /// Creates an intake error.
    pub fn intake(message: impl Into<String>) -> Self {
        ChatlensError::Intake {
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(kind: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidValue {
            kind,
            message: message.into(),
        }
    }

    /// Returns `true` if this is a format error.
    pub fn is_format(&self) -> bool {
        matches!(self, ChatlensError::Format { .. })
    }

    /// Returns `true` if this is a timestamp parse error.
    pub fn is_timestamp_parse(&self) -> bool {
        matches!(self, ChatlensError::TimestampParse { .. })
    }

    /// Returns `true` if this is an empty chat error.
    pub fn is_empty_chat(&self) -> bool {
        matches!(self, ChatlensError::EmptyChat)
    }

    /// Returns `true` if this is an intake error.
    pub fn is_intake(&self) -> bool {
        matches!(self, ChatlensError::Intake { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
