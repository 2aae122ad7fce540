//! Words dropped from frequency tables.
//!
//! The built-in list covers common English and romanized Hindi filler words.
//! It is embedded in the binary and built once on first use; afterwards it is
//! shared read-only by every caller.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::error::Result;

const BUILTIN_STOPWORDS: &str = include_str!("data/stop_hinglish.txt");

/// An immutable set of lowercase stopwords.
///
/// # Example
///
/// ```rust
/// use chatlens::analytics::Stopwords;
///
/// assert!(Stopwords::builtin().contains("the"));
/// assert!(Stopwords::builtin().contains("Hai"));
///
/// let custom = Stopwords::from_text("foo\nbar baz");
/// assert_eq!(custom.len(), 3);
/// assert!(!custom.contains("the"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Returns the shared built-in list.
    pub fn builtin() -> &'static Stopwords {
        static BUILTIN: OnceLock<Stopwords> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let words = Stopwords::from_text(BUILTIN_STOPWORDS);
            tracing::trace!(count = words.len(), "loaded built-in stopwords");
            words
        })
    }

    /// An empty list that filters nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a list from whitespace-separated words.
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_lowercase).collect(),
        }
    }

    /// Reads a whitespace-separated word list from a file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::Io`](crate::ChatlensError::Io) if the file
    /// cannot be read.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let words = Self::from_text(&text);
        tracing::debug!(path = %path.display(), count = words.len(), "loaded stopwords");
        Ok(words)
    }

    /// Returns `true` if `word` is a stopword, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
