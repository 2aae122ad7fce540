//! Memoized parsing keyed by input content.
//!
//! Parsing is a pure function of the text and the parser configuration, so a
//! host that re-renders on every interaction can reuse the previous result.

use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, VecDeque};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::config::ParserConfig;
use crate::error::Result;
use crate::parser::ChatParser;
use crate::record::RecordSet;

/// Number of parsed inputs kept by [`ParseCache::default`].
pub const DEFAULT_CAPACITY: usize = 8;

#[derive(Debug)]
struct CacheEntry {
    input: String,
    config: ParserConfig,
    records: Arc<RecordSet>,
}

/// A bounded cache of parsed record sets.
///
/// Entries are keyed by a hash of the input text and parser configuration.
/// A hit is confirmed by comparing the stored input, so a hash collision
/// parses again rather than returning another export's records. When full,
/// the oldest entry is evicted. Failed parses are not cached.
///
/// # Example
///
/// ```rust
/// use chatlens::cache::ParseCache;
/// use chatlens::ChatParser;
/// use std::sync::Arc;
///
/// let parser = ChatParser::new();
/// let mut cache = ParseCache::new(4);
///
/// let text = "1/2/24, 9:00 - Alice: hi\n";
/// let first = cache.get_or_parse(&parser, text)?;
/// let second = cache.get_or_parse(&parser, text)?;
/// assert!(Arc::ptr_eq(&first, &second));
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
#[derive(Debug)]
pub struct ParseCache {
    capacity: usize,
    entries: HashMap<u64, Vec<CacheEntry>>,
    order: VecDeque<u64>,
    len: usize,
}

impl Default for ParseCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ParseCache {
    /// Creates a cache holding at most `capacity` parsed inputs (minimum 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: HashMap::new(),
            order: VecDeque::new(),
            len: 0,
        }
    }

    /// Maximum number of cached inputs.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of cached inputs.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every cached entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
        self.len = 0;
    }

    /// Returns the cached record set for `input`, parsing it on a miss.
    ///
    /// # Errors
    ///
    /// Propagates any parse error; the failure is not remembered.
    pub fn get_or_parse(&mut self, parser: &ChatParser, input: &str) -> Result<Arc<RecordSet>> {
        let config = *parser.config();
        let key = cache_key(input, &config);

        if let Some(hit) = self.lookup(key, input, &config) {
            tracing::trace!(key, "parse cache hit");
            return Ok(hit);
        }

        tracing::trace!(key, "parse cache miss");
        let records = Arc::new(parser.parse_str(input)?);
        self.insert(key, input, config, Arc::clone(&records));
        Ok(records)
    }

    fn lookup(&self, key: u64, input: &str, config: &ParserConfig) -> Option<Arc<RecordSet>> {
        self.entries
            .get(&key)?
            .iter()
            .find(|entry| entry.input == input && entry.config == *config)
            .map(|entry| Arc::clone(&entry.records))
    }

    fn insert(&mut self, key: u64, input: &str, config: ParserConfig, records: Arc<RecordSet>) {
        while self.len >= self.capacity {
            self.evict_oldest();
        }

        self.entries.entry(key).or_default().push(CacheEntry {
            input: input.to_string(),
            config,
            records,
        });
        self.order.push_back(key);
        self.len += 1;
    }

    fn evict_oldest(&mut self) {
        let Some(key) = self.order.pop_front() else {
            return;
        };
        if let Some(bucket) = self.entries.get_mut(&key) {
            if !bucket.is_empty() {
                bucket.remove(0);
                self.len -= 1;
            }
            if bucket.is_empty() {
                self.entries.remove(&key);
            }
        }
    }
}

fn cache_key(input: &str, config: &ParserConfig) -> u64 {
    let mut hasher = DefaultHasher::new();
    input.hash(&mut hasher);
    config.date_order.hash(&mut hasher);
    config.clean_text.hash(&mut hasher);
    hasher.finish()
}
