//! Word frequency tables.

use super::{Selection, Stopwords, count_ranked, is_media};
use crate::record::ChatRecord;

/// Number of words a frequency table lists unless told otherwise.
pub const DEFAULT_TOP_WORDS: usize = 20;

/// Returns the `top_n` most common words, most common first.
///
/// Words are lowercased whitespace-separated tokens from authored,
/// non-media messages. Stopwords are dropped. Ties keep first appearance
/// order.
///
/// # Example
///
/// ```rust
/// use chatlens::analytics::{Selection, Stopwords, word_frequency};
/// use chatlens::parse_chat;
///
/// let records = parse_chat(
///     "1/1/24, 9:00 - Alice: Pizza is great\n1/1/24, 9:01 - Bob: pizza and pasta\n",
/// )?;
/// let words = word_frequency(records.records(), &Selection::Overall, Stopwords::builtin(), 3);
///
/// assert_eq!(words[0], ("pizza".to_string(), 2));
/// assert!(words.iter().all(|(w, _)| w != "is" && w != "and"));
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn word_frequency(
    records: &[ChatRecord],
    selection: &Selection,
    stopwords: &Stopwords,
    top_n: usize,
) -> Vec<(String, usize)> {
    let words = selection
        .apply(records)
        .filter(|r| !r.is_notification() && !is_media(r))
        .flat_map(|r| r.message_body.split_whitespace())
        .map(str::to_lowercase)
        .filter(|word| !stopwords.contains(word));

    let mut ranked = count_ranked(words);
    ranked.truncate(top_n);
    ranked
}
