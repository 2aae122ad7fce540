//! Emoji frequency tables.

use super::{Selection, count_ranked};
use crate::record::ChatRecord;

/// Returns `true` if `c` is an emoji on its own.
///
/// Lookups go through the Unicode emoji list, so a character counts whether
/// it is written bare or with the emoji variation selector. Joiners,
/// variation selectors and plain symbols such as check marks or arrows
/// outside the list are not emoji.
///
/// ```rust
/// use chatlens::analytics::is_emoji;
///
/// assert!(is_emoji('😂'));
/// assert!(is_emoji('❤'));
/// assert!(!is_emoji('✓'));
/// assert!(!is_emoji('a'));
/// assert!(!is_emoji('\u{200D}'));
/// ```
pub fn is_emoji(c: char) -> bool {
    if c.is_ascii() {
        return false;
    }
    let mut buf = [0; 4];
    let bare = c.encode_utf8(&mut buf);
    emojis::get(bare).is_some() || emojis::get(&format!("{bare}\u{FE0F}")).is_some()
}

/// Counts emoji code points across the selection, most common first.
///
/// Multi-code-point sequences (flags, skin tones, ZWJ families) are counted
/// per component.
pub fn emoji_frequency(records: &[ChatRecord], selection: &Selection) -> Vec<(char, usize)> {
    count_ranked(
        selection
            .apply(records)
            .flat_map(|r| r.message_body.chars())
            .filter(|&c| is_emoji(c)),
    )
}
