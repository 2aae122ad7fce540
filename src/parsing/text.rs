//! Cleanup of raw export text before record splitting.
//!
//! Exports from different devices and locales sprinkle invisible characters
//! around timestamps and sometimes spell out the period of the day. This
//! module rewrites those into the plain form the splitter expects.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Characters removed outright: RTL/LTR marks and the byte-order mark.
const STRIPPED_CHARS: &[char] = &['\u{200F}', '\u{200E}', '\u{FEFF}'];

/// Characters rewritten to an ASCII space: narrow and regular no-break spaces.
const SPACE_CHARS: &[char] = &['\u{202F}', '\u{00A0}'];

/// Verbose period phrases and their 12-hour marker.
const VERBOSE_PERIODS: &[(&str, &str)] = &[
    ("in the morning", "AM"),
    ("in the afternoon", "PM"),
    ("in the evening", "PM"),
    ("at night", "PM"),
];

fn verbose_period_regex() -> &'static Regex {
    static VERBOSE_PERIOD_RE: OnceLock<Regex> = OnceLock::new();
    VERBOSE_PERIOD_RE.get_or_init(|| {
        Regex::new(r"(?i)(\d{1,2}:\d{2}) +(in the morning|in the afternoon|in the evening|at night)")
            .expect("verbose period regex compiles")
    })
}

/// Normalizes unicode quirks and verbose period labels in export text.
///
/// - U+202F and U+00A0 become a plain space
/// - U+200F, U+200E and U+FEFF are removed
/// - `10:30 in the morning` becomes `10:30 AM` (case-insensitive); the
///   rewrite only applies directly after a clock time, so message text that
///   happens to say "at night" is left alone
///
/// # Example
///
/// ```
/// use chatlens::parsing::clean_export_text;
///
/// let cleaned = clean_export_text("1/2/24, 9:15\u{202f}in the morning - Alice: hi");
/// assert_eq!(cleaned, "1/2/24, 9:15 AM - Alice: hi");
/// ```
pub fn clean_export_text(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if STRIPPED_CHARS.contains(&ch) {
            continue;
        }
        if SPACE_CHARS.contains(&ch) {
            cleaned.push(' ');
        } else {
            cleaned.push(ch);
        }
    }

    verbose_period_regex()
        .replace_all(&cleaned, |caps: &Captures<'_>| {
            let phrase = caps[2].to_lowercase();
            let marker = VERBOSE_PERIODS
                .iter()
                .find(|(verbose, _)| *verbose == phrase)
                .map_or("PM", |(_, marker)| *marker);
            format!("{} {}", &caps[1], marker)
        })
        .into_owned()
}
