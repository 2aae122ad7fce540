//! Sender/body separation.

/// Separator between the author name and the message text.
const SENDER_SEPARATOR: &str = ": ";

/// Splits `"<identity>: <body>"` into `(Some(identity), body)`.
///
/// The identity is everything before the first `": "` and must be non-empty.
/// Without such a prefix the whole text is returned as the body with no
/// sender; this is how system events (member added, subject changed,
/// encryption notice) appear in exports.
///
/// A system event that itself contains `": "` is indistinguishable from an
/// authored message: `"Alice changed the subject to: Trip"` yields the
/// sender `"Alice changed the subject to"`.
///
/// # Example
///
/// ```
/// use chatlens::parsing::split_sender;
///
/// assert_eq!(split_sender("Alice: hello"), (Some("Alice"), "hello"));
/// assert_eq!(split_sender("Bob joined using this group's invite link"), (None, "Bob joined using this group's invite link"));
/// ```
pub fn split_sender(message_text: &str) -> (Option<&str>, &str) {
    match message_text.split_once(SENDER_SEPARATOR) {
        Some((identity, body)) if !identity.is_empty() => (Some(identity), body),
        _ => (None, message_text),
    }
}
