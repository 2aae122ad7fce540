//! The parsing pipeline for plain-text chat exports.
//!
//! ```text
//! raw text ──► clean_export_text ──► split_records ──► normalize_records ──► RecordSet
//! ```
//!
//! - [`text`] - unicode cleanup and verbose period rewriting
//! - [`splitter`] - timestamp-prefix detection and `(timestamp, message)` pairing
//! - [`timestamp`] - day/month resolution across the whole export
//! - [`sender`] - `name: body` separation
//! - [`normalizer`] - assembling typed records
//!
//! Every stage is a pure function of its input.

pub mod normalizer;
pub mod sender;
pub mod splitter;
pub mod text;
pub mod timestamp;

pub use normalizer::normalize_records;
pub use sender::split_sender;
pub use splitter::{RawRecord, split_parts, split_records};
pub use text::clean_export_text;
pub use timestamp::{DateOrder, parse_timestamp, resolve_timestamps};
