//! Reading export files into chat text.
//!
//! The parser works on a decoded string. This module turns a file or a byte
//! buffer into that string:
//!
//! 1. Empty input is rejected.
//! 2. Zip archives are opened and their largest `.txt` member is used as the
//!    export; attachments and thumbnails are never `.txt`.
//! 3. Bytes are decoded as UTF-8 (BOM stripped), then UTF-16 when a UTF-16
//!    BOM is present, then ISO-8859-1, which accepts any byte sequence.

use std::fs;
use std::io::{Cursor, Read};
use std::path::Path;

use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{ChatlensError, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];

/// Local file header, end of central directory, and spanning markers.
const ZIP_SIGNATURES: &[&[u8; 4]] = &[b"PK\x03\x04", b"PK\x05\x06", b"PK\x07\x08"];

/// Text encoding a buffer was decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    Latin1,
}

/// Returns `true` if the buffer starts with a zip signature.
pub fn looks_like_zip(bytes: &[u8]) -> bool {
    bytes.len() >= 4 && ZIP_SIGNATURES.iter().any(|sig| bytes.starts_with(&sig[..]))
}

/// Decodes export bytes and reports which encoding was used.
///
/// Zip archives are detected by signature and unpacked with
/// [`extract_txt_from_zip`] before decoding.
///
/// # Errors
///
/// Returns [`ChatlensError::Intake`] for empty buffers, corrupt archives and
/// archives without a `.txt` member.
pub fn decode_chat_bytes_with_encoding(bytes: &[u8]) -> Result<(String, TextEncoding)> {
    if bytes.is_empty() {
        return Err(ChatlensError::intake("uploaded file is empty"));
    }
    if looks_like_zip(bytes) {
        let (contents, _) = extract_txt_from_zip(bytes)?;
        return Ok(decode_text(&contents));
    }
    Ok(decode_text(bytes))
}

/// Picks the largest `.txt` member of a zip archive and returns its bytes
/// with the member name.
///
/// Ties keep the member that comes first in the archive.
///
/// # Errors
///
/// Returns [`ChatlensError::Intake`] if the archive cannot be read or holds
/// no `.txt` file.
pub fn extract_txt_from_zip(bytes: &[u8]) -> Result<(Vec<u8>, String)> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(corrupt_archive)?;

    let mut chosen: Option<(usize, u64)> = None;
    for index in 0..archive.len() {
        let entry = archive.by_index(index).map_err(corrupt_archive)?;
        if entry.is_dir() || !entry.name().to_lowercase().ends_with(".txt") {
            continue;
        }
        if chosen.is_none_or(|(_, size)| entry.size() > size) {
            chosen = Some((index, entry.size()));
        }
    }

    let Some((index, size)) = chosen else {
        return Err(ChatlensError::intake(
            "zip archive does not contain a .txt chat export",
        ));
    };

    let mut entry = archive.by_index(index).map_err(corrupt_archive)?;
    let name = entry.name().to_string();
    let mut contents = Vec::with_capacity(usize::try_from(size).unwrap_or(0));
    entry.read_to_end(&mut contents).map_err(|e| {
        ChatlensError::intake(format!("could not read {name} from zip archive: {e}"))
    })?;

    tracing::debug!(member = %name, bytes = contents.len(), "extracted chat export from zip archive");
    Ok((contents, name))
}

fn corrupt_archive(err: ZipError) -> ChatlensError {
    ChatlensError::intake(format!("uploaded file is not a valid zip archive ({err})"))
}

fn decode_text(bytes: &[u8]) -> (String, TextEncoding) {
    let without_bom = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if let Ok(text) = std::str::from_utf8(without_bom) {
        return (text.to_string(), TextEncoding::Utf8);
    }

    if let Some(payload) = bytes.strip_prefix(UTF16_LE_BOM) {
        return (decode_utf16(payload, u16::from_le_bytes), TextEncoding::Utf16Le);
    }
    if let Some(payload) = bytes.strip_prefix(UTF16_BE_BOM) {
        return (decode_utf16(payload, u16::from_be_bytes), TextEncoding::Utf16Be);
    }

    tracing::debug!("input is not UTF-8, decoding as ISO-8859-1");
    (bytes.iter().map(|&b| char::from(b)).collect(), TextEncoding::Latin1)
}

/// Decodes export bytes into chat text.
///
/// # Example
///
/// ```
/// use chatlens::intake::decode_chat_bytes;
///
/// let text = decode_chat_bytes(b"\xEF\xBB\xBF1/2/24, 9:00 - Alice: hi")?;
/// assert_eq!(text, "1/2/24, 9:00 - Alice: hi");
///
/// assert!(decode_chat_bytes(b"").unwrap_err().is_intake());
/// # Ok::<(), chatlens::ChatlensError>(())
/// ```
pub fn decode_chat_bytes(bytes: &[u8]) -> Result<String> {
    decode_chat_bytes_with_encoding(bytes).map(|(text, _)| text)
}

/// Reads and decodes an export file.
///
/// A `.zip` extension or zip signature routes the file through
/// [`extract_txt_from_zip`]. Other files without a `.txt` extension are
/// accepted as long as their contents decode; a debug event notes the
/// unexpected extension.
///
/// # Errors
///
/// - [`ChatlensError::Io`] if the file cannot be read
/// - [`ChatlensError::Intake`] for empty files, corrupt archives and
///   archives without a `.txt` member
pub fn load_chat_file(path: &Path) -> Result<String> {
    let has_extension = |wanted: &str| {
        path.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted))
    };

    let bytes = fs::read(path)?;
    if bytes.is_empty() {
        return Err(ChatlensError::intake("uploaded file is empty"));
    }

    if has_extension("zip") || looks_like_zip(&bytes) {
        let (contents, member) = extract_txt_from_zip(&bytes)?;
        let (text, encoding) = decode_text(&contents);
        tracing::info!(path = %path.display(), %member, ?encoding, "loaded chat export from archive");
        return Ok(text);
    }

    if !has_extension("txt") {
        tracing::debug!(path = %path.display(), "input does not have a .txt extension");
    }

    let (text, encoding) = decode_text(&bytes);
    tracing::debug!(path = %path.display(), bytes = bytes.len(), ?encoding, "loaded chat export");
    Ok(text)
}

fn decode_utf16(payload: &[u8], to_unit: fn([u8; 2]) -> u16) -> String {
    let units: Vec<u16> = payload
        .chunks_exact(2)
        .map(|pair| to_unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}
