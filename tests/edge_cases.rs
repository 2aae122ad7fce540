//! Edge case tests for chatlens
//!
//! These tests cover export quirks and boundary conditions that the
//! per-module unit tests do not reach end to end.

use std::fs;
use std::io::Write;

use chatlens::analytics::{Selection, Stopwords, emoji_frequency, summary, word_frequency};
use chatlens::config::ParserConfig;
use chatlens::intake::{TextEncoding, decode_chat_bytes_with_encoding};
use chatlens::parsing::{DateOrder, clean_export_text, split_sender};
use chatlens::{ChatParser, ChatlensError, GROUP_NOTIFICATION, parse_chat};
use chrono::{Datelike, NaiveDate, Timelike};
use tempfile::tempdir;

// =========================================================================
// Unicode quirks
// =========================================================================

#[test]
fn test_invisible_marks_around_timestamps() {
    let text = "\u{FEFF}\u{200E}1/15/24, 10:30\u{202F}AM\u{200F} - Alice: hi\n\
                1/15/24,\u{00A0}10:31\u{202F}AM - Bob: hey\n";
    let records = parse_chat(text).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records.get(0).unwrap().sender, "Alice");
    assert_eq!(records.get(1).unwrap().timestamp.minute(), 31);
}

#[test]
fn test_non_latin_senders_and_bodies() {
    let text = "\
1/15/24, 10:30 AM - Иван: Привет мир!
1/15/24, 10:31 AM - 田中太郎: こんにちは世界
1/15/24, 10:32 AM - محمد: مرحبا بالعالم
1/15/24, 10:33 AM - User 🎉: Hello 👋 World 🌍
";
    let records = parse_chat(text).unwrap();
    let senders: Vec<&str> = records.iter().map(|r| r.sender.as_str()).collect();
    assert_eq!(senders, vec!["Иван", "田中太郎", "محمد", "User 🎉"]);
    assert_eq!(records.get(1).unwrap().text(), "こんにちは世界");
}

#[test]
fn test_phone_number_sender() {
    let records = parse_chat("1/15/24, 10:30 AM - +1 (415) 555-0100: call me\n").unwrap();
    assert_eq!(records.get(0).unwrap().sender, "+1 (415) 555-0100");
}

#[test]
fn test_clean_text_can_be_disabled() {
    let text = "1/15/24, 10:30 in the morning - Alice: hi\n";

    assert!(parse_chat(text).is_ok());

    let raw_parser = ChatParser::with_config(ParserConfig::new().with_clean_text(false));
    assert!(raw_parser.parse_str(text).unwrap_err().is_format());
}

// =========================================================================
// Verbose period labels
// =========================================================================

#[test]
fn test_verbose_periods() {
    let text = "\
1/15/24, 9:05 in the morning - Alice: breakfast
1/15/24, 2:30 in the afternoon - Bob: lunch
1/15/24, 7:45 in the evening - Carol: dinner
1/15/24, 11:10 at night - Dave: sleep
";
    let records = parse_chat(text).unwrap();
    let hours: Vec<u32> = records.iter().map(|r| r.hour).collect();
    assert_eq!(hours, vec![9, 14, 19, 23]);
}

#[test]
fn test_verbose_period_only_after_clock() {
    let cleaned = clean_export_text("1/15/24, 9:05 PM - Alice: see you at night\n");
    assert!(cleaned.ends_with("see you at night\n"));

    let records = parse_chat("1/15/24, 9:05 PM - Alice: see you at night\n").unwrap();
    assert_eq!(records.get(0).unwrap().text(), "see you at night");
}

#[test]
fn test_verbose_period_case_insensitive() {
    let records = parse_chat("1/15/24, 9:05 In The Evening - Alice: hi\n").unwrap();
    assert_eq!(records.get(0).unwrap().hour, 21);
}

// =========================================================================
// 12-hour clock boundaries
// =========================================================================

#[test]
fn test_midnight_and_noon() {
    let text = "\
1/15/24, 12:00 AM - Alice: midnight
1/15/24, 12:30 PM - Bob: half past noon
1/15/24, 11:59 PM - Carol: almost tomorrow
";
    let records = parse_chat(text).unwrap();
    let hours: Vec<u32> = records.iter().map(|r| r.hour).collect();
    assert_eq!(hours, vec![0, 12, 23]);
}

#[test]
fn test_period_marker_spellings() {
    let text = "\
1/15/24, 9:00am - Alice: a
1/15/24, 9:01 p.m. - Bob: b
1/15/24, 9:02 PM - Carol: c
";
    let records = parse_chat(text).unwrap();
    let hours: Vec<u32> = records.iter().map(|r| r.hour).collect();
    assert_eq!(hours, vec![9, 21, 21]);
}

#[test]
fn test_hour_above_twelve_with_marker_rejected() {
    let err = parse_chat("1/15/24, 13:00 PM - Alice: what\n").unwrap_err();
    assert!(err.is_timestamp_parse());
}

// =========================================================================
// Dates
// =========================================================================

#[test]
fn test_dash_date_separator() {
    let records = parse_chat("15-01-2024, 10:30 - Alice: dashes\n").unwrap();
    let record = records.get(0).unwrap();
    assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    assert_eq!(records.date_order(), DateOrder::DayFirst);
}

#[test]
fn test_four_digit_and_two_digit_years() {
    let records = parse_chat("1/15/2024, 10:30 - A: x\n1/16/99, 10:30 - B: y\n").unwrap();
    assert_eq!(records.get(0).unwrap().year, 2024);
    assert_eq!(records.get(1).unwrap().year, 1999);
}

#[test]
fn test_ambiguous_dates_default_to_month_first() {
    let records = parse_chat("02/03/23, 10:00 - A: x\n04/05/23, 10:00 - B: y\n").unwrap();
    assert_eq!(records.date_order(), DateOrder::MonthFirst);
    assert_eq!(records.get(0).unwrap().date.month(), 2);
}

#[test]
fn test_one_unambiguous_date_decides_whole_export() {
    // 13/02 only parses day-first, so 02/03 is read day-first too.
    let records = parse_chat("02/03/23, 10:00 - A: x\n13/02/23, 10:00 - B: y\n").unwrap();
    assert_eq!(records.date_order(), DateOrder::DayFirst);
    assert_eq!(
        records.get(0).unwrap().date,
        NaiveDate::from_ymd_opt(2023, 3, 2).unwrap()
    );
}

#[test]
fn test_mixed_orderings_fail_without_partial_result() {
    // 13/02 needs day-first, 02/13 needs month-first.
    let err = parse_chat("13/02/23, 10:00 - A: x\n02/13/23, 10:00 - B: y\n").unwrap_err();
    match err {
        ChatlensError::TimestampParse {
            sample,
            failures,
            total,
        } => {
            assert_eq!(sample, "02/13/23, 10:00");
            assert_eq!(failures, 1);
            assert_eq!(total, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_impossible_calendar_date() {
    assert!(parse_chat("2/30/24, 10:00 - A: x\n").unwrap_err().is_timestamp_parse());
}

#[test]
fn test_leap_day() {
    let records = parse_chat("2/29/24, 10:00 - A: leap\n").unwrap();
    assert_eq!(records.get(0).unwrap().day_name, "Thursday");
}

// =========================================================================
// Record structure
// =========================================================================

#[test]
fn test_preamble_before_first_timestamp_is_dropped() {
    let text = "Chat history with Alice\nExported on some day\n\n1/15/24, 10:30 AM - Alice: hi\n";
    let records = parse_chat(text).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records.get(0).unwrap().text(), "hi");
}

#[test]
fn test_multiline_body_preserved() {
    let text = "1/15/24, 10:30 AM - Alice: line one\nline two\n\nline four\n1/15/24, 10:31 AM - Bob: ok\n";
    let records = parse_chat(text).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(
        records.get(0).unwrap().message_body,
        "line one\nline two\n\nline four\n"
    );
}

#[test]
fn test_body_line_that_looks_like_date_without_separator() {
    let text = "1/15/24, 10:30 AM - Alice: the date was\n1/1/24, 9:00 AM no dash here\n";
    let records = parse_chat(text).unwrap();
    assert_eq!(records.len(), 1);
    assert!(records.get(0).unwrap().text().contains("no dash here"));
}

#[test]
fn test_colon_in_body_splits_on_first_separator() {
    let records = parse_chat("1/15/24, 10:30 AM - Alice: Note: bring snacks\n").unwrap();
    let record = records.get(0).unwrap();
    assert_eq!(record.sender, "Alice");
    assert_eq!(record.text(), "Note: bring snacks");
}

#[test]
fn test_colon_without_space_is_not_a_sender() {
    let records = parse_chat("1/15/24, 10:30 AM - Meeting at 10:45 moved\n").unwrap();
    assert_eq!(records.get(0).unwrap().sender, GROUP_NOTIFICATION);
}

#[test]
fn test_notification_containing_separator_is_attributed() {
    assert_eq!(
        split_sender("Alice changed the subject to: Trip"),
        (Some("Alice changed the subject to"), "Trip")
    );
}

#[test]
fn test_empty_body() {
    let records = parse_chat("1/15/24, 10:30 AM - Alice: \n1/15/24, 10:31 AM - Bob: x\n").unwrap();
    assert_eq!(records.get(0).unwrap().sender, "Alice");
    assert_eq!(records.get(0).unwrap().text(), "");
}

#[test]
fn test_last_record_without_trailing_newline() {
    let records = parse_chat("1/15/24, 10:30 AM - Alice: end").unwrap();
    assert_eq!(records.get(0).unwrap().message_body, "end");
}

#[test]
fn test_crlf_line_endings() {
    let text = "1/15/24, 10:30 AM - Alice: hi\r\n1/15/24, 10:31 AM - Bob: yo\r\n";
    let records = parse_chat(text).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records.get(0).unwrap().text(), "hi");
}

// =========================================================================
// Empty and invalid input
// =========================================================================

#[test]
fn test_empty_input() {
    assert!(parse_chat("").unwrap_err().is_format());
    assert!(parse_chat("   \n\n").unwrap_err().is_format());
}

#[test]
fn test_text_without_timestamps() {
    let err = parse_chat("hello\nthis is not an export\n").unwrap_err();
    assert!(err.is_format());
}

#[test]
fn test_bracketed_ios_format_not_supported() {
    assert!(parse_chat("[1/15/24, 10:30:45 AM] Alice: Hello\n").is_err());
}

// =========================================================================
// File intake
// =========================================================================

#[test]
fn test_latin1_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    let mut bytes = b"1/15/24, 10:30 AM - Jos".to_vec();
    bytes.push(0xE9); // é
    bytes.extend_from_slice(b": caf");
    bytes.push(0xE9);
    bytes.push(b'\n');
    fs::write(&path, &bytes).unwrap();

    let records = ChatParser::new().parse(&path).unwrap();
    assert_eq!(records.get(0).unwrap().sender, "José");
    assert_eq!(records.get(0).unwrap().text(), "café");
}

#[test]
fn test_utf16_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("utf16.txt");
    let mut bytes = vec![0xFF, 0xFE];
    for unit in "1/15/24, 10:30 AM - Zoë: hi 👋\n".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(&path, &bytes).unwrap();

    let records = ChatParser::new().parse(&path).unwrap();
    assert_eq!(records.get(0).unwrap().sender, "Zoë");
    assert_eq!(records.get(0).unwrap().text(), "hi 👋");
}

#[test]
fn test_utf8_bom_detected() {
    let (text, encoding) = decode_chat_bytes_with_encoding(b"\xEF\xBB\xBFabc").unwrap();
    assert_eq!(text, "abc");
    assert_eq!(encoding, TextEncoding::Utf8);
}

#[test]
fn test_zip_export_parsed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("WhatsApp Chat with Alice.zip");

    let file = fs::File::create(&path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    writer.start_file("IMG-20240115-WA0001.jpg", zip::write::SimpleFileOptions::default()).unwrap();
    writer.write_all(&[0xFF; 512]).unwrap();
    writer
        .start_file("WhatsApp Chat with Alice.txt", zip::write::SimpleFileOptions::default())
        .unwrap();
    writer
        .write_all("1/15/24, 10:30 AM - Alice: hi\n1/15/24, 10:31 AM - Bob: hey\n".as_bytes())
        .unwrap();
    writer.finish().unwrap();

    let records = ChatParser::new().parse(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records.senders(), vec!["Alice", "Bob"]);
}

#[test]
fn test_corrupt_zip_by_content_and_name() {
    let dir = tempdir().unwrap();

    let disguised = dir.path().join("chat.txt");
    fs::write(&disguised, b"PK\x03\x04rest of archive").unwrap();
    assert!(ChatParser::new().parse(&disguised).unwrap_err().is_intake());

    let named = dir.path().join("WhatsApp Chat.zip");
    fs::write(&named, b"1/15/24, 10:30 AM - Alice: hi\n").unwrap();
    assert!(ChatParser::new().parse(&named).unwrap_err().is_intake());
}

#[test]
fn test_empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, b"").unwrap();
    assert!(ChatParser::new().parse(&path).unwrap_err().is_intake());
}

#[test]
fn test_non_txt_extension_accepted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chat.log");
    fs::write(&path, "1/15/24, 10:30 AM - Alice: hi\n").unwrap();
    assert_eq!(ChatParser::new().parse(&path).unwrap().len(), 1);
}

// =========================================================================
// Analytics on unusual content
// =========================================================================

#[test]
fn test_only_notifications() {
    let text = "1/15/24, 10:30 AM - Alice created group \"X\"\n1/15/24, 10:31 AM - Bob joined\n";
    let records = parse_chat(text).unwrap();

    assert!(records.senders().is_empty());
    assert_eq!(summary(records.records(), &Selection::Overall).messages, 2);
    assert!(
        word_frequency(records.records(), &Selection::Overall, Stopwords::builtin(), 10)
            .is_empty()
    );
}

#[test]
fn test_emoji_sequences_counted_per_codepoint() {
    let records = parse_chat("1/15/24, 10:30 AM - Alice: 👍👍🏽 ok\n").unwrap();
    let emoji = emoji_frequency(records.records(), &Selection::Overall);
    assert_eq!(emoji[0], ('👍', 2));
}

#[test]
fn test_media_placeholder_with_crlf() {
    let records = parse_chat("1/15/24, 10:30 AM - Alice: <Media omitted>\r\n").unwrap();
    assert_eq!(summary(records.records(), &Selection::Overall).media, 1);
}
