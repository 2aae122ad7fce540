//! Example: Using chatlens as a library
//!
//! This example walks through parsing an export, filtering it, computing
//! analytics and writing the records back out.
//!
//! Run with: cargo run --example library_usage

use chatlens::prelude::*;

const EXPORT: &str = "\
12/30/23, 9:14\u{202f}PM - Messages and calls are end-to-end encrypted. No one outside of this chat can read them.
12/30/23, 9:15\u{202f}PM - Alice: Are we still on for tomorrow?
12/30/23, 9:17\u{202f}PM - Bob: Yes! Pizza at 7 🍕
12/31/23, 10:02 in the morning - Alice: Bringing the board games
and the speaker
12/31/23, 11:59\u{202f}PM - Bob: Happy new year 🎉🎉
1/1/24, 12:01\u{202f}AM - Carol joined using this group's invite link
1/1/24, 12:03\u{202f}AM - Carol: <Media omitted>
1/1/24, 9:40\u{202f}AM - Alice: Photos here https://example.com/album
";

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== chatlens Library Usage Examples ===\n");

    // Example 1: Parse an export held in memory
    println!("1. Parsing an export:");
    let records = parse_chat(EXPORT)?;
    println!("   {} records, dates read as {}", records.len(), records.date_order());
    for record in records.iter().take(3) {
        println!("   [{}] {}: {}", record.timestamp, record.sender, record.text());
    }

    // Example 2: Pin the date convention
    println!("\n2. Pinning day-first dates:");
    let parser = ChatParser::with_config(ParserConfig::new().with_date_order(DateOrder::DayFirst));
    let eu = parser.parse_str("02/03/2023, 18:45 - Alice: hi\n")?;
    println!("   02/03/2023 -> {}", eu.records()[0].date);

    // Example 3: Headline statistics
    println!("\n3. Summary statistics:");
    let stats = summary(records.records(), &Selection::Overall);
    println!(
        "   messages={} words={} media={} links={}",
        stats.messages, stats.words, stats.media, stats.links
    );
    for (sender, count) in busiest_users(records.records(), 3) {
        println!("   {sender}: {count}");
    }

    // Example 4: Per-user analytics
    println!("\n4. Alice only:");
    let alice = Selection::user("Alice");
    let streak = streaks(records.records(), &alice);
    println!("   longest streak: {} days", streak.longest);
    for (word, count) in word_frequency(records.records(), &alice, Stopwords::builtin(), 5) {
        println!("   {word}: {count}");
    }

    // Example 5: Filter by date, then build a full report
    println!("\n5. Report for 2024:");
    let filter = FilterConfig::new().with_date_from("2024-01-01")?;
    let recent = RecordSet::new(apply_filters(&records, &filter), records.date_order())?;
    let report = Report::build(
        &recent,
        &Selection::Overall,
        &AnalysisConfig::default(),
        Stopwords::builtin(),
    );
    println!("   {} messages from {}", report.summary.messages, report.first_message);
    for bucket in &report.monthly_timeline {
        println!("   {}: {}", bucket.label, bucket.messages);
    }

    // Example 6: Memoized parsing
    println!("\n6. Parse cache:");
    let mut cache = ParseCache::default();
    let first = cache.get_or_parse(&ChatParser::new(), EXPORT)?;
    let second = cache.get_or_parse(&ChatParser::new(), EXPORT)?;
    println!(
        "   cached entries: {}, same result reused: {}",
        cache.len(),
        std::sync::Arc::ptr_eq(&first, &second)
    );

    // Example 7: Export records
    println!("\n7. Export formats:");
    let config = OutputConfig::new().without_notifications();
    for format in OutputFormat::all() {
        let out = to_format_string(records.records(), *format, &config)?;
        let first_line = out.lines().next().unwrap_or_default();
        println!("   {format}: {first_line}");
    }

    println!("\n=== Done ===");
    Ok(())
}
