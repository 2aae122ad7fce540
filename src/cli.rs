//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`DateOrderArg`] - `--date-order` choices
//! - [`OutputFormat`] - `--format` choices
//! - [`init_tracing`] - stderr diagnostics for `-v` flags
//! - [`render_report`] - the human-readable report printed to stdout

use std::fmt::Write as _;

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analytics::{Report, Selection};
use crate::parsing::DateOrder;

/// Parse a chat export and print conversation analytics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens \"WhatsApp Chat with Family.txt\"
    chatlens \"WhatsApp Chat with Family.zip\"
    chatlens chat.txt --user Alice --top 10
    chatlens chat.txt --date-order day-first --after 2024-01-01
    chatlens chat.txt -o records.jsonl --calendar
    chatlens chat.txt --report-json > report.json")]
pub struct Args {
    /// Path to the exported .txt chat, or the .zip export that contains it
    pub input: String,

    /// Analyze a single sender instead of the whole conversation
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// How to read ambiguous numeric dates
    #[arg(long, value_enum, default_value = "auto")]
    pub date_order: DateOrderArg,

    /// Number of entries in the word table
    #[arg(long, value_name = "N", default_value_t = crate::analytics::DEFAULT_TOP_WORDS)]
    pub top: usize,

    /// Whitespace-separated stopword file replacing the built-in list
    #[arg(long, value_name = "FILE")]
    pub stopwords: Option<String>,

    /// Keep records on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep records on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Also write the parsed records to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Record file format (defaults to the output file's extension, then csv)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Include derived calendar columns in the record file
    #[arg(long)]
    pub calendar: bool,

    /// Leave system notifications out of the record file
    #[arg(long)]
    pub no_notifications: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub report_json: bool,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// The analytics selection requested by `--user`.
    pub fn selection(&self) -> Selection {
        Selection::from_user(self.user.as_deref())
    }
}

/// Day/month convention choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrderArg {
    /// Try month-first, then day-first
    #[default]
    Auto,

    /// M/D/Y
    #[value(alias = "us", alias = "mdy")]
    MonthFirst,

    /// D/M/Y
    #[value(alias = "eu", alias = "dmy")]
    DayFirst,
}

impl DateOrderArg {
    /// The pinned convention, or `None` for automatic resolution.
    pub fn pinned(self) -> Option<DateOrder> {
        match self {
            DateOrderArg::Auto => None,
            DateOrderArg::MonthFirst => Some(DateOrder::MonthFirst),
            DateOrderArg::DayFirst => Some(DateOrder::DayFirst),
        }
    }
}

/// Record file format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines - one record per line
    #[value(alias = "ndjson")]
    Jsonl,
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

/// Installs a stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks the level:
/// 0 = warn, 1 = info, 2 = debug, 3+ = trace.
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("chatlens={level}")));

    // Ignore the error when a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Formats a report as the text block printed by the CLI.
pub fn render_report(report: &Report) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, report);
    out
}

fn write_report(out: &mut String, report: &Report) -> std::fmt::Result {
    let rule = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

    writeln!(out, "📊 Statistics: {}", report.selection)?;
    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "   Period:    {} → {}",
        report.first_message.format("%Y-%m-%d %H:%M"),
        report.last_message.format("%Y-%m-%d %H:%M")
    )?;
    writeln!(out, "   Dates:     {}", report.date_order)?;
    writeln!(out, "   Messages:  {}", report.summary.messages)?;
    writeln!(out, "   Words:     {}", report.summary.words)?;
    writeln!(out, "   Media:     {}", report.summary.media)?;
    writeln!(out, "   Links:     {}", report.summary.links)?;

    if let Some(busiest) = &report.busiest_users {
        writeln!(out)?;
        writeln!(out, "👥 Busiest users:")?;
        for (sender, count) in busiest {
            writeln!(out, "   {sender:<24} {count:>6}")?;
        }
    }
    if let Some(shares) = &report.sender_shares {
        writeln!(out)?;
        writeln!(out, "🥧 Share of messages:")?;
        for share in shares {
            writeln!(out, "   {:<24} {:>6.2}%", share.sender, share.percent)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "📅 Monthly timeline:")?;
    for bucket in &report.monthly_timeline {
        writeln!(out, "   {:<24} {:>6}", bucket.label, bucket.messages)?;
    }

    writeln!(out)?;
    writeln!(out, "🗓️  Weekday activity:")?;
    for (day, count) in &report.weekday_activity {
        writeln!(out, "   {day:<24} {count:>6}")?;
    }

    writeln!(out)?;
    writeln!(out, "🕐 Hourly activity:")?;
    for (hour, count) in &report.hourly_activity {
        writeln!(out, "   {hour:02}:00{:<19} {count:>6}", "")?;
    }

    writeln!(out)?;
    writeln!(out, "🔥 Streaks:")?;
    writeln!(out, "   Longest:   {} days", report.streak.longest)?;
    writeln!(out, "   Current:   {} days", report.streak.current)?;

    if !report.top_words.is_empty() {
        writeln!(out)?;
        writeln!(out, "💬 Most common words:")?;
        for (word, count) in &report.top_words {
            writeln!(out, "   {word:<24} {count:>6}")?;
        }
    }

    if !report.top_emoji.is_empty() {
        writeln!(out)?;
        writeln!(out, "😀 Most common emoji:")?;
        for (emoji, count) in &report.top_emoji {
            writeln!(out, "   {emoji}   {count:>6}")?;
        }
    }

    if !report.longest_messages.is_empty() {
        writeln!(out)?;
        writeln!(out, "📏 Longest messages:")?;
        for longest in &report.longest_messages {
            writeln!(
                out,
                "   {:<24} {:>6} chars  {}",
                longest.sender,
                longest.length,
                preview(&longest.text, 60)
            )?;
        }
    }

    Ok(())
}

fn preview(text: &str, max_chars: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    if flat.chars().count() <= max_chars {
        flat
    } else {
        let cut: String = flat.chars().take(max_chars).collect();
        format!("{cut}…")
    }
}
