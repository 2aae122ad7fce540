//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use chatlens::analytics::{Report, Stopwords};
use chatlens::cli::{Args, init_tracing, render_report};
use chatlens::config::{AnalysisConfig, ParserConfig};
use chatlens::core::{FilterConfig, OutputConfig, apply_filters};
use chatlens::format::{OutputFormat, write_to_format};
use chatlens::{ChatParser, ChatlensError, RecordSet};

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        tracing::error!(error = %e, "chatlens failed");
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatlensError> {
    let start = Instant::now();

    let parser_config = match args.date_order.pinned() {
        Some(order) => ParserConfig::new().with_date_order(order),
        None => ParserConfig::new(),
    };
    let parser = ChatParser::with_config(parser_config);
    let records = parser.parse(Path::new(&args.input))?;
    tracing::info!(
        records = records.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "parsed {}",
        args.input
    );

    let filter_config = build_filter(args)?;
    let records = if filter_config.is_active() {
        let filtered = apply_filters(&records, &filter_config);
        tracing::info!(kept = filtered.len(), "filtered records");
        if filtered.is_empty() {
            let (first, last) = records.span();
            return Err(ChatlensError::invalid_value(
                "filter",
                format!(
                    "no records fall {}; the export runs from {} to {}",
                    describe_date_range(&filter_config),
                    first.date(),
                    last.date()
                ),
            ));
        }
        RecordSet::new(filtered, records.date_order())?
    } else {
        records
    };

    let selection = args.selection();
    if let Some(user) = &args.user {
        if !records.senders().contains(&user.as_str()) {
            return Err(ChatlensError::invalid_value(
                "user",
                format!(
                    "'{user}' did not send any messages. Known senders: {}",
                    records.senders().join(", ")
                ),
            ));
        }
    }

    let custom_stopwords = match &args.stopwords {
        Some(path) => Some(Stopwords::from_file(Path::new(path))?),
        None => None,
    };
    let stopwords = custom_stopwords.as_ref().unwrap_or_else(|| Stopwords::builtin());

    let analysis_config = AnalysisConfig::new().with_top_words(args.top);
    let report = Report::build(&records, &selection, &analysis_config, stopwords);

    if args.report_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("🔎 chatlens v{}", env!("CARGO_PKG_VERSION"));
        println!("📂 Input:   {}", args.input);
        println!();
        print!("{}", render_report(&report));
    }

    if let Some(output) = &args.output {
        let format = match args.format {
            Some(format) => OutputFormat::from(format),
            None => OutputFormat::from_path(output).unwrap_or_default(),
        };
        let mut output_config = OutputConfig::new();
        if args.calendar {
            output_config = output_config.with_calendar();
        }
        if args.no_notifications {
            output_config = output_config.without_notifications();
        }

        write_to_format(records.records(), output, format, &output_config)?;
        // Keep stdout clean for --report-json consumers.
        if args.report_json {
            eprintln!("💾 Wrote {} records to {} ({})", records.len(), output, format);
        } else {
            println!();
            println!("✅ Wrote {} records to {} ({})", records.len(), output, format);
        }
    }

    Ok(())
}

fn build_filter(args: &Args) -> Result<FilterConfig, ChatlensError> {
    let mut filter_config = FilterConfig::new();
    if let Some(ref after) = args.after {
        filter_config = filter_config.with_date_from(after)?;
    }
    if let Some(ref before) = args.before {
        filter_config = filter_config.with_date_to(before)?;
    }
    Ok(filter_config)
}

fn describe_date_range(filter_config: &FilterConfig) -> String {
    match (filter_config.after, filter_config.before) {
        (Some(after), Some(before)) => format!("between {after} and {before}"),
        (Some(after), None) => format!("on or after {after}"),
        (None, Some(before)) => format!("on or before {before}"),
        (None, None) => "within the filter".to_string(),
    }
}
