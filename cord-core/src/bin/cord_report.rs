//! CORD Metadata Report
//!
//! Runs the cleaning and aggregation pipeline over a metadata export and
//! prints the results, once for the whole corpus and optionally again for a
//! year range, the same two paths an interactive explorer would take.
//!
//! ## Usage
//!
//! ```bash
//! # Full report over a raw export
//! cord_report metadata.csv
//!
//! # Also write the cleaned, enriched snapshot for later runs
//! cord_report metadata.csv --snapshot metadata_cleaned.csv
//!
//! # Reuse a snapshot and look at 2020-2021 only
//! cord_report metadata_cleaned.csv --from-snapshot --min-year 2020 --max-year 2021
//!
//! # Custom stopwords / caps, JSON output
//! cord_report metadata.csv --config analysis.toml --json
//! ```
//!
//! ## Output
//!
//! - **Missing values**: share of rows missing each important column (raw input only)
//! - **Cleaning**: rows kept and rows dropped per reason (raw input only)
//! - **Full corpus**: papers per year, top journals, top sources, top title words
//! - **Filtered**: the same aggregations for the selected years, when a bound is given.
//!   The selection is clamped to the data's years; one outside them gives an empty view
//!
//! Logging goes to stderr and honours `RUST_LOG`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use cord_core::clean::{clean_with_report, CleanReport};
use cord_core::features::derive_features;
use cord_core::filter::{filter_in_range, resolve_selection, year_bounds};
use cord_core::io::{load_raw_records, load_snapshot, save_snapshot};
use cord_core::profile::{missing_fractions, ColumnProfile, IMPORTANT_COLUMNS};
use cord_core::{AnalysisConfig, CorpusSummary, StopwordSet, ValidatedRecord};

#[derive(Parser, Debug)]
#[command(name = "cord_report")]
#[command(about = "Clean a document metadata export and report aggregate statistics")]
struct Cli {
    /// Raw metadata CSV, or a snapshot with --from-snapshot
    input: PathBuf,

    /// TOML file with stopwords, top_n and title_top_n
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the cleaned, enriched records to this CSV
    #[arg(long, value_name = "FILE")]
    snapshot: Option<PathBuf>,

    /// Treat INPUT as a snapshot instead of a raw export
    #[arg(long)]
    from_snapshot: bool,

    /// Lower year bound of the filtered view (defaults to the earliest year)
    #[arg(long)]
    min_year: Option<i32>,

    /// Upper year bound of the filtered view (defaults to the latest year)
    #[arg(long)]
    max_year: Option<i32>,

    /// Override top_n and title_top_n
    #[arg(long)]
    top: Option<usize>,

    /// Print JSON instead of text tables
    #[arg(long)]
    json: bool,

    /// Log level when RUST_LOG is unset (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Serialize)]
struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    missing: Option<Vec<ColumnProfile>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cleaning: Option<CleanReport>,
    full: CorpusSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    filtered: Option<FilteredView>,
}

/// Aggregations for the selected years. `min_year`/`max_year` are the
/// selection clamped to the data, `None` when nothing overlaps.
#[derive(Serialize)]
struct FilteredView {
    min_year: Option<i32>,
    max_year: Option<i32>,
    summary: CorpusSummary,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    if let Some(n) = cli.top {
        config.top_n = n;
        config.title_top_n = n;
    }
    let stopwords = StopwordSet::from_config(&config);

    let (records, missing, cleaning) = if cli.from_snapshot {
        let records = load_snapshot(&cli.input)
            .with_context(|| format!("failed to read snapshot {}", cli.input.display()))?;
        (records, None, None)
    } else {
        let raw = load_raw_records(&cli.input)
            .with_context(|| format!("failed to read {}", cli.input.display()))?;
        let missing = missing_fractions(&raw, IMPORTANT_COLUMNS);
        let (mut records, report) = clean_with_report(&raw);
        derive_features(&mut records);
        (records, Some(missing), Some(report))
    };

    if let Some(path) = &cli.snapshot {
        save_snapshot(&records, path)
            .with_context(|| format!("failed to write snapshot {}", path.display()))?;
    }

    let full = CorpusSummary::compute_with(&records, &config, &stopwords);
    let filtered = filtered_view(&cli, &records, &config, &stopwords)?;

    let report = Report {
        missing,
        cleaning,
        full,
        filtered,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "off" | "error" => tracing::Level::ERROR,
        "warn" => tracing::Level::WARN,
        "debug" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => tracing::Level::INFO,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn filtered_view(
    cli: &Cli,
    records: &[ValidatedRecord],
    config: &AnalysisConfig,
    stopwords: &StopwordSet,
) -> Result<Option<FilteredView>> {
    if cli.min_year.is_none() && cli.max_year.is_none() {
        return Ok(None);
    }

    let selection = resolve_selection(cli.min_year, cli.max_year, year_bounds(records))?;
    let subset: Vec<ValidatedRecord> = match selection {
        Some(range) => filter_in_range(records, range).into_iter().cloned().collect(),
        None => {
            tracing::warn!(
                min = ?cli.min_year,
                max = ?cli.max_year,
                "year selection does not overlap the data"
            );
            Vec::new()
        }
    };

    Ok(Some(FilteredView {
        min_year: selection.map(|r| r.min()),
        max_year: selection.map(|r| r.max()),
        summary: CorpusSummary::compute_with(&subset, config, stopwords),
    }))
}

fn print_report(report: &Report) {
    if let Some(missing) = &report.missing {
        println!("=== Missing values ===");
        println!("--------------------------------");
        for col in missing {
            println!(
                "{:<14}: {:>10} ({:.3})",
                col.column,
                fmt_count(col.missing),
                col.fraction
            );
        }
        println!("--------------------------------\n");
    }

    if let Some(cleaning) = &report.cleaning {
        println!("=== Cleaning ===");
        println!("--------------------------------");
        println!("Rows          : {}", fmt_count(cleaning.input));
        println!("Kept          : {}", fmt_count(cleaning.kept));
        println!("No title      : {}", fmt_count(cleaning.missing_title));
        println!("No date       : {}", fmt_count(cleaning.missing_publish_time));
        println!("Bad date      : {}", fmt_count(cleaning.unparseable_date));
        println!("--------------------------------\n");
    }

    println!("=== Full corpus ===");
    println!("{}", report.full);

    if let Some(view) = &report.filtered {
        match (view.min_year, view.max_year) {
            (Some(min), Some(max)) => println!("\n=== Years {min}-{max} ==="),
            _ => println!("\n=== Selected years (outside the data) ==="),
        }
        println!("{}", view.summary);
    }
}

fn fmt_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }
    out
}
