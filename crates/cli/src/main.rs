// ABOUTME: CLI for the film ETL: downloads the archived ranked-films page and writes CSV and JSON.
// ABOUTME: Runs with built-in defaults; flags override the source URL, output paths and row limit.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use gleaner::page::fetch::{build_client, fetch};
use gleaner::telemetry::init_tracing;
use gleaner_films::{parse_films, render_table, write_csv, write_json, DEFAULT_ROW_LIMIT};
use tracing::info;

const DEFAULT_URL: &str = "https://web.archive.org/web/20230902185655/https://en.everybodywiki.com/100_Most_Highly-Ranked_Films";

/// Extract the top ranked films table to CSV and JSON.
#[derive(Parser, Debug)]
#[command(name = "film-etl")]
#[command(about = "Download the ranked-films table and save the top rows as CSV and JSON", long_about = None)]
struct Args {
    /// Page holding the ranked-films table.
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// CSV output path.
    #[arg(long, default_value = "top_50_films.csv")]
    csv: PathBuf,

    /// JSON output path.
    #[arg(long, default_value = "top_50_films.json")]
    json: PathBuf,

    /// Number of data rows to keep.
    #[arg(long, default_value_t = DEFAULT_ROW_LIMIT)]
    limit: usize,

    /// Do not print the parsed table to stdout.
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing("info");

    let client = build_client("gleaner-film-etl/0.1", Duration::from_secs(60))?;
    let page = fetch(&client, &args.url)?;
    let films = parse_films(&page.html, args.limit)
        .with_context(|| format!("parsing film table from {}", args.url))?;

    if !args.quiet {
        println!("{}", render_table(&films));
    }

    write_csv(&films, &args.csv).with_context(|| format!("saving {}", args.csv.display()))?;
    write_json(&films, &args.json).with_context(|| format!("saving {}", args.json.display()))?;
    info!(
        rows = films.len(),
        csv = %args.csv.display(),
        json = %args.json.display(),
        "saved film table"
    );
    Ok(())
}
