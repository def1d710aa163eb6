// ABOUTME: CLI binary for the gleaner news scraper.
// ABOUTME: Runs once with built-in defaults; optional flags override the config, output path and home URL.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use gleaner::telemetry::init_tracing;
use gleaner::{run, HttpPageProvider, ScrapeOptions, ScrapeOptionsBuilder};

#[derive(Parser, Debug)]
#[command(name = "gleaner")]
#[command(about = "Scrape entertainment news and the cartoon of the day to JSON")]
struct Args {
    /// JSON config file; missing keys keep their defaults
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Output file path (default: ekantipur_data.json)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Override the home page URL
    #[arg(long = "home-url")]
    home_url: Option<String>,

    /// Print elapsed time in ms to stderr
    #[arg(long = "timing")]
    timing: bool,
}

fn load_options(args: &Args) -> Result<ScrapeOptions, gleaner::GleanError> {
    let base = match &args.config {
        Some(path) => ScrapeOptions::from_json_file(path)?,
        None => ScrapeOptions::default(),
    };
    let mut builder = ScrapeOptionsBuilder::from_options(base);
    if let Some(output) = &args.output {
        builder = builder.output(output);
    }
    if let Some(url) = &args.home_url {
        builder = builder.home_url(url);
    }
    builder.build()
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing("info");

    let opts = match load_options(&args) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(1);
        }
    };

    let start = Instant::now();
    let outcome = HttpPageProvider::from_options(&opts).and_then(|provider| run(provider, &opts));
    let elapsed = start.elapsed();

    if args.timing {
        let _ = writeln!(io::stderr(), "elapsed: {}ms", elapsed.as_millis());
    }

    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(1)
        }
    }
}
