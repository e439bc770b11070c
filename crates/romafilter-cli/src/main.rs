//! romafilter - filter lines with a romanized query
//!
//! Reads candidate lines from a file or stdin and prints those matching the
//! query, with hanzi matched through their pinyin readings.
//!
//! Usage:
//!     romafilter zg < cities.txt
//!     romafilter --separator - --strategy prefix zhong-g --file names.txt
//!     romafilter --json bj --file places.txt

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;
use romafilter_cli::{filter_lines, parse_strategy, DEFAULT_STRATEGIES};
use romafilter_core::{FilterConfig, OrFilter, Strategy};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "romafilter")]
#[command(about = "Filter lines by a romanized (pinyin) query")]
#[command(version)]
struct Args {
    /// Query in Latin letters
    query: String,

    /// Read candidates from this file instead of stdin
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// JSON filter configuration (flags below override it)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Separator inserted at romanized syllable boundaries
    #[arg(short, long)]
    separator: Option<String>,

    /// Keep romanized syllables lowercase
    #[arg(long)]
    no_capitalize: bool,

    /// Matching strategy, repeatable, tried in the given order
    #[arg(long = "strategy", value_parser = parse_strategy)]
    strategies: Vec<Strategy>,

    /// Print one JSON object per matching line
    #[arg(long)]
    json: bool,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    romafilter_cli::tracing::init_with_filter(&args.log_level);

    let mut config = match &args.config {
        Some(path) => FilterConfig::from_path(path)?,
        None => FilterConfig::default(),
    };
    if let Some(separator) = args.separator {
        config.separator = separator;
    }
    if args.no_capitalize {
        config.capitalize_first = false;
    }
    config.validate()?;

    let strategies = if args.strategies.is_empty() {
        DEFAULT_STRATEGIES.to_vec()
    } else {
        args.strategies
    };
    info!(
        "romafilter v{}: strategies {:?}, separator {:?}",
        env!("CARGO_PKG_VERSION"),
        strategies,
        config.separator
    );

    let filter = strategies
        .into_iter()
        .fold(OrFilter::pinyin(config), |filter, s| filter.with_matcher(s));

    let stdout = io::stdout();
    let matched = match args.file {
        Some(path) => filter_lines(
            &filter,
            &args.query,
            BufReader::new(File::open(path)?),
            stdout.lock(),
            args.json,
        )?,
        None => filter_lines(
            &filter,
            &args.query,
            io::stdin().lock(),
            stdout.lock(),
            args.json,
        )?,
    };

    info!("{} lines matched", matched);
    Ok(())
}
