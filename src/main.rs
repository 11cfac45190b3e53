//! # AgroPulse Media Watch
//!
//! A media-monitoring pipeline for the Agro en Punta agribusiness event and
//! the wider Mercosul beat. Each run pulls web news from Google News RSS and
//! the GDELT Doc 2.0 API, normalizes the messy bits (relative times,
//! tracking links, outlet names), folds everything through a deduplicating
//! JSON file cache, and emits one snapshot document combining the news with
//! simulated radio-listening and social-buzz feeds.
//!
//! ## Features
//!
//! - Fetches news for fixed agribusiness search terms from Google News and GDELT
//! - Falls back to a fixed mock news table when both sources come back empty
//! - Caches records by link with per-category retention (90 days for the
//!   event, 30 otherwise)
//! - Renders time labels in Portuguese or Rioplatense Spanish
//! - Writes JSON snapshot files per date and edition, or to stdout
//!
//! ## Usage
//!
//! ```sh
//! agropulse_media_watch -l pt-br -j ./json
//! ```
//!
//! ## Architecture
//!
//! The application follows a pipeline architecture:
//! 1. **Ingestion**: Query both live sources sequentially, one term at a time
//! 2. **Fallback**: Substitute the mock table when nothing came back
//! 3. **Caching**: Merge into the JSON cache, reload with retention applied
//! 4. **Simulation**: Generate the radio and social feeds
//! 5. **Output**: Assemble the snapshot and write it out

use chrono::Local;
use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cache;
mod cli;
mod fetchers;
mod mock;
mod models;
mod normalize;
mod orchestrator;
mod outputs;
mod radio;
mod social;
mod utils;

use cache::CacheStore;
use cli::Cli;
use models::MediaSnapshot;
use outputs::json;
use utils::{ensure_writable_dir, time_of_day};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("media_watch starting up");

    // Parse CLI
    let args = Cli::parse();
    debug!(?args.language, ?args.cache_file, ?args.json_output_dir, args.offline, "Parsed CLI arguments");

    // Early check: ensure the JSON output dir is writable before any network work
    if let Some(ref json_output_dir) = args.json_output_dir {
        if let Err(e) = ensure_writable_dir(json_output_dir).await {
            error!(
                path = %json_output_dir,
                error = %e,
                "JSON output directory is not writable (fix perms or choose a different path)"
            );
            return Err(e);
        }
    }

    // ---- Ingest news ----
    let store = CacheStore::new(&args.cache_file);
    let news = orchestrator::get_web_news(args.language, &store, args.offline).await;
    info!(
        count = news.len(),
        source = news.source_label(),
        "News ingestion completed"
    );

    // ---- Simulated feeds ----
    let radio = radio::simulate_listening(args.language);
    let sentiment = radio::sentiment_summary(&radio);
    let social_buzz = social::simulate_buzz();

    // ---- Assemble snapshot ----
    let local_date = Local::now().date_naive().to_string();
    let local_time = Local::now().time().to_string();
    let snapshot = MediaSnapshot {
        time_of_day: time_of_day(),
        local_time,
        local_date,
        language: args.language.label().to_string(),
        news_source: news.source_label().to_string(),
        news: news.into_records(),
        radio,
        social_buzz,
        sentiment,
    };
    info!(
        time_of_day = %snapshot.time_of_day,
        local_date = %snapshot.local_date,
        news = snapshot.news.len(),
        radio = snapshot.radio.len(),
        "Snapshot assembled"
    );

    // ---- Output ----
    match args.json_output_dir {
        Some(ref json_output_dir) => {
            if let Err(e) = json::write_snapshot(&snapshot, json_output_dir).await {
                error!(error = %e, "Failed to write snapshot JSON");
                return Err(e);
            }
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
