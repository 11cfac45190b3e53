//! Command-line interface definitions for AgroPulse Media Watch.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! All arguments can be provided via command-line flags or environment variables.

use crate::models::Language;
use clap::Parser;

/// Command-line arguments for the AgroPulse Media Watch application.
///
/// # Examples
///
/// ```sh
/// # Default run: Portuguese labels, cache beside the binary, snapshot to stdout
/// agropulse_media_watch
///
/// # Spanish labels, snapshot files under ./json
/// agropulse_media_watch -l es-uy -j ./json
///
/// # Skip the network entirely (mock fallback + cache only)
/// agropulse_media_watch --offline
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Display language for time labels and simulated content
    #[arg(short, long, value_enum, default_value = "pt-br")]
    pub language: Language,

    /// Path to the news cache file
    #[arg(short, long, env = "AGROPULSE_CACHE_FILE", default_value = "media_cache.json")]
    pub cache_file: String,

    /// Output directory for snapshot JSON files; stdout when omitted
    #[arg(short, long)]
    pub json_output_dir: Option<String>,

    /// Skip the live fetchers and run from mock data and cache only
    #[arg(long)]
    pub offline: bool,
}
