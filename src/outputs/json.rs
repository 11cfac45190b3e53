//! JSON snapshot files for dashboard consumption.
//!
//! Each run writes one file per edition:
//! ```text
//! json_output_dir/
//! └── 2026-02-01/
//!     ├── morning.json
//!     ├── afternoon.json
//!     └── evening.json
//! ```

use crate::models::MediaSnapshot;
use std::error::Error;
use tokio::fs;
use tracing::{error, info, instrument};

/// Write a [`MediaSnapshot`] to a JSON file with date-based directory
/// structure.
///
/// The file path is determined by the snapshot's own date and edition:
/// `{json_output_dir}/{local_date}/{time_of_day}.json`. Re-running the same
/// edition overwrites the previous file.
///
/// # Errors
///
/// Returns an error if directory creation or file writing fails.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_snapshot(
    snapshot: &MediaSnapshot,
    json_output_dir: &str,
) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(snapshot)?;

    let full_json_dir = format!("{}/{}", json_output_dir, snapshot.local_date);
    info!(%full_json_dir, "Ensuring JSON directory exists");
    if let Err(e) = fs::create_dir_all(&full_json_dir).await {
        error!(%full_json_dir, error = %e, "Failed to create JSON dir");
        return Err(e.into());
    }

    let output_json_filename = format!("{}/{}.json", full_json_dir, snapshot.time_of_day);
    info!(path = %output_json_filename, "Writing JSON");
    fs::write(&output_json_filename, json).await?;
    info!(path = %output_json_filename, "Wrote snapshot file");

    Ok(())
}
