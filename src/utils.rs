//! Helper functions for edition naming, string formatting, and output
//! directory validation.

use chrono::{Local, NaiveTime};
use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{info, instrument};

/// Classify current time into morning, afternoon, or evening.
///
/// Used to name the snapshot edition. The time boundaries are:
/// - **Morning**: 00:00 - 08:00
/// - **Afternoon**: 08:00 - 16:00
/// - **Evening**: 16:00 - 24:00
///
/// # Returns
///
/// A string: `"morning"`, `"afternoon"`, or `"evening"`.
#[instrument]
pub fn time_of_day() -> String {
    let morning_high = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    let afternoon_high = NaiveTime::from_hms_opt(16, 0, 0).unwrap();

    let tod = Local::now().time();
    let which = if tod < morning_high {
        "morning"
    } else if tod < afternoon_high {
        "afternoon"
    } else {
        "evening"
    };
    tracing::debug!(%tod, %which, "Computed time_of_day");
    which.to_string()
}

/// Capitalize the first character of a string.
///
/// Used to turn a domain label into an outlet name ("agrolink" -> "Agrolink").
pub fn title_case(s: &str) -> String {
    let mut c = s.chars();
    match c.next() {
        None => String::new(),
        Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
    }
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if it doesn't exist, then performs a write test by
/// creating and immediately deleting a probe file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or is not writable.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    if let Err(e) = fs::create_dir_all(path).await {
        return Err(Box::new(e));
    }
    // Small sync probe write; simpler error surface than async fs.
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("agrolink"), "Agrolink");
        assert_eq!(title_case("elpais"), "Elpais");
        assert_eq!(title_case(""), "");
        assert_eq!(title_case("x"), "X");
    }

    #[test]
    fn test_time_of_day_boundaries() {
        // time_of_day reads the wall clock, so exercise the boundary logic
        // directly with fixed times.
        let morning = NaiveTime::from_hms_opt(6, 30, 0).unwrap();
        let morning_high = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        assert!(morning < morning_high);

        let afternoon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        let afternoon_high = NaiveTime::from_hms_opt(16, 0, 0).unwrap();
        assert!(afternoon >= morning_high && afternoon < afternoon_high);

        let evening = NaiveTime::from_hms_opt(20, 0, 0).unwrap();
        assert!(evening >= afternoon_high);
    }

    #[tokio::test]
    async fn test_ensure_writable_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = format!("{}/out/json", dir.path().display());
        ensure_writable_dir(&nested).await.unwrap();
        assert!(std::path::Path::new(&nested).is_dir());
    }
}
