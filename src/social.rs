//! Simulated hourly social-platform mention volumes.
//!
//! Produces one row per hour of the day, with per-platform base volumes
//! scaled by a time-of-day activity factor: mornings and evenings are busy,
//! the 14:00-18:00 band (the event's main program) peaks, and the small
//! hours go quiet.

use crate::models::SocialBuzz;
use rand::{Rng, rng};
use tracing::{info, instrument};

/// Activity multiplier by local hour.
fn activity_factor(hour: u32) -> f64 {
    match hour {
        8..=12 => 1.5,
        14..=18 => 2.0,
        19..=22 => 1.2,
        _ => 0.4,
    }
}

fn scaled(rng: &mut impl Rng, low: u32, high: u32, factor: f64) -> u32 {
    (rng.random_range(low..=high) as f64 * factor) as u32
}

/// Generate the 24-row hourly buzz table.
#[instrument(level = "info")]
pub fn simulate_buzz() -> Vec<SocialBuzz> {
    let mut rng = rng();
    let rows: Vec<SocialBuzz> = (0..24)
        .map(|hour| {
            let factor = activity_factor(hour);
            let x = scaled(&mut rng, 120, 280, factor);
            let instagram = scaled(&mut rng, 80, 180, factor);
            let facebook = scaled(&mut rng, 60, 150, factor);
            let threads = scaled(&mut rng, 30, 90, factor);
            let linkedin = scaled(&mut rng, 40, 100, factor);
            let tiktok = scaled(&mut rng, 50, 130, factor);
            SocialBuzz {
                hour: format!("{hour:02}:00"),
                x,
                instagram,
                facebook,
                threads,
                linkedin,
                tiktok,
                total: x + instagram + facebook + threads + linkedin + tiktok,
            }
        })
        .collect();
    info!(rows = rows.len(), "Generated social buzz table");
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buzz_covers_every_hour() {
        let rows = simulate_buzz();
        assert_eq!(rows.len(), 24);
        assert_eq!(rows[0].hour, "00:00");
        assert_eq!(rows[23].hour, "23:00");
    }

    #[test]
    fn test_totals_add_up() {
        for row in simulate_buzz() {
            assert_eq!(
                row.total,
                row.x + row.instagram + row.facebook + row.threads + row.linkedin + row.tiktok
            );
        }
    }

    #[test]
    fn test_activity_factor_bands() {
        assert_eq!(activity_factor(3), 0.4);
        assert_eq!(activity_factor(10), 1.5);
        assert_eq!(activity_factor(13), 0.4);
        assert_eq!(activity_factor(16), 2.0);
        assert_eq!(activity_factor(21), 1.2);
        assert_eq!(activity_factor(23), 0.4);
    }

    #[test]
    fn test_peak_hours_outdraw_night() {
        let rows = simulate_buzz();
        let night = &rows[3];
        let peak = &rows[16];
        // Worst-case peak row (all minimums at 2.0) still beats the
        // best-case night row (all maximums at 0.4).
        assert!(peak.total > night.total);
    }
}
