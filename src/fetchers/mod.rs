//! Live news fetchers for the monitored search terms.
//!
//! Each fetcher queries one public endpoint once per search term, maps the
//! results into [`crate::models::NewsRecord`], and swallows per-term
//! failures: a term that errors out simply contributes zero records, and
//! neither fetcher ever returns an error to its caller.
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | Google News | [`google_news`] | RSS search | First 5 results per term |
//! | GDELT Doc 2.0 | [`gdelt`] | JSON API | 10s timeout, up to 20 per term |
//!
//! Requests run sequentially, one term at a time; the dashboard's refresh
//! cadence is slow enough that parallelism buys nothing here.

pub mod gdelt;
pub mod google_news;

/// Fixed search terms covering the event and its surrounding agribusiness
/// beat. Not caller-configurable.
pub const SEARCH_TERMS: [&str; 4] = [
    "Agro en Punta",
    "Agronegócio Uruguai",
    "Expoagro",
    "Agricultura Mercosul",
];
