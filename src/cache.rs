//! JSON file cache for news records, deduplicated by link.
//!
//! The cache is a single pretty-printed JSON document, `{"news": [...]}`,
//! shared across runs and languages. Records merge by link: a link already
//! on disk keeps its original `_cached_at` stamp forever, while title, time
//! label, and outlet are refreshed from the incoming record. Reads apply a
//! per-category retention window so stale entries age out without a
//! separate cleanup pass.
//!
//! Every operation degrades instead of failing: a missing or corrupt file
//! reads as empty, and a failed write is logged and swallowed so the
//! pipeline always produces output.

use crate::models::{AGRO_EN_PUNTA, NewsRecord, OTHER_CATEGORY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument, warn};

/// Retention window for records in the event category, in days.
const EVENT_RETENTION_DAYS: i64 = 90;
/// Retention window for everything else, in days.
const DEFAULT_RETENTION_DAYS: i64 = 30;

/// On-disk document shape.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CacheDocument {
    #[serde(default)]
    news: Vec<NewsRecord>,
}

/// Handle to the cache file. Cheap to construct; all I/O happens per call.
#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Merge a batch of records into the cache and persist it.
    ///
    /// Deduplication is by link, existing entries first in file order and
    /// new links appended in batch order. For a link already cached, the
    /// incoming record's display fields win but the original `_cached_at`
    /// stamp is kept. Records arriving without a category get one inferred
    /// from their title. Write failures are logged, never raised.
    #[instrument(level = "info", skip_all, fields(path = %self.path.display(), incoming = records.len()))]
    pub fn merge(&self, records: &[NewsRecord]) {
        let mut merged = self.read_document().news;
        let mut by_link: HashMap<String, usize> = merged
            .iter()
            .enumerate()
            .map(|(i, rec)| (rec.link.clone(), i))
            .collect();

        let now = Utc::now().to_rfc3339();
        for incoming in records {
            let mut record = incoming.clone();
            if record.category.is_none() {
                record.category = Some(infer_category(&record.title).to_string());
            }

            match by_link.get(&record.link) {
                Some(&i) => {
                    // First-insertion stamp survives every later merge.
                    record.cached_at = merged[i].cached_at.clone();
                    merged[i] = record;
                }
                None => {
                    if record.cached_at.is_none() {
                        record.cached_at = Some(now.clone());
                    }
                    by_link.insert(record.link.clone(), merged.len());
                    merged.push(record);
                }
            }
        }

        info!(total = merged.len(), "Merged records into cache");
        self.write_document(&CacheDocument { news: merged });
    }

    /// Load cached records, optionally dropping those past their retention
    /// window.
    ///
    /// The window is 90 days for the event category and 30 days otherwise,
    /// measured against `_cached_at`. A record with a missing or unparseable
    /// stamp counts as fresh.
    #[instrument(level = "debug", skip_all, fields(path = %self.path.display(), filter_by_retention))]
    pub fn load(&self, filter_by_retention: bool) -> Vec<NewsRecord> {
        let news = self.read_document().news;
        if !filter_by_retention {
            return news;
        }

        let now = Utc::now();
        news.into_iter()
            .filter(|rec| {
                let window = if rec.category.as_deref() == Some(AGRO_EN_PUNTA) {
                    EVENT_RETENTION_DAYS
                } else {
                    DEFAULT_RETENTION_DAYS
                };
                age_days(rec.cached_at.as_deref(), now) <= window
            })
            .collect()
    }

    fn read_document(&self) -> CacheDocument {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(error = %e, "Cache file not readable; starting empty");
                return CacheDocument::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(doc) => doc,
            Err(e) => {
                warn!(error = %e, "Cache file is corrupt; starting empty");
                CacheDocument::default()
            }
        }
    }

    fn write_document(&self, doc: &CacheDocument) {
        let json = match serde_json::to_string_pretty(doc) {
            Ok(json) => json,
            Err(e) => {
                error!(error = %e, "Failed to serialize cache document");
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, json) {
            error!(error = %e, "Failed to write cache file; continuing without persistence");
        }
    }
}

/// Days elapsed since an RFC 3339 stamp; unparseable input counts as zero.
fn age_days(cached_at: Option<&str>, now: DateTime<Utc>) -> i64 {
    cached_at
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|stamp| (now - stamp.with_timezone(&Utc)).num_days())
        .unwrap_or(0)
}

/// Infer a retention category from a record title.
fn infer_category(title: &str) -> &'static str {
    let lower = title.to_lowercase();
    if lower.contains("agro en punta")
        || lower.contains("punta del este")
        || lower.contains("evento em punta")
    {
        AGRO_EN_PUNTA
    } else {
        OTHER_CATEGORY
    }
}
