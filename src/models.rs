//! Data models for ingested news, simulated feeds, and the snapshot output.
//!
//! This module defines the core data structures used throughout the application:
//! - [`NewsRecord`]: A single web news item, live or mocked
//! - [`WebNews`]: Provenance wrapper distinguishing live data from mock fallback
//! - [`RadioMention`] / [`Sentiment`]: Simulated radio-listening feed entries
//! - [`SocialBuzz`]: Hourly social-platform mention volumes
//! - [`MediaSnapshot`]: The full document written to the JSON output
//!
//! News records serialize with fixed Portuguese field names (`Hora`, `Veículo`,
//! `Título`, `Link`, `Categoria`, `_cached_at`) regardless of the display
//! language, because the on-disk cache format predates the language toggle
//! and must stay readable across runs.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Reserved category driving the long (90-day) cache retention window.
/// Every other category value is retained for 30 days.
pub const AGRO_EN_PUNTA: &str = "Agro en Punta";

/// Category stamped on records whose title does not reference the event.
pub const OTHER_CATEGORY: &str = "Outros";

/// Display language for time labels and mock content.
///
/// Passed explicitly through every function that renders text; there is no
/// ambient language state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    /// Brazilian Portuguese ("Há 3 horas", "Agora").
    #[value(name = "pt-br")]
    PtBr,
    /// Rioplatense Spanish ("Hace 3 horas", "Ahora").
    #[value(name = "es-uy")]
    EsUy,
}

impl Language {
    /// Short identifier used in the snapshot document.
    pub fn label(&self) -> &'static str {
        match self {
            Language::PtBr => "pt-br",
            Language::EsUy => "es-uy",
        }
    }
}

/// A single web news item, either fetched from a live source or generated
/// by the mock fallback.
///
/// `time_label` is presentational text ("Há 2 horas"), not a timestamp:
/// the only machine-readable time on a record is `cached_at`, stamped by
/// the cache store at first insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsRecord {
    /// Human-relative publication time in the active display language.
    #[serde(rename = "Hora")]
    pub time_label: String,
    /// Originating outlet or domain.
    #[serde(rename = "Veículo")]
    pub source_name: String,
    /// Display title, never empty.
    #[serde(rename = "Título")]
    pub title: String,
    /// Absolute URL, or the sentinel `"#"` meaning "no usable link".
    #[serde(rename = "Link")]
    pub link: String,
    /// Retention category; `None` until the cache merge infers it from the title.
    #[serde(rename = "Categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// RFC 3339 first-insertion stamp; never reset by later merges.
    #[serde(rename = "_cached_at", default, skip_serializing_if = "Option::is_none")]
    pub cached_at: Option<String>,
}

/// News batch with explicit provenance: live fetch or mock fallback.
///
/// Callers (and tests) can tell degraded data apart from real ingestion
/// without relying on error signaling, which the pipeline deliberately
/// never produces.
#[derive(Debug, Clone)]
pub enum WebNews {
    /// Records fetched from the live endpoints.
    Live(Vec<NewsRecord>),
    /// Records synthesized by the mock fallback generator.
    Mock(Vec<NewsRecord>),
}

impl WebNews {
    pub fn records(&self) -> &[NewsRecord] {
        match self {
            WebNews::Live(records) | WebNews::Mock(records) => records,
        }
    }

    pub fn into_records(self) -> Vec<NewsRecord> {
        match self {
            WebNews::Live(records) | WebNews::Mock(records) => records,
        }
    }

    /// Replace the carried records, keeping the provenance variant.
    pub fn with_records(self, records: Vec<NewsRecord>) -> Self {
        match self {
            WebNews::Live(_) => WebNews::Live(records),
            WebNews::Mock(_) => WebNews::Mock(records),
        }
    }

    pub fn is_mock(&self) -> bool {
        matches!(self, WebNews::Mock(_))
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    /// Provenance marker written into the snapshot document.
    pub fn source_label(&self) -> &'static str {
        match self {
            WebNews::Live(_) => "live",
            WebNews::Mock(_) => "mock",
        }
    }
}

/// Sentiment classification for radio mentions.
///
/// Serialized labels match the dashboard's historical Portuguese values,
/// which are identical in Spanish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    #[serde(rename = "Positivo")]
    Positive,
    #[serde(rename = "Neutro")]
    Neutral,
    #[serde(rename = "Negativo")]
    Negative,
}

/// One simulated radio-listening transcript fragment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadioMention {
    /// Wall-clock label, `HH:MM:SS`.
    pub timestamp: String,
    /// Monitored station name.
    pub station: String,
    /// Transcript excerpt in the active display language.
    pub transcript: String,
    pub sentiment: Sentiment,
}

/// Simulated mention counts for one hour across the tracked platforms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialBuzz {
    /// Hour label, `HH:00`.
    pub hour: String,
    pub x: u32,
    pub instagram: u32,
    pub facebook: u32,
    pub threads: u32,
    pub linkedin: u32,
    pub tiktok: u32,
    pub total: u32,
}

/// Tally of radio mention sentiments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

/// The complete monitoring snapshot produced by one run.
///
/// Serialized to `{output_dir}/{local_date}/{time_of_day}.json`, or to
/// stdout when no output directory is configured.
#[derive(Debug, Serialize)]
pub struct MediaSnapshot {
    /// Date of generation in `YYYY-MM-DD` format.
    pub local_date: String,
    /// Edition name: "morning", "afternoon", or "evening".
    pub time_of_day: String,
    /// Exact local time of generation.
    pub local_time: String,
    /// Display language the snapshot was rendered in.
    pub language: String,
    /// `"live"` or `"mock"` depending on where the news came from.
    pub news_source: String,
    pub news: Vec<NewsRecord>,
    pub radio: Vec<RadioMention>,
    pub social_buzz: Vec<SocialBuzz>,
    pub sentiment: SentimentSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(link: &str) -> NewsRecord {
        NewsRecord {
            time_label: "Há 10 min".to_string(),
            source_name: "El Observador".to_string(),
            title: "Exportações batem recorde".to_string(),
            link: link.to_string(),
            category: None,
            cached_at: None,
        }
    }

    #[test]
    fn test_news_record_wire_keys() {
        let mut rec = record("https://www.elobservador.com.uy/economia");
        rec.category = Some(AGRO_EN_PUNTA.to_string());
        rec.cached_at = Some("2026-02-01T12:00:00+00:00".to_string());

        let json = serde_json::to_string(&rec).unwrap();
        for key in ["Hora", "Veículo", "Título", "Link", "Categoria", "_cached_at"] {
            assert!(json.contains(key), "missing wire key {key}");
        }
    }

    #[test]
    fn test_news_record_optional_fields_absent() {
        let json = serde_json::to_string(&record("#")).unwrap();
        assert!(!json.contains("Categoria"));
        assert!(!json.contains("_cached_at"));

        let parsed: NewsRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.category, None);
        assert_eq!(parsed.cached_at, None);
    }

    #[test]
    fn test_web_news_provenance() {
        let live = WebNews::Live(vec![record("https://a.com/x")]);
        assert!(!live.is_mock());
        assert_eq!(live.source_label(), "live");
        assert_eq!(live.len(), 1);

        let swapped = live.with_records(vec![]);
        assert!(swapped.is_empty());
        assert_eq!(swapped.source_label(), "live");

        let mock = WebNews::Mock(vec![]);
        assert!(mock.is_mock());
        assert_eq!(mock.source_label(), "mock");
    }

    #[test]
    fn test_sentiment_labels() {
        assert_eq!(
            serde_json::to_string(&Sentiment::Positive).unwrap(),
            "\"Positivo\""
        );
        assert_eq!(
            serde_json::to_string(&Sentiment::Negative).unwrap(),
            "\"Negativo\""
        );
    }
}
