//! GDELT Doc 2.0 API fetcher.
//!
//! Queries the public document search endpoint once per search term with a
//! source-language filter, taking everything the endpoint returns (capped
//! at 20 records per request). Unlike the RSS fetcher this one enforces an
//! explicit per-request timeout; GDELT is slow under load and a hung query
//! would stall the whole sequential pipeline.

use crate::fetchers::SEARCH_TERMS;
use crate::models::{Language, NewsRecord};
use crate::normalize::{normalize_relative_time, sanitize_link, vehicle_from_url};
use reqwest::Client;
use serde::Deserialize;
use std::error::Error;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

const ENDPOINT: &str = "https://api.gdeltproject.org/api/v2/doc/doc";
const MAX_RECORDS: usize = 20;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Source-language token for the GDELT `sourcelang:` query filter.
fn source_lang(lang: Language) -> &'static str {
    match lang {
        Language::PtBr => "portuguese",
        Language::EsUy => "spanish",
    }
}

#[derive(Debug, Deserialize)]
struct GdeltResponse {
    #[serde(default)]
    articles: Vec<GdeltArticle>,
}

#[derive(Debug, Deserialize)]
struct GdeltArticle {
    url: Option<String>,
    title: Option<String>,
    /// Fixed-width `YYYYMMDDHHMMSS` timestamp string.
    seendate: Option<String>,
    #[serde(rename = "sourceCommonName")]
    source_common_name: Option<String>,
}

/// Fetch event-index articles for every search term, sequentially.
///
/// A failed term (timeout, HTTP error, malformed JSON) is indistinguishable
/// from an empty result; the function never errors.
#[instrument(level = "info", skip_all, fields(?lang))]
pub async fn fetch_events(lang: Language) -> Vec<NewsRecord> {
    let client = match Client::builder().timeout(REQUEST_TIMEOUT).build() {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "Failed to build GDELT HTTP client");
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    for term in SEARCH_TERMS {
        match fetch_term(&client, term, lang).await {
            Ok(mut found) => {
                debug!(term, count = found.len(), "GDELT term fetched");
                records.append(&mut found);
            }
            Err(e) => {
                warn!(term, error = %e, "GDELT query failed; term contributes nothing");
            }
        }
    }
    info!(count = records.len(), "Fetched GDELT records");
    records
}

async fn fetch_term(
    client: &Client,
    term: &str,
    lang: Language,
) -> Result<Vec<NewsRecord>, Box<dyn Error>> {
    let query = format!("\"{term}\" sourcelang:{}", source_lang(lang));
    let url = format!(
        "{ENDPOINT}?query={}&mode=ArtList&maxrecords={MAX_RECORDS}&format=json",
        urlencoding::encode(&query)
    );

    let response: GdeltResponse = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(response
        .articles
        .into_iter()
        .filter_map(|article| article_to_record(article, lang))
        .collect())
}

/// Map one GDELT article into a [`NewsRecord`].
///
/// Articles without a URL or with a blank title are dropped. The outlet
/// name prefers `sourceCommonName`, falling back to the link's domain.
fn article_to_record(article: GdeltArticle, lang: Language) -> Option<NewsRecord> {
    let link = sanitize_link(&article.url?);
    let title = article.title?.trim().to_string();
    if title.is_empty() {
        return None;
    }

    let source_name = article
        .source_common_name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| vehicle_from_url(&link));

    let time_label = normalize_relative_time(article.seendate.as_deref().unwrap_or(""), lang);

    Some(NewsRecord {
        time_label,
        source_name,
        title,
        link,
        category: None,
        cached_at: None,
    })
}
