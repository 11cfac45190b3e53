//! Google News RSS search fetcher.
//!
//! Queries `https://news.google.com/rss/search` once per search term with
//! locale parameters derived from the display language, and keeps the first
//! 5 items of each feed. Google appends the outlet to item titles as
//! `"Title - Outlet"` and ships a dedicated `<source>` element; both are
//! used to recover the vehicle name.

use crate::fetchers::SEARCH_TERMS;
use crate::models::{Language, NewsRecord};
use crate::normalize::{now_label, relative_label, sanitize_link, vehicle_from_url};
use chrono::{DateTime, Utc};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::error::Error;
use tracing::{debug, info, instrument, warn};

/// Per-term result cap; the feed itself returns up to 100 items.
const MAX_PER_TERM: usize = 5;

const RSS_SEARCH_URL: &str = "https://news.google.com/rss/search";

/// `(hl, gl, ceid)` locale parameters for the RSS search endpoint.
fn locale_params(lang: Language) -> (&'static str, &'static str, &'static str) {
    match lang {
        Language::PtBr => ("pt-BR", "BR", "BR:pt-419"),
        Language::EsUy => ("es-419", "UY", "UY:es-419"),
    }
}

/// Fetch news for every search term, sequentially.
///
/// Failed terms are logged and skipped; the returned vector may be empty
/// but the function never errors.
#[instrument(level = "info", skip_all, fields(?lang))]
pub async fn fetch_news(lang: Language) -> Vec<NewsRecord> {
    let mut records = Vec::new();
    for term in SEARCH_TERMS {
        match fetch_term(term, lang).await {
            Ok(mut found) => {
                debug!(term, count = found.len(), "Google News term fetched");
                records.append(&mut found);
            }
            Err(e) => {
                warn!(term, error = %e, "Google News query failed; term contributes nothing");
            }
        }
    }
    info!(count = records.len(), "Fetched Google News records");
    records
}

async fn fetch_term(term: &str, lang: Language) -> Result<Vec<NewsRecord>, Box<dyn Error>> {
    let (hl, gl, ceid) = locale_params(lang);
    let url = format!(
        "{RSS_SEARCH_URL}?q={}&hl={hl}&gl={gl}&ceid={ceid}",
        urlencoding::encode(term)
    );

    let body = reqwest::get(&url).await?.error_for_status()?.text().await?;
    let items = parse_rss_items(&body)?;

    Ok(items
        .into_iter()
        .take(MAX_PER_TERM)
        .filter_map(|item| item_to_record(item, lang))
        .collect())
}

/// Fields of an RSS `<item>` this fetcher cares about.
#[derive(Debug, Default, PartialEq)]
struct RssItem {
    title: String,
    link: String,
    pub_date: String,
    source: String,
}

#[derive(Debug, Clone, Copy)]
enum ItemField {
    Title,
    Link,
    PubDate,
    Source,
}

/// Pull `<item>` entries out of an RSS 2.0 document.
///
/// Only the four fields used downstream are collected; everything else in
/// the channel is skipped. Text and CDATA payloads are both handled since
/// Google wraps some titles in CDATA.
fn parse_rss_items(xml: &str) -> Result<Vec<RssItem>, Box<dyn Error>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut current: Option<RssItem> = None;
    let mut field: Option<ItemField> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                field = None;
                match e.name().as_ref() {
                    b"item" => current = Some(RssItem::default()),
                    b"title" if current.is_some() => field = Some(ItemField::Title),
                    b"link" if current.is_some() => field = Some(ItemField::Link),
                    b"pubDate" if current.is_some() => field = Some(ItemField::PubDate),
                    b"source" if current.is_some() => field = Some(ItemField::Source),
                    _ => {}
                }
            }
            Event::End(e) => {
                if e.name().as_ref() == b"item" {
                    if let Some(item) = current.take() {
                        items.push(item);
                    }
                }
                field = None;
            }
            Event::Text(t) => {
                let text = t.xml_content()?.into_owned();
                append_field(&mut current, field, &text);
            }
            Event::CData(t) => {
                let bytes = t.into_inner();
                let text = String::from_utf8_lossy(&bytes);
                append_field(&mut current, field, &text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(items)
}

fn append_field(current: &mut Option<RssItem>, field: Option<ItemField>, text: &str) {
    let (Some(item), Some(field)) = (current.as_mut(), field) else {
        return;
    };
    let slot = match field {
        ItemField::Title => &mut item.title,
        ItemField::Link => &mut item.link,
        ItemField::PubDate => &mut item.pub_date,
        ItemField::Source => &mut item.source,
    };
    slot.push_str(text);
}

/// Map one RSS item into a [`NewsRecord`].
///
/// Items without a title are dropped. The outlet comes from the `<source>`
/// element when present, else from the `"Title - Outlet"` suffix, else
/// from the link's domain.
fn item_to_record(item: RssItem, lang: Language) -> Option<NewsRecord> {
    let link = sanitize_link(&item.link);

    let (bare_title, title_source) = split_title_source(&item.title);
    if bare_title.is_empty() {
        return None;
    }

    let source_name = if !item.source.trim().is_empty() {
        item.source.trim().to_string()
    } else if let Some(source) = title_source {
        source
    } else {
        vehicle_from_url(&link)
    };

    let time_label = DateTime::parse_from_rfc2822(item.pub_date.trim())
        .map(|published| relative_label(Utc::now() - published.with_timezone(&Utc), lang))
        .unwrap_or_else(|_| now_label(lang));

    Some(NewsRecord {
        time_label,
        source_name,
        title: bare_title,
        link,
        category: None,
        cached_at: None,
    })
}

/// Split Google's `"Title - Outlet"` convention. Returns the bare title and
/// the outlet when the separator is present.
fn split_title_source(title: &str) -> (String, Option<String>) {
    match title.rfind(" - ") {
        Some(pos) if pos > 0 && pos + 3 < title.len() => (
            title[..pos].trim().to_string(),
            Some(title[pos + 3..].trim().to_string()),
        ),
        _ => (title.trim().to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0"><channel>
  <title>"Agro en Punta" - Google News</title>
  <item>
    <title>Agro en Punta 2026 abre credenciamento - El Observador</title>
    <link>https://www.elobservador.com.uy/agro/nota?utm_source=rss</link>
    <pubDate>Fri, 21 Aug 2026 14:00:00 GMT</pubDate>
    <source url="https://www.elobservador.com.uy">El Observador</source>
  </item>
  <item>
    <title><![CDATA[Safra recorde no Mercosul - Canal Rural]]></title>
    <link>./read/CBMiabc</link>
    <pubDate>not a date</pubDate>
  </item>
  <item>
    <title></title>
    <link>https://example.com/empty</link>
  </item>
</channel></rss>"#;

    #[test]
    fn test_parse_rss_items() {
        let items = parse_rss_items(FEED).unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(
            items[0].title,
            "Agro en Punta 2026 abre credenciamento - El Observador"
        );
        assert_eq!(items[0].source, "El Observador");
        assert_eq!(items[0].pub_date, "Fri, 21 Aug 2026 14:00:00 GMT");
        assert_eq!(items[1].title, "Safra recorde no Mercosul - Canal Rural");
        assert_eq!(items[1].link, "./read/CBMiabc");
    }

    #[test]
    fn test_item_to_record_full() {
        let items = parse_rss_items(FEED).unwrap();
        let record = item_to_record(items.into_iter().next().unwrap(), Language::PtBr).unwrap();
        assert_eq!(record.title, "Agro en Punta 2026 abre credenciamento");
        assert_eq!(record.source_name, "El Observador");
        assert_eq!(record.link, "https://www.elobservador.com.uy/agro/nota");
        assert_eq!(record.category, None);
        assert_eq!(record.cached_at, None);
        assert!(record.time_label.starts_with("Há") || record.time_label == "Agora");
    }

    #[test]
    fn test_item_to_record_cdata_and_bad_date() {
        let items = parse_rss_items(FEED).unwrap();
        let record = item_to_record(items.into_iter().nth(1).unwrap(), Language::EsUy).unwrap();
        assert_eq!(record.title, "Safra recorde no Mercosul");
        assert_eq!(record.source_name, "Canal Rural");
        assert_eq!(record.link, "https://news.google.com/read/CBMiabc");
        // Unparseable pubDate degrades to the "now" label.
        assert_eq!(record.time_label, "Ahora");
    }

    #[test]
    fn test_item_without_title_is_dropped() {
        let items = parse_rss_items(FEED).unwrap();
        assert!(item_to_record(items.into_iter().nth(2).unwrap(), Language::PtBr).is_none());
    }

    #[test]
    fn test_split_title_source() {
        let (title, source) = split_title_source("Preço da soja sobe - Valor Econômico");
        assert_eq!(title, "Preço da soja sobe");
        assert_eq!(source.as_deref(), Some("Valor Econômico"));

        let (title, source) = split_title_source("Sem separador");
        assert_eq!(title, "Sem separador");
        assert_eq!(source, None);
    }

    #[test]
    fn test_locale_params() {
        assert_eq!(locale_params(Language::PtBr), ("pt-BR", "BR", "BR:pt-419"));
        assert_eq!(locale_params(Language::EsUy), ("es-419", "UY", "UY:es-419"));
    }
}
