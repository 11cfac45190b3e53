//! Text normalization for dates, links, and outlet names.
//!
//! Upstream sources return messy presentational data: Google News emits
//! relative-time phrases with a clipped "ago" prefix ("á 3 horas"), GDELT
//! emits fixed-width `YYYYMMDDHHMMSS` timestamps, and both hand out links
//! with tracking parameters or relative paths. This module cleans all of
//! that into display-ready strings.
//!
//! Every function here is pure given its inputs and the current wall clock;
//! nothing raises, bad input degrades to a sentinel or a "now" label.

use crate::models::Language;
use crate::utils::title_case;
use chrono::{Duration, Local, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Placeholder outlet name when the domain cannot be extracted.
pub const UNKNOWN_SOURCE: &str = "Fonte desconhecida";

/// Known tracking-parameter markers; everything from the first occurrence
/// onward is stripped before link validation.
const TRACKING_MARKERS: [&str; 3] = ["?utm_", "&utm_", "?ved="];

/// Host used to absolutize relative links coming out of the news search.
const NEWS_HOST: &str = "https://news.google.com";

/// Malformed or foreign-language "ago" prefixes seen in source feeds.
static AGO_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:Hace|Há|Ha|ha|á|a)\s+").unwrap());

/// Spelled-out minute units, shortened for narrow table columns.
static MINUTE_UNIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bminutos?\b").unwrap());

fn ago_marker(lang: Language) -> &'static str {
    match lang {
        Language::PtBr => "Há ",
        Language::EsUy => "Hace ",
    }
}

/// The "just now" label for the given language.
pub fn now_label(lang: Language) -> String {
    match lang {
        Language::PtBr => "Agora".to_string(),
        Language::EsUy => "Ahora".to_string(),
    }
}

/// Render a time delta as a relative phrase, largest non-zero unit only.
///
/// Days win over hours, hours over minutes; anything under a minute (or a
/// negative delta) becomes the "now" label.
pub fn relative_label(delta: Duration, lang: Language) -> String {
    let days = delta.num_days();
    let secs = delta.num_seconds();
    let marker = ago_marker(lang).trim_end();

    if days > 0 {
        let unit = match (lang, days) {
            (Language::PtBr, 1) => "dia",
            (Language::PtBr, _) => "dias",
            (Language::EsUy, 1) => "día",
            (Language::EsUy, _) => "días",
        };
        format!("{marker} {days} {unit}")
    } else if secs >= 3600 {
        let hours = secs / 3600;
        let unit = if hours == 1 { "hora" } else { "horas" };
        format!("{marker} {hours} {unit}")
    } else if secs >= 60 {
        format!("{marker} {} min", secs / 60)
    } else {
        now_label(lang)
    }
}

/// Normalize a publication-time string from an external source.
///
/// Two input shapes are handled:
/// - A GDELT-style `YYYYMMDDHHMMSS` timestamp (all digits): parsed as a
///   naive local time and rendered relative to now via [`relative_label`].
///   All-digit input that is the wrong length or an invalid date yields
///   the "now" label rather than failing.
/// - Free text ("á 3 horas", "a 10 minutos"): the clipped "ago" prefix is
///   corrected to the canonical marker for `lang` and minute units are
///   abbreviated.
///
/// Empty input yields the current `HH:MM` clock label.
pub fn normalize_relative_time(raw: &str, lang: Language) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return Local::now().format("%H:%M").to_string();
    }

    if raw.bytes().all(|b| b.is_ascii_digit()) {
        let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y%m%d%H%M%S") else {
            return now_label(lang);
        };
        return relative_label(Local::now().naive_local() - parsed, lang);
    }

    let fixed = AGO_PREFIX.replace(raw, ago_marker(lang));
    MINUTE_UNIT.replace_all(&fixed, "min").into_owned()
}

/// Clean a link from an external source into an absolute URL, or the
/// sentinel `"#"` when nothing usable remains.
///
/// Tracking fragments are stripped first, then:
/// - absolute `http(s)` URLs pass through,
/// - `./`-relative and `/`-rooted paths are absolutized under the news host,
/// - bare domain-like strings get an `https://` prefix,
/// - everything else becomes `"#"`.
///
/// Applying the function twice yields the same result as once.
pub fn sanitize_link(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut cut = trimmed.len();
    for marker in TRACKING_MARKERS {
        if let Some(pos) = trimmed.find(marker) {
            cut = cut.min(pos);
        }
    }
    let link = &trimmed[..cut];

    if link.is_empty() || link == "#" {
        return "#".to_string();
    }
    if link.starts_with("http://") || link.starts_with("https://") {
        return link.to_string();
    }
    if link.starts_with("./") || link.starts_with('/') {
        let path = link.trim_start_matches('.');
        return format!("{NEWS_HOST}{path}");
    }
    if link.contains('.') && !link.contains(char::is_whitespace) && !link.contains(':') {
        return format!("https://{link}");
    }
    "#".to_string()
}

/// Extract a displayable outlet name from a URL.
///
/// Takes the first label of the host with scheme and `www.` stripped, then
/// title-cases it: `https://www.agrolink.com.br/...` -> `Agrolink`.
/// Returns [`UNKNOWN_SOURCE`] when the URL has no usable host.
pub fn vehicle_from_url(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return UNKNOWN_SOURCE.to_string();
    };
    let Some(host) = parsed.host_str() else {
        return UNKNOWN_SOURCE.to_string();
    };
    let host = host.strip_prefix("www.").unwrap_or(host);
    match host.split('.').next() {
        Some(label) if !label.is_empty() => title_case(label),
        _ => UNKNOWN_SOURCE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn seendate(delta: Duration) -> String {
        (Local::now().naive_local() - delta)
            .format("%Y%m%d%H%M%S")
            .to_string()
    }

    #[test]
    fn test_prefix_correction_pt() {
        assert_eq!(
            normalize_relative_time("á 3 horas", Language::PtBr),
            "Há 3 horas"
        );
        assert_eq!(
            normalize_relative_time("a 10 minutos", Language::PtBr),
            "Há 10 min"
        );
        assert_eq!(
            normalize_relative_time("Ha 2 horas", Language::PtBr),
            "Há 2 horas"
        );
    }

    #[test]
    fn test_prefix_correction_es() {
        assert_eq!(
            normalize_relative_time("á 3 horas", Language::EsUy),
            "Hace 3 horas"
        );
        assert_eq!(
            normalize_relative_time("Há 5 minutos", Language::EsUy),
            "Hace 5 min"
        );
    }

    #[test]
    fn test_seendate_days() {
        let raw = seendate(Duration::days(3) + Duration::minutes(5));
        assert_eq!(normalize_relative_time(&raw, Language::PtBr), "Há 3 dias");
        assert_eq!(normalize_relative_time(&raw, Language::EsUy), "Hace 3 días");
    }

    #[test]
    fn test_seendate_single_day() {
        let raw = seendate(Duration::days(1) + Duration::hours(2));
        assert_eq!(normalize_relative_time(&raw, Language::PtBr), "Há 1 dia");
        assert_eq!(normalize_relative_time(&raw, Language::EsUy), "Hace 1 día");
    }

    #[test]
    fn test_seendate_hours() {
        let raw = seendate(Duration::hours(5) + Duration::minutes(1));
        assert_eq!(normalize_relative_time(&raw, Language::PtBr), "Há 5 horas");
    }

    #[test]
    fn test_seendate_minutes() {
        let raw = seendate(Duration::minutes(12) + Duration::seconds(5));
        assert_eq!(normalize_relative_time(&raw, Language::PtBr), "Há 12 min");
    }

    #[test]
    fn test_seendate_now() {
        let raw = seendate(Duration::seconds(30));
        assert_eq!(normalize_relative_time(&raw, Language::PtBr), "Agora");
        assert_eq!(normalize_relative_time(&raw, Language::EsUy), "Ahora");
    }

    #[test]
    fn test_seendate_malformed() {
        // All-digit but wrong length or impossible date degrades to "now".
        assert_eq!(normalize_relative_time("2026", Language::PtBr), "Agora");
        assert_eq!(
            normalize_relative_time("20269999123456", Language::PtBr),
            "Agora"
        );
    }

    #[test]
    fn test_empty_input_yields_clock_label() {
        let label = normalize_relative_time("", Language::PtBr);
        assert_eq!(label.len(), 5);
        assert_eq!(label.as_bytes()[2], b':');
    }

    #[test]
    fn test_sanitize_strips_tracking() {
        assert_eq!(
            sanitize_link("https://x.com/a?utm_source=feed&utm_medium=rss"),
            "https://x.com/a"
        );
        assert_eq!(
            sanitize_link("https://x.com/a?id=1&utm_campaign=z"),
            "https://x.com/a?id=1"
        );
        assert_eq!(sanitize_link("https://x.com/a?ved=2ahUKE"), "https://x.com/a");
    }

    #[test]
    fn test_sanitize_absolutizes_relative() {
        assert_eq!(
            sanitize_link("./read/CBMiabc"),
            "https://news.google.com/read/CBMiabc"
        );
        assert_eq!(
            sanitize_link("/articles/xyz"),
            "https://news.google.com/articles/xyz"
        );
    }

    #[test]
    fn test_sanitize_bare_domain() {
        assert_eq!(sanitize_link("agrolink.com.br"), "https://agrolink.com.br");
    }

    #[test]
    fn test_sanitize_rejects_unusable() {
        assert_eq!(sanitize_link(""), "#");
        assert_eq!(sanitize_link("javascript:void(0)"), "#");
        assert_eq!(sanitize_link("not a link"), "#");
        assert_eq!(sanitize_link("#"), "#");
    }

    #[test]
    fn test_sanitize_idempotent() {
        for raw in [
            "https://x.com/a?utm_source=feed",
            "./read/CBMiabc",
            "agrolink.com.br",
            "javascript:void(0)",
            "",
            "https://valor.globo.com/agronegocios",
        ] {
            let once = sanitize_link(raw);
            assert_eq!(sanitize_link(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_vehicle_from_url() {
        assert_eq!(
            vehicle_from_url("https://www.agrolink.com.br/noticias/x"),
            "Agrolink"
        );
        assert_eq!(vehicle_from_url("https://valor.globo.com/agro"), "Valor");
        assert_eq!(
            vehicle_from_url("https://www.elpais.com.uy/agro"),
            "Elpais"
        );
    }

    #[test]
    fn test_vehicle_from_url_unusable() {
        assert_eq!(vehicle_from_url("#"), UNKNOWN_SOURCE);
        assert_eq!(vehicle_from_url(""), UNKNOWN_SOURCE);
        assert_eq!(vehicle_from_url("not a url"), UNKNOWN_SOURCE);
    }
}
