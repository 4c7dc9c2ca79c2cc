//! Crisis hotline registry: per-country lines and country-code resolution.
//!
//! The dataset lives in `config/hotlines.toml` and is compiled in by
//! `build.rs`, which rejects malformed entries. Everything here is a pure
//! lookup over that fixed table.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use thiserror::Error;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotline {
    pub id: &'static str,
    /// ISO 3166-1 alpha-2, uppercase.
    pub country_code: &'static str,
    /// Digits only, with an optional leading `+`.
    pub raw_number: &'static str,
    pub display_number: &'static str,
    pub name_key: &'static str,
    pub name_default: &'static str,
    pub source_url: Option<&'static str>,
    pub last_verified_at: Option<&'static str>,
}

include!(concat!(env!("OUT_DIR"), "/hotlines.rs"));

#[derive(Debug, Error)]
pub enum HotlineError {
    #[error("hotline {id} has no number")]
    EmptyNumber { id: String },
    #[error("hotline {id} has a non-dialable number '{number}'")]
    InvalidNumber { id: String, number: String },
    #[error("invalid tel URL: {0}")]
    Url(#[from] url::ParseError),
}

// Mirrors `is_dialable` in build.rs; kept for records built outside the registry.
static DIALABLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[0-9]+$").unwrap());

static FIND_A_HELPLINE: Lazy<Url> =
    Lazy::new(|| Url::parse("https://findahelpline.com").unwrap());

static SUPPORTED: Lazy<BTreeSet<&'static str>> =
    Lazy::new(|| HOTLINES.iter().map(|h| h.country_code).collect());

impl Hotline {
    /// `tel:` URL for the dialer. International numbers keep their `+`.
    pub fn dial_url(&self) -> Result<Url, HotlineError> {
        if self.raw_number.is_empty() {
            return Err(HotlineError::EmptyNumber {
                id: self.id.to_string(),
            });
        }
        if !DIALABLE.is_match(self.raw_number) {
            return Err(HotlineError::InvalidNumber {
                id: self.id.to_string(),
                number: self.raw_number.to_string(),
            });
        }
        Ok(Url::parse(&format!("tel:{}", self.raw_number))?)
    }

    pub fn flag(&self) -> Option<String> {
        flag_emoji(self.country_code)
    }
}

/// Trim and uppercase a country code; `None` when nothing is left.
pub fn normalize_country_code(code: Option<&str>) -> Option<String> {
    let trimmed = code?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_uppercase())
    }
}

/// The full registry in its natural order.
pub fn all_hotlines() -> &'static [Hotline] {
    HOTLINES
}

pub fn hotline_by_id(id: &str) -> Option<&'static Hotline> {
    HOTLINES.iter().find(|h| h.id == id)
}

/// Hotlines for `country_code`. Empty for a missing, blank or unknown code.
pub fn local_hotlines(country_code: Option<&str>) -> Vec<&'static Hotline> {
    let Some(code) = normalize_country_code(country_code) else {
        return Vec::new();
    };
    HOTLINES.iter().filter(|h| h.country_code == code).collect()
}

/// Hotlines outside `country_code`. The whole registry when the code is
/// missing, blank or unknown.
pub fn other_hotlines(country_code: Option<&str>) -> Vec<&'static Hotline> {
    match normalize_country_code(country_code) {
        Some(code) => HOTLINES.iter().filter(|h| h.country_code != code).collect(),
        None => HOTLINES.iter().collect(),
    }
}

/// Distinct country codes present in the registry.
pub fn supported_country_codes() -> &'static BTreeSet<&'static str> {
    &SUPPORTED
}

/// Pick the country whose hotlines should be shown.
///
/// A supported manual override wins. Otherwise the system locale's country
/// is returned as-is, even when the registry has no line for it, so the host
/// can fall back to [`find_a_helpline_url`].
pub fn resolved_country_code(
    override_code: Option<&str>,
    system_locale_country_code: Option<&str>,
) -> Option<String> {
    if let Some(code) = normalize_country_code(override_code) {
        if SUPPORTED.contains(code.as_str()) {
            return Some(code);
        }
        tracing::debug!(override_code = %code, "unsupported country override ignored");
    }
    system_locale_country_code.map(str::to_string)
}

/// Regional-indicator flag for a two-letter country code.
pub fn flag_emoji(country_code: &str) -> Option<String> {
    let code = country_code.trim();
    if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    code.to_ascii_uppercase()
        .chars()
        .map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
        .collect()
}

/// Global directory to send users to when no local line is known.
pub fn find_a_helpline_url() -> &'static Url {
    &FIND_A_HELPLINE
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_invariants() {
        let mut ids = HashSet::new();
        for h in all_hotlines() {
            assert!(ids.insert(h.id), "duplicate id {}", h.id);
            assert_eq!(h.country_code.len(), 2);
            assert!(h.country_code.bytes().all(|b| b.is_ascii_uppercase()));
            assert!(DIALABLE.is_match(h.raw_number), "{}", h.id);
            assert!(h.dial_url().is_ok(), "{}", h.id);
        }
    }

    #[test]
    fn test_local_hotlines() {
        let tr = local_hotlines(Some("tr"));
        assert!(!tr.is_empty());
        assert!(tr.iter().all(|h| h.country_code == "TR"));
        assert_eq!(local_hotlines(Some(" TR ")), tr);
    }

    #[test]
    fn test_local_hotlines_keep_dataset_order() {
        let ids: Vec<_> = local_hotlines(Some("TR")).iter().map(|h| h.id).collect();
        assert_eq!(ids, vec!["tr_182", "tr_112"]);
    }

    #[test]
    fn test_unknown_or_missing_code() {
        assert!(local_hotlines(Some("zz")).is_empty());
        assert!(local_hotlines(Some("")).is_empty());
        assert!(local_hotlines(None).is_empty());
        assert_eq!(other_hotlines(Some("zz")).len(), all_hotlines().len());
        assert_eq!(other_hotlines(Some("  ")).len(), all_hotlines().len());
        assert_eq!(other_hotlines(None).len(), all_hotlines().len());
    }

    #[test]
    fn test_other_hotlines_exclude_local() {
        let other = other_hotlines(Some("tr"));
        assert!(other.iter().all(|h| h.country_code != "TR"));
        assert_eq!(
            other.len() + local_hotlines(Some("tr")).len(),
            all_hotlines().len()
        );
    }

    #[test]
    fn test_resolved_country_code() {
        assert_eq!(
            resolved_country_code(Some("us"), Some("TR")),
            Some("US".to_string())
        );
        assert_eq!(
            resolved_country_code(Some("zz"), Some("GB")),
            Some("GB".to_string())
        );
        assert_eq!(resolved_country_code(Some(""), Some("GB")), Some("GB".to_string()));
        assert_eq!(resolved_country_code(None, None), None);
    }

    #[test]
    fn test_system_locale_is_not_validated() {
        assert_eq!(
            resolved_country_code(None, Some("ZZ")),
            Some("ZZ".to_string())
        );
        assert_eq!(resolved_country_code(Some("xx"), None), None);
    }

    #[test]
    fn test_supported_codes() {
        let codes = supported_country_codes();
        assert!(codes.contains("TR"));
        assert!(codes.contains("US"));
        assert!(!codes.contains("ZZ"));
        let distinct: HashSet<_> = all_hotlines().iter().map(|h| h.country_code).collect();
        assert_eq!(codes.len(), distinct.len());
    }

    #[test]
    fn test_international_number_keeps_plus() {
        let india = hotline_by_id("in_912227546669").unwrap();
        let url = india.dial_url().unwrap();
        assert_eq!(url.scheme(), "tel");
        assert!(url.as_str().contains("+912227546669"));
    }

    #[test]
    fn test_verification_metadata() {
        let tr_112 = hotline_by_id("tr_112").unwrap();
        assert!(tr_112.source_url.is_some());
        assert_eq!(tr_112.last_verified_at, Some("2026-02-26"));
        let india = hotline_by_id("in_912227546669").unwrap();
        assert!(india.source_url.is_some());
        assert_eq!(india.last_verified_at, Some("2026-02-26"));
    }

    #[test]
    fn test_verification_dates_are_calendar_dates() {
        for h in all_hotlines() {
            let Some(date) = h.last_verified_at else { continue };
            let parts: Vec<u32> = date.split('-').map(|p| p.parse().unwrap()).collect();
            assert_eq!(parts.len(), 3, "{}", h.id);
            assert!((1..=12).contains(&parts[1]), "{} month in {date}", h.id);
            assert!((1..=31).contains(&parts[2]), "{} day in {date}", h.id);
        }
    }

    #[test]
    fn test_dial_url_refuses_bad_numbers() {
        let mut broken = *hotline_by_id("us_988").unwrap();
        broken.raw_number = "";
        assert!(matches!(broken.dial_url(), Err(HotlineError::EmptyNumber { .. })));
        broken.raw_number = "98-8";
        assert!(matches!(broken.dial_url(), Err(HotlineError::InvalidNumber { .. })));
        broken.raw_number = "+";
        assert!(matches!(broken.dial_url(), Err(HotlineError::InvalidNumber { .. })));
    }

    #[test]
    fn test_flag_emoji() {
        assert_eq!(flag_emoji("tr").as_deref(), Some("🇹🇷"));
        assert_eq!(flag_emoji("US").as_deref(), Some("🇺🇸"));
        assert_eq!(flag_emoji("USA"), None);
        assert_eq!(flag_emoji("1A"), None);
        assert_eq!(hotline_by_id("gb_116123").unwrap().flag().as_deref(), Some("🇬🇧"));
    }

    #[test]
    fn test_find_a_helpline() {
        assert_eq!(find_a_helpline_url().host_str(), Some("findahelpline.com"));
    }
}
