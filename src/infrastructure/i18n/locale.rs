//! Locale identifiers

use once_cell::sync::Lazy;
use regex::Regex;

/// Accepts `lt`, `lt_LT`, `lt-LT` in any letter case
static LOCALE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zA-Z]{2,3})(?:[_-]([a-zA-Z]{2}))?$").unwrap());

/// Language with an optional country, normalized to `ll_CC` form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    language: String,
    country: Option<String>,
}

impl Locale {
    /// Parse a locale tag, returning `None` when it is malformed
    pub fn parse(tag: &str) -> Option<Self> {
        let caps = LOCALE_PATTERN.captures(tag.trim())?;

        Some(Self {
            language: caps.get(1)?.as_str().to_lowercase(),
            country: caps.get(2).map(|m| m.as_str().to_uppercase()),
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Normalized tag, e.g. `en_US`
    pub fn tag(&self) -> String {
        match &self.country {
            Some(country) => format!("{}_{}", self.language, country),
            None => self.language.clone(),
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            country: Some("US".to_string()),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}
