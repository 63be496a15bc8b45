//! Message bundles and lookup

use std::collections::HashMap;

use thiserror::Error;

use super::locale::Locale;

const BUNDLE_EN: &str = include_str!("../../../i18n/messages_en.toml");
const BUNDLE_LT: &str = include_str!("../../../i18n/messages_lt.toml");

/// Message bundle errors
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Invalid message bundle '{locale}': {message}")]
    InvalidBundle { locale: String, message: String },

    #[error("Invalid locale: {0}")]
    InvalidLocale(String),
}

/// Localized message lookup with fallback to the default locale
#[derive(Debug, Clone)]
pub struct MessageSource {
    bundles: HashMap<String, HashMap<String, String>>,
    default_locale: Locale,
}

impl MessageSource {
    /// Create an empty message source
    pub fn new(default_locale: Locale) -> Self {
        Self {
            bundles: HashMap::new(),
            default_locale,
        }
    }

    /// Load the bundles shipped with the application
    pub fn embedded(default_locale: Locale) -> Result<Self, I18nError> {
        Self::new(default_locale)
            .with_bundle("en", BUNDLE_EN)?
            .with_bundle("lt", BUNDLE_LT)
    }

    /// Register a bundle parsed from a flat `key = "text"` TOML table
    pub fn with_bundle(mut self, tag: &str, source: &str) -> Result<Self, I18nError> {
        let locale = Locale::parse(tag).ok_or_else(|| I18nError::InvalidLocale(tag.to_string()))?;

        let messages: HashMap<String, String> =
            toml::from_str(source).map_err(|e| I18nError::InvalidBundle {
                locale: tag.to_string(),
                message: e.to_string(),
            })?;

        self.bundles.insert(locale.tag(), messages);
        Ok(self)
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Whether any bundle exists for the locale or its language
    pub fn supports(&self, locale: &Locale) -> bool {
        self.bundles.contains_key(&locale.tag()) || self.bundles.contains_key(locale.language())
    }

    /// Bundle tags consulted for `locale`, most specific first
    fn lookup_order(&self, locale: &Locale) -> [String; 4] {
        [
            locale.tag(),
            locale.language().to_string(),
            self.default_locale.tag(),
            self.default_locale.language().to_string(),
        ]
    }

    /// Look up a raw message.
    ///
    /// Order: exact locale, its language, the default locale, the default
    /// language.
    pub fn resolve(&self, locale: &Locale, key: &str) -> Option<&str> {
        self.lookup_order(locale)
            .iter()
            .filter_map(|tag| self.bundles.get(tag))
            .find_map(|bundle| bundle.get(key))
            .map(String::as_str)
    }

    /// Every message visible in `locale`, merged in the same order as
    /// [`MessageSource::resolve`]
    pub fn bundle(&self, locale: &Locale) -> HashMap<&str, &str> {
        let mut merged = HashMap::new();

        for tag in self.lookup_order(locale).iter().rev() {
            if let Some(bundle) = self.bundles.get(tag) {
                merged.extend(bundle.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            }
        }

        merged
    }

    /// Format a message, substituting `{0}`, `{1}`, ... with `args`.
    ///
    /// Unknown keys render as the key itself.
    pub fn message(&self, locale: &Locale, key: &str, args: &[String]) -> String {
        let mut text = self.resolve(locale, key).unwrap_or(key).to_string();

        for (i, arg) in args.iter().enumerate() {
            text = text.replace(&format!("{{{}}}", i), arg);
        }

        text
    }
}
