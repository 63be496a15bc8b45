//! Session locale resolution
//!
//! A `lang` query parameter switches the locale and is remembered in a cookie;
//! later requests without the parameter reuse the cookie.

use std::collections::HashMap;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue, Request, Uri,
    },
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::config::I18nSettings;
use crate::infrastructure::i18n::{I18nError, Locale};

/// Cookie holding the session locale
pub const LOCALE_COOKIE: &str = "lang";

/// Decides which locale a request is rendered in
#[derive(Debug, Clone)]
pub struct LocaleResolver {
    default_locale: Locale,
    param_name: String,
}

impl LocaleResolver {
    pub fn new(default_locale: Locale, param_name: impl Into<String>) -> Self {
        Self {
            default_locale,
            param_name: param_name.into(),
        }
    }

    pub fn from_settings(settings: &I18nSettings) -> Result<Self, I18nError> {
        let default_locale = Locale::parse(&settings.default_locale)
            .ok_or_else(|| I18nError::InvalidLocale(settings.default_locale.clone()))?;

        Ok(Self::new(default_locale, settings.param_name.as_str()))
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    pub fn param_name(&self) -> &str {
        &self.param_name
    }

    /// Locale explicitly requested through the query string
    pub fn requested(&self, uri: &Uri) -> Option<Locale> {
        let Query(params) = Query::<HashMap<String, String>>::try_from_uri(uri).ok()?;
        params.get(&self.param_name).and_then(|v| Locale::parse(v))
    }

    /// Locale remembered from an earlier switch
    pub fn remembered(&self, headers: &HeaderMap) -> Option<Locale> {
        cookie_value(headers, LOCALE_COOKIE).and_then(|v| Locale::parse(&v))
    }

    /// Query parameter first, then the cookie, then the default
    pub fn resolve(&self, uri: &Uri, headers: &HeaderMap) -> Locale {
        self.requested(uri)
            .or_else(|| self.remembered(headers))
            .unwrap_or_else(|| self.default_locale.clone())
    }
}

/// Resolve the locale, expose it to handlers and persist explicit switches
pub async fn locale_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let resolver = &state.locale_resolver;
    let requested = resolver.requested(request.uri());
    let locale = requested
        .clone()
        .or_else(|| resolver.remembered(request.headers()))
        .unwrap_or_else(|| resolver.default_locale().clone());

    request.extensions_mut().insert(locale);

    let mut response = next.run(request).await;

    if let Some(locale) = requested {
        debug!(
            locale = %locale,
            bundled = state.views.messages().supports(&locale),
            "Switching session locale"
        );
        let cookie = format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            LOCALE_COOKIE,
            locale.tag()
        );

        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(SET_COOKIE, value);
        }
    }

    response
}

fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
}
