//! Page responses: the locale-aware renderer handed to handlers

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::api::state::AppState;
use crate::infrastructure::i18n::Locale;
use crate::infrastructure::view::{View, ViewRenderer};

use super::error::WebError;

/// What a controller decided to show
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Render a view with status 200
    Render(View),
    /// Redirect the browser (303 See Other)
    Redirect(&'static str),
}

/// Renderer bound to the locale resolved for the current request
#[derive(Debug, Clone)]
pub struct ViewContext {
    views: Arc<ViewRenderer>,
    locale: Locale,
}

impl ViewContext {
    pub fn new(views: Arc<ViewRenderer>, locale: Locale) -> Self {
        Self { views, locale }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Turn a controller outcome into an HTTP response
    pub fn respond(&self, outcome: Outcome) -> Result<Response, WebError> {
        match outcome {
            Outcome::Render(view) => {
                let html = self.views.render(&view, &self.locale)?;
                Ok(Html(html).into_response())
            }
            Outcome::Redirect(to) => Ok(Redirect::to(to).into_response()),
        }
    }
}

impl FromRequestParts<AppState> for ViewContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let locale = parts
            .extensions
            .get::<Locale>()
            .cloned()
            .unwrap_or_else(|| state.locale_resolver.default_locale().clone());

        Ok(Self::new(state.views.clone(), locale))
    }
}
