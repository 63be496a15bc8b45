//! Replaces failed responses with the localized error view

use axum::{
    body::Body,
    extract::State,
    http::{header::CONTENT_LENGTH, Request},
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use tracing::warn;

use crate::api::state::AppState;
use crate::api::types::ErrorPage;
use crate::infrastructure::i18n::Locale;
use crate::infrastructure::view::View;

/// Render the `error` view for any response produced from a `WebError`.
///
/// The status code is kept. Must run inside the locale middleware so the page
/// uses the request's locale.
pub async fn error_page_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let locale = request
        .extensions()
        .get::<Locale>()
        .cloned()
        .unwrap_or_else(|| state.locale_resolver.default_locale().clone());

    let response = next.run(request).await;

    if response.extensions().get::<ErrorPage>().is_none() {
        return response;
    }

    match state.views.render(&View::Error, &locale) {
        Ok(html) => {
            let (mut parts, _) = response.into_parts();
            parts.headers.remove(CONTENT_LENGTH);
            (parts, Html(html)).into_response()
        }
        Err(e) => {
            warn!(error = %e, "Failed to render error page");
            response
        }
    }
}
