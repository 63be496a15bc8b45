//! Request/response logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::MatchedPath,
    http::{HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::info;

/// Header carrying the request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Log every request and its outcome.
///
/// Span creation is left to `TraceLayer`; this only emits events. The request
/// id is echoed back so browser-side reports can be correlated with the log.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = extract_path(&request);
    let request_id = extract_request_id(&request);
    let headers_log = redact_headers(&request);

    info!(
        method = %method,
        path = %path,
        request_id = %request_id,
        headers = %headers_log,
        "Incoming request"
    );

    let mut response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    info!(
        method = %method,
        path = %path,
        status = %status.as_u16(),
        duration_ms = %duration.as_millis(),
        request_id = %request_id,
        "Request completed"
    );

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

fn extract_path(request: &Request<Body>) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string())
}

fn extract_request_id(request: &Request<Body>) -> String {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

fn redact_headers(request: &Request<Body>) -> String {
    request
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            let name = name.as_str().to_lowercase();
            if !should_log_header(&name) {
                return None;
            }

            let value = if is_sensitive_header(&name) {
                "[REDACTED]"
            } else {
                value.to_str().unwrap_or("[invalid]")
            };

            Some(format!("{}={}", name, value))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_sensitive_header(name: &str) -> bool {
    matches!(
        name,
        "authorization" | "cookie" | "set-cookie" | "proxy-authorization"
    )
}

fn should_log_header(name: &str) -> bool {
    matches!(
        name,
        "content-type"
            | "content-length"
            | "accept"
            | "accept-language"
            | "user-agent"
            | "referer"
            | "x-request-id"
            | "x-forwarded-for"
            | "x-real-ip"
            | "cookie"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_with(headers: &[(&str, &str)]) -> Request<Body> {
        let mut builder = Request::builder().uri("/getUserList");
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_is_sensitive_header() {
        assert!(is_sensitive_header("cookie"));
        assert!(is_sensitive_header("authorization"));
        assert!(!is_sensitive_header("content-type"));
    }

    #[test]
    fn test_should_log_header() {
        assert!(should_log_header("content-type"));
        assert!(should_log_header("user-agent"));
        assert!(!should_log_header("cache-control"));
        assert!(!should_log_header("etag"));
    }

    #[test]
    fn test_cookie_is_redacted() {
        let request = request_with(&[("cookie", "lang=lt"), ("accept", "text/html")]);
        let logged = redact_headers(&request);

        assert!(logged.contains("cookie=[REDACTED]"));
        assert!(logged.contains("accept=text/html"));
        assert!(!logged.contains("lang=lt"));
    }

    #[test]
    fn test_request_id_is_reused() {
        let request = request_with(&[("x-request-id", "abc-123")]);
        assert_eq!(extract_request_id(&request), "abc-123");
    }

    #[test]
    fn test_request_id_is_generated() {
        let request = request_with(&[]);
        let id = extract_request_id(&request);
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn test_path_falls_back_to_uri() {
        let request = request_with(&[]);
        assert_eq!(extract_path(&request), "/getUserList");
    }
}
