//! Errors surfaced at the HTTP boundary

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::domain::user::UserId;
use crate::domain::DomainError;
use crate::infrastructure::view::TemplateError;

/// Errors a handler cannot recover from locally
#[derive(Debug, Error)]
pub enum WebError {
    /// Update or delete requested for a user that does not exist
    #[error("Invalid user id: {0}")]
    InvalidUserId(UserId),

    /// Request could not be decoded
    #[error("Bad request: {message}")]
    BadRequest { status: StatusCode, message: String },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Marks a response produced from a [`WebError`] so the error page layer can
/// replace its body with the localized error view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPage;

impl WebError {
    pub fn bad_request(status: StatusCode, message: impl Into<String>) -> Self {
        Self::BadRequest {
            status,
            message: message.into(),
        }
    }

    /// HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest { status, .. } => *status,
            Self::InvalidUserId(_) | Self::Domain(_) | Self::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let reason = status.canonical_reason().unwrap_or("Error");
        let body = format!(
            "<!DOCTYPE html><html><head><title>{0}</title></head><body><h1>{0}</h1></body></html>",
            reason
        );

        let mut response = (status, Html(body)).into_response();
        response.extensions_mut().insert(ErrorPage);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_user_id_message() {
        let err = WebError::InvalidUserId(UserId::new(42));
        assert_eq!(err.to_string(), "Invalid user id: 42");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_domain_error_is_server_error() {
        let err: WebError = DomainError::storage("down").into();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Storage error: down");
    }

    #[test]
    fn test_bad_request_keeps_status() {
        let err = WebError::bad_request(StatusCode::UNSUPPORTED_MEDIA_TYPE, "wrong type");
        assert_eq!(err.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn test_into_response_marks_error_page() {
        let response = WebError::InvalidUserId(UserId::new(1)).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response.extensions().get::<ErrorPage>(), Some(&ErrorPage));
    }
}
