//! Form extraction and binding of submitted user fields

use axum::{
    extract::{FromRequest, Request},
    Form as AxumForm,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::user::{FieldError, User, UserId, UserValidationError};
use crate::infrastructure::view::FormState;

use super::error::WebError;

/// Form extractor that reports rejections through [`WebError`]
///
/// Wraps `axum::Form` so malformed bodies get the same error page as every
/// other failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct Form<T>(pub T);

impl<S, T> FromRequest<S> for Form<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match AxumForm::<T>::from_request(req, state).await {
            Ok(AxumForm(value)) => Ok(Form(value)),
            Err(rejection) => Err(WebError::bad_request(
                rejection.status(),
                format_rejection_message(&rejection),
            )),
        }
    }
}

fn format_rejection_message(rejection: &axum::extract::rejection::FormRejection) -> String {
    use axum::extract::rejection::FormRejection::*;

    match rejection {
        InvalidFormContentType(_) => {
            "Invalid Content-Type header. Expected 'application/x-www-form-urlencoded'."
                .to_string()
        }
        FailedToDeserializeForm(err) => format!("Invalid form data: {}", err.body_text()),
        FailedToDeserializeFormBody(err) => format!("Invalid form body: {}", err.body_text()),
        BytesRejection(err) => format!("Failed to read request body: {}", err.body_text()),
        _ => "Invalid form request".to_string(),
    }
}

/// User fields as submitted by the add and update forms
///
/// Every field defaults to empty so a missing field fails validation instead
/// of rejecting the whole request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserForm {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
}

impl UserForm {
    /// Convert the submitted strings into a user.
    ///
    /// A blank `id` binds as a transient user; a non-numeric one is reported
    /// as a field error and the user is left transient.
    pub fn bind(&self) -> (User, Vec<FieldError>) {
        let mut errors = Vec::new();

        let id = match self.id.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => match raw.parse::<i64>() {
                Ok(id) => Some(UserId::new(id)),
                Err(_) => {
                    errors.push(FieldError::new(
                        "id",
                        UserValidationError::InvalidId(raw.to_string()),
                    ));
                    None
                }
            },
        };

        let user = match id {
            Some(id) => User::with_id(id, self.name.as_str(), self.email.as_str()),
            None => User::new(self.name.as_str(), self.email.as_str()),
        };

        (user, errors)
    }

    /// Keep the submitted values so the re-rendered form shows what was typed
    pub fn into_state(self, errors: Vec<FieldError>) -> FormState {
        FormState {
            id: self.id.unwrap_or_default(),
            name: self.name,
            email: self.email,
            errors,
        }
    }
}
