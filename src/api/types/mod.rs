//! Request and response types shared by the HTTP handlers

mod error;
mod form;
mod view;

pub use error::{ErrorPage, WebError};
pub use form::{Form, UserForm};
pub use view::{Outcome, ViewContext};
