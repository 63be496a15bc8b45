//! Views a handler can select, with the data each one displays

use crate::domain::user::{FieldError, User};

/// Form contents as the browser submitted them, plus any field errors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub id: String,
    pub name: String,
    pub email: String,
    pub errors: Vec<FieldError>,
}

impl FormState {
    /// An empty form for a new user
    pub fn empty() -> Self {
        Self::default()
    }

    /// A form pre-filled from a stored user
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id().map(|id| id.to_string()).unwrap_or_default(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            errors: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Errors attached to one field, in the order they were found
    pub fn errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }
}

/// A server-rendered view selected by a handler
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Landing page
    Main,
    /// Form for creating a user
    AddUser(FormState),
    /// Form for editing an existing user
    UpdateUser(FormState),
    /// Table of all users
    UserList(Vec<User>),
    /// Generic failure page
    Error,
}

impl View {
    /// Template identifier of the view
    pub fn name(&self) -> &'static str {
        match self {
            Self::Main => "user/main-user",
            Self::AddUser(_) => "user/add-user",
            Self::UpdateUser(_) => "user/update-user",
            Self::UserList(_) => "user/list-user",
            Self::Error => "error",
        }
    }

    /// Name the view is registered under in the template engine
    pub fn template(&self) -> String {
        format!("{}.html", self.name())
    }

    /// GET route that shows this page again, used by the language links
    pub fn path(&self) -> String {
        match self {
            Self::Main | Self::Error => "/".to_string(),
            Self::AddUser(_) => "/getUserForm".to_string(),
            Self::UpdateUser(form) => match form.id.trim().parse::<i64>() {
                Ok(id) if id > 0 => format!("/update/{}", id),
                _ => "/getUserList".to_string(),
            },
            Self::UserList(_) => "/getUserList".to_string(),
        }
    }
}
