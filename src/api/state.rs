//! Application state shared across handlers

use std::sync::Arc;

use crate::domain::user::UserRepository;
use crate::infrastructure::view::ViewRenderer;

use super::middleware::LocaleResolver;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub views: Arc<ViewRenderer>,
    pub locale_resolver: Arc<LocaleResolver>,
}

impl AppState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        views: Arc<ViewRenderer>,
        locale_resolver: LocaleResolver,
    ) -> Self {
        Self {
            users,
            views,
            locale_resolver: Arc::new(locale_resolver),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("users", &self.users)
            .field("locale_resolver", &self.locale_resolver)
            .finish_non_exhaustive()
    }
}
