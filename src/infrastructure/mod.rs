//! Infrastructure layer - repositories, storage, localization and views

pub mod i18n;
pub mod logging;
pub mod storage;
pub mod user;
pub mod view;
