//! Server-side view rendering

mod error;
mod model;
mod renderer;

pub use error::TemplateError;
pub use model::{FormState, View};
pub use renderer::ViewRenderer;
