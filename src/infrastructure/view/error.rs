use thiserror::Error;

/// View loading and rendering errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TemplateError {
    #[error("Failed to load view templates: {message}")]
    Load { message: String },

    #[error("Failed to render view '{view}': {message}")]
    Render { view: String, message: String },
}

impl TemplateError {
    pub(crate) fn load(err: &tera::Error) -> Self {
        Self::Load {
            message: describe(err),
        }
    }

    pub(crate) fn render(view: &str, err: &tera::Error) -> Self {
        Self::Render {
            view: view.to_string(),
            message: describe(err),
        }
    }
}

/// Tera keeps the useful detail (missing variable, bad syntax) in the source chain
fn describe(err: &tera::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}
