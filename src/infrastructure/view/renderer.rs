//! Renders views into complete HTML pages

use std::collections::BTreeMap;

use serde::Serialize;
use tera::{Context, Tera};

use crate::infrastructure::i18n::{Locale, MessageSource};

use super::error::TemplateError;
use super::model::{FormState, View};

/// Templates compiled into the binary. Names end in `.html` so tera
/// autoescapes every value they print.
const TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../../templates/layout.html")),
    ("error.html", include_str!("../../../templates/error.html")),
    ("user/main-user.html", include_str!("../../../templates/user/main-user.html")),
    ("user/add-user.html", include_str!("../../../templates/user/add-user.html")),
    ("user/update-user.html", include_str!("../../../templates/user/update-user.html")),
    ("user/list-user.html", include_str!("../../../templates/user/list-user.html")),
];

const FORM_FIELDS: [&str; 3] = ["id", "name", "email"];

/// Form as the templates see it, with error messages already localized
#[derive(Debug, Serialize)]
struct FormContext<'a> {
    id: &'a str,
    name: &'a str,
    email: &'a str,
    has_errors: bool,
    errors: BTreeMap<&'static str, Vec<String>>,
}

/// Turns a [`View`] into a localized HTML page wrapped in the site layout
#[derive(Debug, Clone)]
pub struct ViewRenderer {
    tera: Tera,
    messages: MessageSource,
}

impl ViewRenderer {
    /// Register the embedded templates
    pub fn embedded(messages: MessageSource) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);
        tera.add_raw_templates(TEMPLATES.iter().copied())
            .map_err(|e| TemplateError::load(&e))?;

        Ok(Self { tera, messages })
    }

    pub fn messages(&self) -> &MessageSource {
        &self.messages
    }

    /// Render a view as a full page in the given locale
    pub fn render(&self, view: &View, locale: &Locale) -> Result<String, TemplateError> {
        let mut context = Context::new();
        context.insert("lang", locale.language());
        context.insert("msg", &self.messages.bundle(locale));
        context.insert("page_path", &view.path());

        match view {
            View::Main | View::Error => {}
            View::AddUser(form) | View::UpdateUser(form) => {
                context.insert("form", &self.form_context(form, locale));
            }
            View::UserList(users) => context.insert("users", users),
        }

        self.tera
            .render(&view.template(), &context)
            .map_err(|e| TemplateError::render(view.name(), &e))
    }

    fn form_context<'a>(&self, form: &'a FormState, locale: &Locale) -> FormContext<'a> {
        let errors = FORM_FIELDS
            .iter()
            .map(|field| {
                let messages = form
                    .errors_for(field)
                    .map(|e| {
                        self.messages
                            .message(locale, e.error.message_key(), &e.error.message_args())
                    })
                    .collect();
                (*field, messages)
            })
            .collect();

        FormContext {
            id: &form.id,
            name: &form.name,
            email: &form.email,
            has_errors: form.has_errors(),
            errors,
        }
    }
}
