//! HTML fragment rendering for the to-do server.
//!
//! Every response body the server produces comes from here. Templates are
//! embedded at compile time and compiled once by [`Renderer::new`]; rendering
//! is deterministic, the same input always yields the same markup.
//!
//! The markup carries htmx attributes (`hx-get`, `hx-post`, `hx-delete`,
//! `hx-target`, `hx-swap`) so the client library can issue requests and splice
//! the returned fragments into the page without any custom scripting.
//!
//! All templates auto-escape, so task content is always rendered as text.

use minijinja::{context, Environment, HtmlEscape};
use thiserror::Error;
use todo_types::Todo;

const SHELL: &str = "shell.html";
const INDEX: &str = "index.html";
const TODO_ITEM: &str = "todo_item.html";
const TODO_LIST: &str = "todo_list.html";
const TODO_FORM: &str = "todo_form.html";

const TEMPLATES: [(&str, &str); 5] = [
    (SHELL, include_str!("../templates/shell.html")),
    (INDEX, include_str!("../templates/index.html")),
    (TODO_ITEM, include_str!("../templates/todo_item.html")),
    (TODO_LIST, include_str!("../templates/todo_list.html")),
    (TODO_FORM, include_str!("../templates/todo_form.html")),
];

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Compiled template set.
///
/// Build one at startup and share it; it holds no per-request state.
#[derive(Debug)]
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Compile the embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Wrap `body` in the full document: head with the htmx and Tailwind
    /// scripts, then `body` verbatim.
    pub fn shell(&self, body: &str) -> Result<String, RenderError> {
        self.render(SHELL, context! { body })
    }

    /// The page served at `/`: a shell whose `<body>` loads `/todos` into
    /// itself as soon as the page is ready.
    pub fn index(&self) -> Result<String, RenderError> {
        let body = self.render(INDEX, context! {})?;
        self.shell(&body)
    }

    /// One task row: content, a checkbox that posts to the toggle endpoint and
    /// replaces the row, and a delete button that removes the row.
    pub fn todo_item(&self, todo: &Todo) -> Result<String, RenderError> {
        self.render(TODO_ITEM, context! { todo })
    }

    /// All rows in the given order, followed by the creation form.
    pub fn todo_list(&self, todos: &[Todo]) -> Result<String, RenderError> {
        self.render(TODO_LIST, context! { todos })
    }

    /// The creation form. Its response is inserted just before the form.
    pub fn create_form(&self) -> Result<String, RenderError> {
        self.render(TODO_FORM, context! {})
    }

    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<String, RenderError> {
        Ok(self.env.get_template(name)?.render(ctx)?)
    }
}

/// A short inline error message for failed requests.
pub fn error_fragment(message: &str) -> String {
    format!(r#"<div class="text-red-500">{}</div>"#, HtmlEscape(message))
}
