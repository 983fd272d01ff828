//! Server-side page rendering.
//!
//! Templates are compiled into the binary and resolved by name through a
//! minijinja loader, so the server has no runtime dependency on the working
//! directory. Contexts are plain `Serialize` values.

pub mod page_links;
pub mod user_view;

use std::sync::LazyLock;

use minijinja::Environment;
use serde::Serialize;

pub use page_links::{PageLink, PageLinks};
pub use user_view::{FormValues, UserView};

pub const HOME: &str = "index.html";
pub const CREATE_USER: &str = "crud.html";
pub const USER_LIST: &str = "users/list.html";
pub const EDIT_USER: &str = "users/edit.html";
pub const ERROR: &str = "error.html";

static TEMPLATES: LazyLock<Environment<'static>> = LazyLock::new(|| {
    let mut env = Environment::new();
    env.set_loader(load_template);
    env
});

fn load_template(name: &str) -> Result<Option<String>, minijinja::Error> {
    let source = match name {
        "layout.html" => include_str!("../../templates/layout.html"),
        "_form_fields.html" => include_str!("../../templates/_form_fields.html"),
        HOME => include_str!("../../templates/index.html"),
        CREATE_USER => include_str!("../../templates/crud.html"),
        USER_LIST => include_str!("../../templates/users/list.html"),
        EDIT_USER => include_str!("../../templates/users/edit.html"),
        ERROR => include_str!("../../templates/error.html"),
        _ => return Ok(None),
    };

    Ok(Some(source.to_string()))
}

/// Render the template `name` with `context`.
pub fn render<S: Serialize>(name: &str, context: S) -> Result<String, minijinja::Error> {
    TEMPLATES.get_template(name)?.render(context)
}
