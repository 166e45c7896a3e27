//! HTML views
//!
//! Handlers name a view and pass its data; the askama templates under
//! `templates/` do the rest.

use askama::Template;
use axum::{http::StatusCode, response::Html};

pub(crate) enum View<'a> {
    Login,
    Index { username: &'a str },
}

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate<'a> {
    message: &'a str,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    username: &'a str,
}

pub(crate) fn render(view: View<'_>) -> Result<Html<String>, (StatusCode, String)> {
    let rendered = match view {
        View::Login => LoginTemplate {
            message: "Please sign in.",
        }
        .render(),
        View::Index { username } => IndexTemplate { username }.render(),
    };

    rendered.map(Html).map_err(|e| {
        tracing::error!("Failed to render view: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })
}
