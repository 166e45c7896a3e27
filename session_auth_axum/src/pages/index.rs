use axum::{http::StatusCode, response::Html};

use crate::session::AuthSession;
use crate::views::{View, render};

/// Protected home page. Requests without a live session never get here, the
/// extractor redirects them to the login page.
pub(super) async fn index(
    AuthSession(session): AuthSession,
) -> Result<Html<String>, (StatusCode, String)> {
    tracing::debug!("Rendering home page for {}", session.username());
    render(View::Index {
        username: session.username(),
    })
}
