use axum::{Router, routing::get};

use crate::state::AppState;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(super::index::index))
        .route(
            "/login",
            get(super::login::login).post(super::login::post_login),
        )
        .route("/logout", get(super::logout::logout))
}
