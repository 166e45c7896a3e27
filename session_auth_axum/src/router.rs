//! Router for the session authentication pages

use axum::Router;
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::state::AppState;

/// Create the router serving the home, login and logout pages
///
/// The endpoints are:
/// - `GET /` protected home page
/// - `GET /login` login form
/// - `POST /login` credential check and session creation
/// - `GET /logout` session removal
///
/// Request headers are kept out of the trace spans since they carry the
/// session cookie.
pub fn session_auth_router(state: AppState) -> Router {
    super::pages::router().with_state(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(
                DefaultMakeSpan::new()
                    .level(Level::INFO)
                    .include_headers(false),
            )
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}
