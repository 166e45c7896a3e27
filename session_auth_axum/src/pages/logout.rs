use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::headers::{Cookie, HeaderMapExt};

use session_auth::logout_core;

use crate::config::HOME_URL;
use crate::error::IntoResponseError;
use crate::state::AppState;

/// Ends the current session, if any, and redirects home.
///
/// Safe to call repeatedly: without a session cookie nothing is deleted and
/// the redirect is returned on its own.
pub(super) async fn logout(
    State(state): State<AppState>,
    request_headers: HeaderMap,
) -> Result<Response, (StatusCode, String)> {
    let cookies = request_headers.typed_get::<Cookie>();

    let headers = logout_core(cookies.as_ref(), &state.store)
        .await
        .into_response_error()?;

    Ok((headers, Redirect::to(HOME_URL)).into_response())
}
