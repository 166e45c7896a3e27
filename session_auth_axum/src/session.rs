use axum::{
    extract::{FromRef, FromRequestParts},
    response::{IntoResponse, Redirect, Response},
};
use http::request::Parts;

use super::config::SESSION_AUTH_LOGIN_URL;
use session_auth::{AuthState, Session, SessionStore, resolve_session};

/// Rejection for requests without a live session: a 303 to the login page.
#[derive(Debug)]
pub struct AuthRedirect;

impl IntoResponse for AuthRedirect {
    fn into_response(self) -> Response {
        tracing::debug!("Redirecting to {}", SESSION_AUTH_LOGIN_URL.as_str());
        Redirect::to(SESSION_AUTH_LOGIN_URL.as_str()).into_response()
    }
}

/// Session of the authenticated client, available as an Axum extractor
///
/// Handlers taking `AuthSession` only run for requests whose session cookie
/// names a live session; everything else is redirected to the login page.
///
/// # Example
///
/// ```no_run
/// use axum::{routing::get, Router};
/// use session_auth_axum::{AppState, AuthSession};
///
/// async fn protected_handler(AuthSession(session): AuthSession) -> String {
///     format!("Hello, {}!", session.username())
/// }
///
/// let app: Router = Router::new()
///     .route("/protected", get(protected_handler))
///     .with_state(AppState::default());
/// ```
#[derive(Clone, Debug)]
pub struct AuthSession(pub Session);

impl<S> FromRequestParts<S> for AuthSession
where
    SessionStore: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRedirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let store = SessionStore::from_ref(state);
        match resolve_session(&parts.headers, &store).await {
            AuthState::Authenticated(session) => Ok(Self(session)),
            AuthState::Unauthenticated => Err(AuthRedirect),
        }
    }
}
