use headers::Cookie;
use http::header::HeaderMap;

use crate::session::errors::SessionError;
use crate::session::store::SessionStore;
use crate::session::types::{AuthState, Session, SessionId};
use crate::utils::{RandomSource, gen_random_string};

use super::cookie::{
    cookies_from_headers, expired_session_cookie_header, session_cookie_header,
    session_cookie_value, session_id_from_cookies,
};

/// Number of random bytes behind every session id (256 bits).
const SESSION_ID_BYTES: usize = 32;

/// Mint a new session identifier from `rng`.
///
/// Fails with [`SessionError::RandomSourceExhausted`] when the source cannot
/// fill the buffer. There is no fallback to a weaker source.
pub fn generate_session_id(rng: &dyn RandomSource) -> Result<SessionId, SessionError> {
    let value = gen_random_string(rng, SESSION_ID_BYTES)?;
    Ok(SessionId::new(value))
}

/// Create a session for `username` and return the `Set-Cookie` headers that
/// hand its id to the client.
///
/// Nothing is stored unless every fallible step succeeded.
pub(crate) async fn create_session_with_username(
    username: &str,
    store: &SessionStore,
    rng: &dyn RandomSource,
) -> Result<HeaderMap, SessionError> {
    let session_id = generate_session_id(rng)?;
    let headers = session_cookie_header(&session_id)?;

    store.put(session_id, Session::new(username)).await;

    tracing::debug!("Created session for user {}", username);
    Ok(headers)
}

/// Resolve the session referenced by the request's session cookie.
///
/// A missing cookie, an unreadable cookie header and an unknown id all give
/// [`AuthState::Unauthenticated`]. The store is only read.
pub async fn resolve_session(headers: &HeaderMap, store: &SessionStore) -> AuthState {
    let Some(cookies) = cookies_from_headers(headers) else {
        return AuthState::Unauthenticated;
    };

    let Some(session_id) = session_id_from_cookies(&cookies) else {
        tracing::debug!("No session cookie found in request");
        return AuthState::Unauthenticated;
    };

    match store.get(session_id).await {
        Some(session) => AuthState::Authenticated(session),
        None => {
            tracing::debug!("Session cookie does not match a live session");
            AuthState::Unauthenticated
        }
    }
}

/// Prepare a logout response by deleting the session from the store and
/// expiring the session cookie.
///
/// Without a session cookie the store is not touched and the returned header
/// map is empty. A present but empty cookie is still expired.
pub async fn prepare_logout_response(
    cookies: Option<&Cookie>,
    store: &SessionStore,
) -> Result<HeaderMap, SessionError> {
    let Some(session_id) = cookies.and_then(session_cookie_value) else {
        tracing::debug!("Logout without session cookie");
        return Ok(HeaderMap::new());
    };

    if !session_id.is_empty() {
        store.delete(session_id).await;
    }
    expired_session_cookie_header()
}
