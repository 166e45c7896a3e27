use headers::Cookie;
use http::HeaderMap;

use crate::credential::CredentialVerifier;
use crate::session::{SessionStore, create_session_with_username, prepare_logout_response};
use crate::utils::RandomSource;

use super::errors::CoordinationError;

/// Check the submitted credentials and open a new session.
///
/// Returns the `Set-Cookie` headers for the new session. The store is only
/// written after the credentials matched and a session id was minted.
pub async fn login_core(
    username: &str,
    password: &str,
    verifier: &dyn CredentialVerifier,
    store: &SessionStore,
    rng: &dyn RandomSource,
) -> Result<HeaderMap, CoordinationError> {
    if !verifier.verify(username, password).await {
        return Err(CoordinationError::InvalidCredentials.log());
    }

    let headers = create_session_with_username(username, store, rng).await?;

    tracing::info!("User {} logged in", username);
    Ok(headers)
}

/// Close the session named by the request cookies, if any.
///
/// Returns the headers that expire the session cookie, or an empty map when
/// the request carried no session cookie.
pub async fn logout_core(
    cookies: Option<&Cookie>,
    store: &SessionStore,
) -> Result<HeaderMap, CoordinationError> {
    let headers = prepare_logout_response(cookies, store).await?;
    if !headers.is_empty() {
        tracing::info!("Session closed by logout");
    }
    Ok(headers)
}
