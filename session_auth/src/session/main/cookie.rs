use headers::{Cookie, HeaderMapExt};
use http::HeaderMap;

use crate::session::config::{SESSION_COOKIE_NAME, SESSION_COOKIE_SECURE};
use crate::session::errors::SessionError;
use crate::session::types::SessionId;
use crate::utils::header_set_cookie;

/// `Set-Cookie` carrying a freshly issued session id. No expiry is set, so
/// the browser drops it when the browser session ends.
pub(super) fn session_cookie_header(session_id: &SessionId) -> Result<HeaderMap, SessionError> {
    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        SESSION_COOKIE_NAME.as_str(),
        session_id.as_str(),
        None,
        *SESSION_COOKIE_SECURE,
    )?;
    Ok(headers)
}

/// `Set-Cookie` that makes the browser discard the session cookie at once.
pub(super) fn expired_session_cookie_header() -> Result<HeaderMap, SessionError> {
    let mut headers = HeaderMap::new();
    header_set_cookie(
        &mut headers,
        SESSION_COOKIE_NAME.as_str(),
        "",
        Some(0),
        *SESSION_COOKIE_SECURE,
    )?;
    Ok(headers)
}

/// Raw session cookie value, empty values included.
pub(super) fn session_cookie_value(cookies: &Cookie) -> Option<&str> {
    cookies.get(SESSION_COOKIE_NAME.as_str())
}

pub(super) fn session_id_from_cookies(cookies: &Cookie) -> Option<&str> {
    session_cookie_value(cookies).filter(|value| !value.is_empty())
}

pub(super) fn cookies_from_headers(headers: &HeaderMap) -> Option<Cookie> {
    let cookies = headers.typed_get::<Cookie>();
    if cookies.is_none() {
        tracing::debug!("No cookie header found");
    }
    cookies
}
