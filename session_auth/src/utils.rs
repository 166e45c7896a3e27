use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use http::header::{HeaderMap, SET_COOKIE};
use ring::rand::{SecureRandom, SystemRandom};
use thiserror::Error;

/// Source of cryptographically secure random bytes.
///
/// `ring`'s own `SecureRandom` is sealed, so this is the seam that lets tests
/// substitute a source that fails.
pub trait RandomSource: Send + Sync {
    fn fill(&self, dest: &mut [u8]) -> Result<(), UtilError>;
}

impl RandomSource for SystemRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<(), UtilError> {
        SecureRandom::fill(self, dest)
            .map_err(|_| UtilError::Crypto("Failed to generate random bytes".to_string()))
    }
}

pub(crate) fn base64url_encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Draw `len` random bytes from `rng` and return them base64url encoded
/// without padding.
pub fn gen_random_string(rng: &dyn RandomSource, len: usize) -> Result<String, UtilError> {
    let mut buf = vec![0u8; len];
    rng.fill(&mut buf)?;
    Ok(base64url_encode(&buf))
}

/// Append a `Set-Cookie` header scoped to the whole site.
///
/// `max_age: None` leaves out both `Max-Age` and `Expires`, which makes the
/// cookie live for the browser session.
pub(crate) fn header_set_cookie(
    headers: &mut HeaderMap,
    name: &str,
    value: &str,
    max_age: Option<i64>,
    secure: bool,
) -> Result<(), UtilError> {
    let mut cookie = format!("{name}={value}; Path=/; HttpOnly; SameSite=Lax");
    if let Some(max_age) = max_age {
        cookie.push_str(&format!("; Max-Age={max_age}"));
    }
    if secure {
        cookie.push_str("; Secure");
    }
    headers.append(
        SET_COOKIE,
        cookie
            .parse()
            .map_err(|_| UtilError::Cookie("Failed to build Set-Cookie header".to_string()))?,
    );
    Ok(())
}

#[derive(Debug, Error, Clone)]
pub enum UtilError {
    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Cookie error: {0}")]
    Cookie(String),
}
