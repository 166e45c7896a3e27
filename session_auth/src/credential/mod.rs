//! Credential verification
//!
//! The session layer only needs a yes/no answer for a username and password,
//! so identity providers plug in through [`CredentialVerifier`].

use async_trait::async_trait;
use subtle::ConstantTimeEq;

use crate::config::{SESSION_AUTH_PASSWORD, SESSION_AUTH_USERNAME};

#[async_trait]
pub trait CredentialVerifier: Send + Sync + 'static {
    /// Returns true when the pair identifies a known user.
    async fn verify(&self, username: &str, password: &str) -> bool;
}

/// Accepts exactly one username/password pair.
#[derive(Clone)]
pub struct StaticCredentialVerifier {
    username: String,
    password: String,
}

impl StaticCredentialVerifier {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for StaticCredentialVerifier {
    /// Pair taken from `SESSION_AUTH_USERNAME` / `SESSION_AUTH_PASSWORD`,
    /// `admin` / `admin` when unset.
    fn default() -> Self {
        Self::new(SESSION_AUTH_USERNAME.as_str(), SESSION_AUTH_PASSWORD.as_str())
    }
}

impl std::fmt::Debug for StaticCredentialVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentialVerifier")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> bool {
        // Both comparisons always run so timing does not reveal which field was wrong
        let username_ok = username.as_bytes().ct_eq(self.username.as_bytes());
        let password_ok = password.as_bytes().ct_eq(self.password.as_bytes());
        (username_ok & password_ok).into()
    }
}
