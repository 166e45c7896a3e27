//! Central configuration for the session_auth crate

use std::sync::LazyLock;

/// Username accepted by the default credential verifier
/// Default: "admin"
pub static SESSION_AUTH_USERNAME: LazyLock<String> =
    LazyLock::new(|| env_or_default(std::env::var("SESSION_AUTH_USERNAME").ok(), "admin"));

/// Password accepted by the default credential verifier
/// Default: "admin"
pub static SESSION_AUTH_PASSWORD: LazyLock<String> =
    LazyLock::new(|| env_or_default(std::env::var("SESSION_AUTH_PASSWORD").ok(), "admin"));

pub(crate) fn env_or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
