use std::sync::LazyLock;

pub static SESSION_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    std::env::var("SESSION_COOKIE_NAME")
        .ok()
        .filter(|name| !name.is_empty())
        .unwrap_or("_session_id".to_string())
});

/// Whether session cookies carry the `Secure` attribute.
/// Off by default because the demo server speaks plain HTTP.
pub static SESSION_COOKIE_SECURE: LazyLock<bool> = LazyLock::new(|| {
    parse_flag(std::env::var("SESSION_COOKIE_SECURE").ok().as_deref(), false)
});

pub(crate) fn parse_flag(value: Option<&str>, default: bool) -> bool {
    match value.map(|v| v.trim().to_lowercase()) {
        Some(v) if v == "true" || v == "1" || v == "yes" => true,
        Some(v) if v == "false" || v == "0" || v == "no" => false,
        _ => default,
    }
}
