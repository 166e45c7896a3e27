//! Central configuration for the session_auth_axum crate

use std::sync::LazyLock;

/// Where unauthenticated requests for protected pages are sent
/// Default: "/login"
pub static SESSION_AUTH_LOGIN_URL: LazyLock<String> = LazyLock::new(|| {
    get_login_url(std::env::var("SESSION_AUTH_LOGIN_URL").ok().as_deref())
});

/// Landing page after login and logout
pub(crate) const HOME_URL: &str = "/";

fn get_login_url(env_value: Option<&str>) -> String {
    env_value
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .unwrap_or_else(|| "/login".to_string())
}
