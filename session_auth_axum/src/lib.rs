//! session_auth_axum - Axum integration for session_auth
//!
//! Provides the login, logout and protected home pages, the [`AuthSession`]
//! extractor for guarding further routes, and [`AppState`] holding the
//! session store shared by all of them.

mod config;
mod error;
mod pages;
mod router;
mod session;
mod state;
mod views;

pub use config::SESSION_AUTH_LOGIN_URL;
pub use router::session_auth_router;
pub use session::{AuthRedirect, AuthSession};
pub use state::AppState;

// Re-export the core types integrators need alongside the router
pub use session_auth::{
    CredentialVerifier, RandomSource, SESSION_COOKIE_NAME, Session, SessionStore,
    StaticCredentialVerifier, SystemRandom, UtilError, generate_session_id,
};
