//! session_auth - Cookie-based session authentication core
//!
//! This crate mints opaque session identifiers, keeps live sessions in a
//! concurrent in-memory table and resolves incoming requests to a session
//! through the session cookie. The login and logout flows in
//! [`login_core`] and [`logout_core`] compose those pieces; HTTP framework
//! integrations only translate their results into responses.

mod config;
mod coordination;
mod credential;
mod session;
mod utils;

#[cfg(test)]
mod test_utils;

pub use config::{SESSION_AUTH_PASSWORD, SESSION_AUTH_USERNAME};

pub use coordination::{CoordinationError, login_core, logout_core};

pub use credential::{CredentialVerifier, StaticCredentialVerifier};

pub use session::{
    AuthState, SESSION_COOKIE_NAME, SESSION_COOKIE_SECURE, Session, SessionError, SessionId,
    SessionStore, generate_session_id, prepare_logout_response, resolve_session,
};

pub use utils::{RandomSource, UtilError, gen_random_string};

// Re-exported so integrations can name the default random source
pub use ring::rand::SystemRandom;
