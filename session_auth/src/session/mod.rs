mod config;
mod errors;
mod main;
mod store;
mod types;

pub use config::{SESSION_COOKIE_NAME, SESSION_COOKIE_SECURE};
pub use errors::SessionError;
pub use main::{generate_session_id, prepare_logout_response, resolve_session};
pub use store::SessionStore;
pub use types::{AuthState, Session, SessionId};

pub(crate) use main::create_session_with_username;
