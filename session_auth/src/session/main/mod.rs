mod cookie;
mod session;

pub use session::{generate_session_id, prepare_logout_response, resolve_session};

pub(crate) use session::create_session_with_username;
