//! Authentication coordination module
//!
//! High-level login and logout flows built from the credential verifier, the
//! token generator and the session store. HTTP framework integrations call
//! these and translate the results into responses.

mod errors;
mod login;

pub use errors::CoordinationError;
pub use login::{login_core, logout_core};
