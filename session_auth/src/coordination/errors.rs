//! Error types for the login and logout flows

use thiserror::Error;

use crate::session::SessionError;

/// Errors that can occur while coordinating a login or logout
#[derive(Error, Debug)]
pub enum CoordinationError {
    /// The request body could not be decoded as a login form
    #[error("Unable to parse form")]
    MalformedRequest(String),

    /// Username or password did not match; which one is not reported
    #[error("Wrong Credentials")]
    InvalidCredentials,

    /// Error from Session operations
    #[error("Session error: {0}")]
    SessionError(SessionError),
}

impl CoordinationError {
    /// Log the error and return self
    pub fn log(self) -> Self {
        match &self {
            Self::MalformedRequest(detail) => tracing::warn!("Malformed login request: {}", detail),
            Self::InvalidCredentials => tracing::warn!("Login rejected: wrong credentials"),
            Self::SessionError(err) => tracing::error!("Session error: {}", err),
        }
        self
    }
}

impl From<SessionError> for CoordinationError {
    fn from(err: SessionError) -> Self {
        let error = Self::SessionError(err);
        tracing::error!("{}", error);
        error
    }
}
