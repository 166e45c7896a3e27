use thiserror::Error;

use crate::utils::UtilError;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    /// The random source could not produce a session identifier.
    #[error("Random source exhausted: {0}")]
    RandomSourceExhausted(String),

    #[error("Cookie error: {0}")]
    Cookie(String),
}

impl From<UtilError> for SessionError {
    fn from(err: UtilError) -> Self {
        match err {
            UtilError::Crypto(msg) => Self::RandomSourceExhausted(msg),
            UtilError::Cookie(msg) => Self::Cookie(msg),
        }
    }
}
