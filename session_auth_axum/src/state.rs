use axum::extract::FromRef;
use std::sync::Arc;

use session_auth::{
    CredentialVerifier, RandomSource, SessionStore, StaticCredentialVerifier, SystemRandom,
};

/// Shared state handed to every handler.
///
/// The session store lives here rather than in a global so each router (and
/// each test) owns an isolated table.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub store: SessionStore,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub rng: Arc<dyn RandomSource>,
}

impl AppState {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, rng: Arc<dyn RandomSource>) -> Self {
        Self {
            store: SessionStore::new(),
            verifier,
            rng,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Arc::new(StaticCredentialVerifier::default()),
            Arc::new(SystemRandom::new()),
        )
    }
}
