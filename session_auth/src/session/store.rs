use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::types::{Session, SessionId};

/// In-memory table of live sessions.
///
/// Cloning yields another handle to the same table. Reads share the lock,
/// `put` and `delete` hold it exclusively.
#[derive(Clone, Default)]
pub struct SessionStore {
    entry: Arc<RwLock<HashMap<SessionId, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        tracing::info!("Creating new in-memory session store");
        Self::default()
    }

    /// Insert a session, overwriting any entry already stored under `id`.
    pub async fn put(&self, id: SessionId, session: Session) {
        let mut entry = self.entry.write().await;
        if entry.insert(id, session).is_some() {
            tracing::warn!("Session identifier collision, previous session overwritten");
        }
    }

    pub async fn get(&self, id: &str) -> Option<Session> {
        self.entry.read().await.get(id).cloned()
    }

    /// Remove a session. Removing an unknown id is not an error.
    pub async fn delete(&self, id: &str) {
        self.entry.write().await.remove(id);
    }

    pub async fn len(&self) -> usize {
        self.entry.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entry.read().await.is_empty()
    }
}
