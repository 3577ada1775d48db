//! In-memory session registry. Sessions live for the process lifetime only;
//! there is no persistence and no expiry.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::assessment::session::AssessmentSession;
use crate::guidance::parser::GuidanceDocument;

/// One stored interaction context: the session itself plus the guidance
/// document its completed run produced, if any.
#[derive(Debug, Clone, Default)]
pub struct SessionEntry {
    pub session: AssessmentSession,
    pub guidance: Option<GuidanceDocument>,
}

/// Registry of live sessions keyed by id. Cheap to clone; every clone shares
/// the same map.
#[derive(Clone, Default)]
pub struct SessionStore {
    entries: Arc<RwLock<HashMap<Uuid, SessionEntry>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh session and returns its id.
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        let mut entries = self.entries.write().await;
        entries.insert(id, SessionEntry::default());
        id
    }

    /// Snapshot of an entry, if it exists.
    pub async fn get(&self, id: Uuid) -> Option<SessionEntry> {
        let entries = self.entries.read().await;
        entries.get(&id).cloned()
    }

    /// Runs a closure against an entry under the write lock, returning None
    /// for an unknown id. The closure is synchronous on purpose: the lock
    /// must never be held across an await point.
    pub async fn with_entry<F, R>(&self, id: Uuid, f: F) -> Option<R>
    where
        F: FnOnce(&mut SessionEntry) -> R,
    {
        let mut entries = self.entries.write().await;
        entries.get_mut(&id).map(f)
    }

    /// Removes an entry, reporting whether it existed.
    pub async fn remove(&self, id: Uuid) -> bool {
        let mut entries = self.entries.write().await;
        entries.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::catalog::Track;
    use crate::assessment::session::Phase;

    #[tokio::test]
    async fn test_create_then_get() {
        let store = SessionStore::new();
        let id = store.create().await;

        let entry = store.get(id).await.expect("entry should exist");
        assert_eq!(entry.session.phase(), Phase::SelectingTrack);
        assert!(entry.guidance.is_none());
    }

    #[tokio::test]
    async fn test_get_unknown_id_returns_none() {
        let store = SessionStore::new();
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let store = SessionStore::new();
        let first = store.create().await;
        let second = store.create().await;
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_with_entry_mutates_stored_session() {
        let store = SessionStore::new();
        let id = store.create().await;

        let result = store
            .with_entry(id, |entry| entry.session.choose_track(Track::DataAnalyst))
            .await
            .expect("entry should exist");
        result.unwrap();

        let entry = store.get(id).await.unwrap();
        assert_eq!(entry.session.phase(), Phase::Answering);
        assert_eq!(entry.session.track(), Some(Track::DataAnalyst));
    }

    #[tokio::test]
    async fn test_with_entry_unknown_id_returns_none() {
        let store = SessionStore::new();
        let result = store.with_entry(Uuid::new_v4(), |_| ()).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_remove_then_get_returns_none() {
        let store = SessionStore::new();
        let id = store.create().await;

        assert!(store.remove(id).await);
        assert!(store.get(id).await.is_none());
        assert!(!store.remove(id).await, "second remove should report missing");
    }

    #[tokio::test]
    async fn test_clones_share_the_same_map() {
        let store = SessionStore::new();
        let clone = store.clone();

        let id = store.create().await;
        assert!(clone.get(id).await.is_some());
    }
}
