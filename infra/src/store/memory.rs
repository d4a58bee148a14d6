//! In-memory session store.
//!
//! Sessions live in a `HashMap` behind an async `RwLock`; restarting the
//! process discards all state, which is the intended lifecycle for MFA
//! sessions. Attempt-counter updates go through `compare_and_swap` so
//! concurrent verification calls against the same session cannot
//! double-spend the attempt budget.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use pir_core::domain::entities::mfa_session::MfaSession;
use pir_core::errors::DomainError;
use pir_core::repositories::SessionStore;

/// In-memory implementation of [`SessionStore`]
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<Uuid, MfaSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, id: &Uuid) -> Result<Option<MfaSession>, DomainError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn put(&self, session: MfaSession) -> Result<(), DomainError> {
        debug!(session_id = %session.id, "storing MFA session");
        self.sessions.write().await.insert(session.id, session);
        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            debug!(session_id = %id, "removed MFA session");
        }
        Ok(removed)
    }

    async fn compare_and_swap(
        &self,
        id: &Uuid,
        expected_attempts: u32,
        session: MfaSession,
    ) -> Result<bool, DomainError> {
        let mut sessions = self.sessions.write().await;
        match sessions.get(id) {
            Some(current) if current.attempts == expected_attempts => {
                sessions.insert(*id, session);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use pir_core::domain::entities::personal_info::PersonalInfo;

    fn sample_session() -> MfaSession {
        let info = PersonalInfo {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            address: "123 Main Street, Springfield".to_string(),
            state: "IL".to_string(),
            email: "jane.doe@example.com".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 4, 12).unwrap(),
            ssn: "123-45-6789".to_string(),
        };
        MfaSession::new("5551234567".to_string(), info, Utc::now())
    }

    #[tokio::test]
    async fn test_put_get_delete() {
        let store = InMemorySessionStore::new();
        let session = sample_session();
        let id = session.id;

        store.put(session.clone()).await.unwrap();
        assert_eq!(store.get(&id).await.unwrap(), Some(session));
        assert_eq!(store.len().await, 1);

        assert!(store.delete(&id).await.unwrap());
        assert!(store.get(&id).await.unwrap().is_none());
        assert!(!store.delete(&id).await.unwrap());
    }

    #[tokio::test]
    async fn test_compare_and_swap_guards_attempts() {
        let store = InMemorySessionStore::new();
        let session = sample_session();
        let id = session.id;
        store.put(session.clone()).await.unwrap();

        let mut first = session.clone();
        first.attempts = 1;
        assert!(store.compare_and_swap(&id, 0, first).await.unwrap());

        // A second writer that also read attempts=0 must lose.
        let mut stale = session.clone();
        stale.attempts = 1;
        assert!(!store.compare_and_swap(&id, 0, stale).await.unwrap());

        assert_eq!(store.get(&id).await.unwrap().unwrap().attempts, 1);
    }

    #[tokio::test]
    async fn test_compare_and_swap_missing_session() {
        let store = InMemorySessionStore::new();
        let session = sample_session();
        assert!(!store
            .compare_and_swap(&session.id, 0, session.clone())
            .await
            .unwrap());
    }
}
