//! Mock session store for service tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use crate::domain::entities::mfa_session::MfaSession;
use crate::errors::DomainError;

use super::SessionStore;

/// In-memory mock with optional failure injection
#[derive(Default)]
pub struct MockSessionStore {
    sessions: Mutex<HashMap<Uuid, MfaSession>>,
    fail: AtomicBool,
}

impl MockSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation return an internal error
    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Number of stored sessions
    pub fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert a session directly, bypassing the trait
    pub fn insert(&self, session: MfaSession) {
        self.sessions.lock().unwrap().insert(session.id, session);
    }

    fn check_fail(&self) -> Result<(), DomainError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(DomainError::Internal {
                message: "simulated store failure".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn get(&self, id: &Uuid) -> Result<Option<MfaSession>, DomainError> {
        self.check_fail()?;
        Ok(self.sessions.lock().unwrap().get(id).cloned())
    }

    async fn put(&self, session: MfaSession) -> Result<(), DomainError> {
        self.check_fail()?;
        self.sessions.lock().unwrap().insert(session.id, session);
        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError> {
        self.check_fail()?;
        Ok(self.sessions.lock().unwrap().remove(id).is_some())
    }

    async fn compare_and_swap(
        &self,
        id: &Uuid,
        expected_attempts: u32,
        session: MfaSession,
    ) -> Result<bool, DomainError> {
        self.check_fail()?;
        let mut sessions = self.sessions.lock().unwrap();
        match sessions.get(id) {
            Some(current) if current.attempts == expected_attempts => {
                sessions.insert(*id, session);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
