//! Session store trait defining the interface for MFA session storage.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::mfa_session::MfaSession;
use crate::errors::DomainError;

/// Storage contract for MFA sessions
///
/// The store is keyed by session identifier. Implementations decide the
/// backing structure and its concurrency control; callers rely on
/// `compare_and_swap` to serialize attempt-counter updates so concurrent
/// verification calls cannot double-spend the attempt budget.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch a session by identifier
    ///
    /// Returns `Ok(None)` when the session is unknown or already
    /// consumed.
    async fn get(&self, id: &Uuid) -> Result<Option<MfaSession>, DomainError>;

    /// Insert or replace a session under its own identifier
    async fn put(&self, session: MfaSession) -> Result<(), DomainError>;

    /// Remove a session
    ///
    /// Returns `true` when a session was present and removed.
    async fn delete(&self, id: &Uuid) -> Result<bool, DomainError>;

    /// Replace a session only if the stored attempt counter still equals
    /// `expected_attempts`
    ///
    /// Returns `false` (without writing) when the session is missing or
    /// another caller advanced the counter first.
    async fn compare_and_swap(
        &self,
        id: &Uuid,
        expected_attempts: u32,
        session: MfaSession,
    ) -> Result<bool, DomainError>;
}
