//! Session record persistence for the persisted strategy.
//!
//! [`SessionStore`] is the CRUD boundary the engine speaks to; the backing
//! database is the caller's choice. [`MemoryStore`] is the bundled
//! implementation for tests and single-process deployments.

use std::collections::HashMap;

use async_trait::async_trait;
use authgate_core::error::BoxError;
use authgate_core::record::{SessionRecord, UserRecord};
use authgate_core::types::Timestamp;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Persistence operations the persisted strategy needs.
///
/// The store is the sole arbiter of consistency for concurrent updates to
/// the same record; last-write-wins is acceptable.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Look up the session record and its user by the presented token.
    ///
    /// Returns `Ok(None)` when either half is missing — a record whose user
    /// has been deleted is not a usable session.
    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<(SessionRecord, UserRecord)>, BoxError>;

    /// Delete the record for `token`. Deleting a missing record is not an
    /// error.
    async fn delete(&self, token: &str) -> Result<(), BoxError>;

    /// Persist a refreshed expiry for `token`. Updating a missing record is
    /// a no-op.
    async fn update_expires(&self, token: &str, expires_at: Timestamp) -> Result<(), BoxError>;
}

/// Mint an opaque session token for persisted-strategy sign-in flows.
///
/// The token carries no meaning; it is only a lookup key, so a random UUID
/// is enough.
pub fn generate_session_token() -> String {
    Uuid::new_v4().to_string()
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

/// In-memory [`SessionStore`] over a `tokio::sync::RwLock`.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    /// Session records keyed by session token.
    sessions: HashMap<String, SessionRecord>,
    /// User records keyed by user id.
    users: HashMap<String, UserRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Insert or replace a user record.
    pub async fn insert_user(&self, user: UserRecord) {
        self.inner.write().await.users.insert(user.id.clone(), user);
    }

    /// Insert or replace a session record.
    pub async fn insert_session(&self, record: SessionRecord) {
        self.inner
            .write()
            .await
            .sessions
            .insert(record.session_token.clone(), record);
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<(SessionRecord, UserRecord)>, BoxError> {
        let inner = self.inner.read().await;
        let Some(record) = inner.sessions.get(token) else {
            return Ok(None);
        };
        let Some(user) = inner.users.get(&record.user_id) else {
            return Ok(None);
        };
        Ok(Some((record.clone(), user.clone())))
    }

    async fn delete(&self, token: &str) -> Result<(), BoxError> {
        self.inner.write().await.sessions.remove(token);
        Ok(())
    }

    async fn update_expires(&self, token: &str, expires_at: Timestamp) -> Result<(), BoxError> {
        if let Some(record) = self.inner.write().await.sessions.get_mut(token) {
            record.expires_at = expires_at;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
