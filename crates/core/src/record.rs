//! Persisted-strategy entities: the session record and its user.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// A server-side session record, owned by the external store.
///
/// This core only reads records and requests updates or deletes; it never
/// mutates one in place. Identifiers are opaque strings — the store chooses
/// the format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    /// The opaque token the client presents to reference this record.
    pub session_token: String,
    /// Id of the user the session belongs to.
    pub user_id: String,
    /// When the session stops being valid.
    pub expires_at: Timestamp,
}

impl SessionRecord {
    /// `true` once the record's expiry lies strictly in the past.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.expires_at < now
    }
}

/// Identity data associated with a session, owned by the external store.
/// Read-only to this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
