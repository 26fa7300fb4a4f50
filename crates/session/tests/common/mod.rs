//! Shared fixtures and recording doubles for the strategy integration tests.
//!
//! The doubles count every call the resolver makes and can be told to fail,
//! so tests can pin down not just the response but the exact traffic behind
//! it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use serde_json::Value;

use authgate_session::{
    BoxError, IdentitySource, JwtCodec, SessionCallbacks, SessionClaims, SessionEvents,
    SessionRecord, SessionStore, SessionView, Timestamp, TokenCodec, UserRecord,
};

/// Signing secret shared by every codec in the suite.
pub const TEST_SECRET: &str = "integration-suite-secret-0123456789abcdef";

/// Thirty days in seconds, the default session lifetime.
pub const THIRTY_DAYS: i64 = 2_592_000;

/// One day in seconds, the default refresh throttle.
pub const ONE_DAY: i64 = 86_400;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// The user every seeded session belongs to.
pub fn test_user() -> UserRecord {
    UserRecord {
        id: "user-1".to_string(),
        name: Some("Ada Lovelace".to_string()),
        email: Some("ada@example.com".to_string()),
        image: Some("https://example.com/ada.png".to_string()),
    }
}

/// A session record for [`test_user`] expiring at `expires_at`.
pub fn session_record(token: &str, expires_at: Timestamp) -> SessionRecord {
    SessionRecord {
        session_token: token.to_string(),
        user_id: "user-1".to_string(),
        expires_at,
    }
}

/// Expiry a session issued `ago_secs` seconds ago would carry under the
/// default thirty-day lifetime.
pub fn expiry_issued_ago(ago_secs: i64) -> Timestamp {
    Utc::now() - Duration::seconds(ago_secs) + Duration::seconds(THIRTY_DAYS)
}

// ---------------------------------------------------------------------------
// RecordingStore
// ---------------------------------------------------------------------------

/// An in-memory [`SessionStore`] that records traffic and can inject
/// failures per operation.
#[derive(Default)]
pub struct RecordingStore {
    sessions: Mutex<HashMap<String, SessionRecord>>,
    users: Mutex<HashMap<String, UserRecord>>,
    pub find_calls: AtomicUsize,
    pub delete_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    /// Expiry passed to the most recent `update_expires`.
    pub last_updated_expiry: Mutex<Option<Timestamp>>,
    pub fail_find: AtomicBool,
    pub fail_delete: AtomicBool,
    pub fail_update: AtomicBool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record together with its user.
    pub fn seed(&self, record: SessionRecord, user: UserRecord) {
        self.users.lock().unwrap().insert(user.id.clone(), user);
        self.sessions
            .lock()
            .unwrap()
            .insert(record.session_token.clone(), record);
    }

    /// Whether a record for `token` is still present.
    pub fn contains(&self, token: &str) -> bool {
        self.sessions.lock().unwrap().contains_key(token)
    }

    /// The expiry currently stored for `token`.
    pub fn stored_expiry(&self, token: &str) -> Option<Timestamp> {
        self.sessions
            .lock()
            .unwrap()
            .get(token)
            .map(|record| record.expires_at)
    }
}

#[async_trait]
impl SessionStore for RecordingStore {
    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<(SessionRecord, UserRecord)>, BoxError> {
        self.find_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_find.load(Ordering::SeqCst) {
            return Err("injected lookup failure".into());
        }
        let sessions = self.sessions.lock().unwrap();
        let Some(record) = sessions.get(token) else {
            return Ok(None);
        };
        let users = self.users.lock().unwrap();
        let Some(user) = users.get(&record.user_id) else {
            return Ok(None);
        };
        Ok(Some((record.clone(), user.clone())))
    }

    async fn delete(&self, token: &str) -> Result<(), BoxError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err("injected delete failure".into());
        }
        self.sessions.lock().unwrap().remove(token);
        Ok(())
    }

    async fn update_expires(&self, token: &str, expires_at: Timestamp) -> Result<(), BoxError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_update.load(Ordering::SeqCst) {
            return Err("injected update failure".into());
        }
        *self.last_updated_expiry.lock().unwrap() = Some(expires_at);
        if let Some(record) = self.sessions.lock().unwrap().get_mut(token) {
            record.expires_at = expires_at;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// CountingCodec
// ---------------------------------------------------------------------------

/// A [`TokenCodec`] that delegates to a [`JwtCodec`] over [`TEST_SECRET`]
/// and counts traffic.
pub struct CountingCodec {
    inner: JwtCodec,
    pub decode_calls: AtomicUsize,
    pub encode_calls: AtomicUsize,
}

impl CountingCodec {
    pub fn new() -> Self {
        Self {
            inner: JwtCodec::new(TEST_SECRET),
            decode_calls: AtomicUsize::new(0),
            encode_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl TokenCodec for CountingCodec {
    async fn decode(&self, token: &str) -> Result<SessionClaims, BoxError> {
        self.decode_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.decode(token).await
    }

    async fn encode(&self, claims: &SessionClaims, max_age_secs: i64) -> Result<String, BoxError> {
        self.encode_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.encode(claims, max_age_secs).await
    }
}

// ---------------------------------------------------------------------------
// RecordingEvents
// ---------------------------------------------------------------------------

/// A [`SessionEvents`] sink that captures every notification.
#[derive(Default)]
pub struct RecordingEvents {
    /// `(payload, claims)` pairs in arrival order.
    pub observed: Mutex<Vec<(Value, Option<SessionClaims>)>>,
    pub fail: AtomicBool,
}

impl RecordingEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observed_count(&self) -> usize {
        self.observed.lock().unwrap().len()
    }
}

#[async_trait]
impl SessionEvents for RecordingEvents {
    async fn session_observed(
        &self,
        payload: &Value,
        claims: Option<&SessionClaims>,
    ) -> Result<(), BoxError> {
        self.observed
            .lock()
            .unwrap()
            .push((payload.clone(), claims.cloned()));
        if self.fail.load(Ordering::SeqCst) {
            return Err("injected notification failure".into());
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Callback doubles
// ---------------------------------------------------------------------------

/// Callbacks whose hooks always fail.
pub struct FailingCallbacks;

#[async_trait]
impl SessionCallbacks for FailingCallbacks {
    async fn claims(&self, _claims: SessionClaims) -> Result<SessionClaims, BoxError> {
        Err("injected claims hook failure".into())
    }

    async fn session(
        &self,
        _view: SessionView,
        _source: IdentitySource,
    ) -> Result<Value, BoxError> {
        Err("injected session hook failure".into())
    }
}

/// Callbacks whose claims hook renames the holder and stamps an audit
/// claim. The session hook copies the display name it was handed into the
/// payload, so tests can tell which claims instance reached it.
pub struct RenamingCallbacks;

#[async_trait]
impl SessionCallbacks for RenamingCallbacks {
    async fn claims(&self, mut claims: SessionClaims) -> Result<SessionClaims, BoxError> {
        claims.name = Some("Countess of Lovelace".to_string());
        claims.extra.insert("audited".to_string(), Value::Bool(true));
        Ok(claims)
    }

    async fn session(&self, view: SessionView, source: IdentitySource) -> Result<Value, BoxError> {
        let mut payload = serde_json::to_value(&view)?;
        if let IdentitySource::Claims(claims) = &source {
            if let Some(name) = &claims.name {
                payload["display_name"] = Value::String(name.clone());
            }
        }
        Ok(payload)
    }
}

/// Callbacks that put the subject id back into the payload, the way an
/// application-level override would.
pub struct IdRestoringCallbacks;

#[async_trait]
impl SessionCallbacks for IdRestoringCallbacks {
    async fn session(&self, view: SessionView, source: IdentitySource) -> Result<Value, BoxError> {
        let id = match &source {
            IdentitySource::Claims(claims) => claims.sub.clone(),
            IdentitySource::User(user) => Some(user.id.clone()),
        };
        let mut payload = serde_json::to_value(&view)?;
        if let Some(id) = id {
            payload["user"]["id"] = Value::String(id);
        }
        Ok(payload)
    }
}
