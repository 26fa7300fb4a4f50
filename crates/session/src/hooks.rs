//! Caller-supplied transform and notification hooks.
//!
//! The engine invokes these with a fixed contract and assumes nothing about
//! their internals. Both traits ship default implementations so a resolver
//! works without any hook wiring: claims pass through untouched and the
//! payload is simply the serialized redacted view.

use async_trait::async_trait;
use authgate_core::claims::SessionClaims;
use authgate_core::error::BoxError;
use authgate_core::record::UserRecord;
use authgate_core::view::SessionView;
use serde_json::Value;

/// The identity a session payload was derived from.
#[derive(Debug, Clone)]
pub enum IdentitySource {
    /// Stateless strategy: the decoded (and claims-transformed) token
    /// claims.
    Claims(SessionClaims),
    /// Persisted strategy: the stored user record.
    User(UserRecord),
}

// ---------------------------------------------------------------------------
// SessionCallbacks
// ---------------------------------------------------------------------------

/// Transform hooks invoked inside a resolution.
#[async_trait]
pub trait SessionCallbacks: Send + Sync {
    /// Transform decoded claims before they are re-encoded into the fresh
    /// token (stateless strategy only).
    ///
    /// Whatever this returns is what the client carries next, so hooks can
    /// add, rewrite, or drop claims here.
    async fn claims(&self, claims: SessionClaims) -> Result<SessionClaims, BoxError> {
        Ok(claims)
    }

    /// Shape the payload handed back to the caller.
    ///
    /// Receives the redacted [`SessionView`] plus the identity it was
    /// derived from; the returned value is passed through opaquely. Fields
    /// the redaction dropped can be added back here deliberately.
    async fn session(&self, view: SessionView, source: IdentitySource) -> Result<Value, BoxError> {
        let _ = source;
        Ok(serde_json::to_value(&view)?)
    }
}

/// The pass-through [`SessionCallbacks`].
pub struct DefaultCallbacks;

#[async_trait]
impl SessionCallbacks for DefaultCallbacks {}

// ---------------------------------------------------------------------------
// SessionEvents
// ---------------------------------------------------------------------------

/// Notification hooks fired after a resolution.
#[async_trait]
pub trait SessionEvents: Send + Sync {
    /// A session was successfully resolved.
    ///
    /// `claims` is present only for the stateless strategy. This is
    /// fire-and-forget from the resolver's perspective: an error is logged
    /// and never alters the already-built response.
    async fn session_observed(
        &self,
        payload: &Value,
        claims: Option<&SessionClaims>,
    ) -> Result<(), BoxError> {
        let _ = (payload, claims);
        Ok(())
    }
}

/// The no-op [`SessionEvents`].
pub struct DefaultEvents;

#[async_trait]
impl SessionEvents for DefaultEvents {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
