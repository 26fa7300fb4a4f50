//! Failure taxonomy for session resolution.
//!
//! An absent token is deliberately *not* represented here: the resolver
//! answers it with an empty response before any strategy runs, so it never
//! flows through an error path.

use crate::types::Timestamp;

/// Boxed error returned by collaborator traits (codec, store, hooks).
///
/// Collaborators are caller-supplied, so their concrete error types are
/// unknowable here; the box preserves the message and source chain.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Why a strategy handler could not produce a resolved session.
///
/// Every variant maps to a defined recovery in the resolver — none of them
/// escape to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The client-held token failed to decode, or the refreshed claims
    /// failed to re-encode. The token can never become valid, so the
    /// resolver scrubs the client cookie.
    #[error("Session token rejected by codec: {0}")]
    TokenInvalid(BoxError),

    /// The persisted record exists but its expiry is in the past. The
    /// handler has already requested deletion of the record.
    #[error("Session record expired at {expires_at}")]
    RecordExpired { expires_at: Timestamp },

    /// No persisted record matches the presented token.
    #[error("No session record matches the presented token")]
    RecordAbsent,

    /// The store lookup itself failed. Says nothing about whether the
    /// record exists, so the resolver must not scrub the cookie.
    #[error("Session store lookup failed: {0}")]
    StoreFailed(BoxError),

    /// A caller-supplied transform hook failed.
    #[error("Session transform hook failed: {0}")]
    HookFailed(BoxError),
}
