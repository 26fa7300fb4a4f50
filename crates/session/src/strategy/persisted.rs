//! Persisted strategy: session state in a server-side store.

use std::sync::Arc;

use authgate_core::error::ResolveError;
use authgate_core::expiry;
use authgate_core::types::Timestamp;
use authgate_core::view::SessionView;
use serde_json::Value;

use crate::config::SessionConfig;
use crate::hooks::IdentitySource;
use crate::store::SessionStore;

/// A successfully resolved persisted session.
#[derive(Debug)]
pub struct PersistedSession {
    /// The transform-hook output presented to the caller.
    pub payload: Value,
    /// The renewed expiry for the cookie. The token string itself never
    /// changes in this strategy; only its cookie-level expiry attribute
    /// does.
    pub expires_at: Timestamp,
}

/// Resolve a session from its backing record.
///
/// Looks up the record, evicts it when expired, and writes a refreshed
/// expiry back when the update-age throttle says one is due. The store
/// writes are best-effort: a delete or update failure is logged and the
/// resolution proceeds on the in-memory decision already made. The view
/// handed to the session hook carries the *stored* expiry; the renewed one
/// is only promised to the cookie.
pub async fn resolve(
    store: &Arc<dyn SessionStore>,
    token: &str,
    config: &SessionConfig,
    now: Timestamp,
) -> Result<PersistedSession, ResolveError> {
    let Some((record, user)) = store
        .find_by_token(token)
        .await
        .map_err(ResolveError::StoreFailed)?
    else {
        return Err(ResolveError::RecordAbsent);
    };

    if record.is_expired(now) {
        if let Err(e) = store.delete(token).await {
            tracing::error!(error = %e, "Failed to delete expired session record");
        }
        return Err(ResolveError::RecordExpired {
            expires_at: record.expires_at,
        });
    }

    let expires_at = expiry::compute_new_expiry(config.max_age_secs, now);
    if expiry::is_refresh_due(
        record.expires_at,
        config.max_age_secs,
        config.update_age_secs,
        now,
    ) {
        if let Err(e) = store.update_expires(token, expires_at).await {
            tracing::error!(error = %e, "Failed to persist refreshed session expiry");
        }
    }

    let view = SessionView::from_user(&user, record.expires_at);
    let payload: Value = config
        .callbacks
        .session(view, IdentitySource::User(user))
        .await
        .map_err(ResolveError::HookFailed)?;

    Ok(PersistedSession {
        payload,
        expires_at,
    })
}
