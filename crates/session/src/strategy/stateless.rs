//! Stateless strategy: session state sealed inside the client-held token.

use std::sync::Arc;

use authgate_core::claims::SessionClaims;
use authgate_core::error::ResolveError;
use authgate_core::expiry;
use authgate_core::types::Timestamp;
use authgate_core::view::SessionView;
use serde_json::Value;

use crate::codec::TokenCodec;
use crate::config::SessionConfig;
use crate::hooks::IdentitySource;

/// A successfully resolved stateless session.
#[derive(Debug)]
pub struct StatelessSession {
    /// The transform-hook output presented to the caller.
    pub payload: Value,
    /// The re-signed token the client should carry from now on.
    pub token: String,
    /// Expiry embedded in the fresh token; also the cookie expiry.
    pub expires_at: Timestamp,
    /// The claims sealed into the fresh token.
    pub claims: SessionClaims,
}

/// Resolve a session from the token itself.
///
/// Decodes the token, derives the redacted view from the decoded claims,
/// runs the claims hook and then the session hook, and reseals the
/// transformed claims with a fresh expiry. Renewal is unconditional: no
/// persisted write is involved, only a cookie rewrite, so there is nothing
/// to throttle, and the fresh token's embedded expiry is always at or past
/// the presented one.
///
/// Decode, hook, and encode failures all mean the same thing to the
/// caller: the presented token is unusable and the client cookie must be
/// scrubbed.
pub async fn resolve(
    codec: &Arc<dyn TokenCodec>,
    token: &str,
    config: &SessionConfig,
    now: Timestamp,
) -> Result<StatelessSession, ResolveError> {
    let decoded = codec
        .decode(token)
        .await
        .map_err(ResolveError::TokenInvalid)?;

    let expires_at = expiry::compute_new_expiry(config.max_age_secs, now);
    let view = SessionView::from_claims(&decoded, expires_at);

    let claims = config
        .callbacks
        .claims(decoded)
        .await
        .map_err(ResolveError::HookFailed)?;

    let payload = config
        .callbacks
        .session(view, IdentitySource::Claims(claims.clone()))
        .await
        .map_err(ResolveError::HookFailed)?;

    let token = codec
        .encode(&claims, config.max_age_secs)
        .await
        .map_err(ResolveError::TokenInvalid)?;

    Ok(StatelessSession {
        payload,
        token,
        expires_at,
        claims,
    })
}
