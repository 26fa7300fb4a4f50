//! Decoded contents of a stateless session token.

use serde::{Deserialize, Serialize};

/// The claims carried by a stateless session token.
///
/// The recognized identity claims (`name`, `email`, `picture`) feed the
/// redacted [`SessionView`](crate::view::SessionView); the registered claims
/// (`sub`, `iat`, `exp`, `jti`) are managed by the codec. Everything else a
/// token carries is preserved in [`extra`](Self::extra) so claims added by a
/// transform hook survive the re-encode on the next resolution.
///
/// All fields are optional: a token missing an identity claim is still
/// valid, the field just maps to `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Display name of the token's subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Email address of the token's subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Avatar URL. Token-side name is `picture`; the redacted view exposes
    /// it as `image`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,

    /// Subject identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Issued-at time (UTC Unix timestamp, seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Expiration time (UTC Unix timestamp, seconds).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Unique token identifier, re-minted on every encode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,

    /// Unrecognized claims, passed through encode/decode untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
