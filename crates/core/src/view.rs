//! Redacted session projection handed to transform hooks.

use serde::{Deserialize, Serialize};

use crate::claims::SessionClaims;
use crate::record::UserRecord;
use crate::types::Timestamp;

/// The identity fields a presentation layer is allowed to see.
///
/// The mapping is fixed: `name`, `email`, and `image` (the token-side
/// `picture` claim). Every other identity field is dropped here — a
/// transform hook has to add it back deliberately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// The minimal, presentation-safe session projection.
///
/// Never contains raw tokens, internal ids, or provider secrets. `expires`
/// serializes as an RFC 3339 string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionView {
    pub user: SessionUser,
    pub expires: Timestamp,
}

impl SessionView {
    /// Build the view from decoded token claims (stateless strategy).
    ///
    /// Missing claims map to `None`; unrecognized claims are dropped.
    pub fn from_claims(claims: &SessionClaims, expires: Timestamp) -> Self {
        Self {
            user: SessionUser {
                name: claims.name.clone(),
                email: claims.email.clone(),
                image: claims.picture.clone(),
            },
            expires,
        }
    }

    /// Build the view from a stored user record (persisted strategy).
    ///
    /// The record's `id` is deliberately not part of the view.
    pub fn from_user(user: &UserRecord, expires: Timestamp) -> Self {
        Self {
            user: SessionUser {
                name: user.name.clone(),
                email: user.email.clone(),
                image: user.image.clone(),
            },
            expires,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
