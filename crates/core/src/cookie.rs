//! Cookie mutations: the side-effect plan a resolution emits.
//!
//! This core never touches HTTP. It describes what should happen to the
//! client-held cookie and the transport boundary executes the instruction,
//! including wire-format serialization and any chunking.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// An instruction to set or clear one client-held cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CookieMutation {
    /// Write `value` under `name` with the given expiry attribute.
    Set {
        name: String,
        value: String,
        expires_at: Timestamp,
    },
    /// Remove the cookie named `name`.
    Clear { name: String },
}

impl CookieMutation {
    /// Build a set instruction.
    pub fn set(name: impl Into<String>, value: impl Into<String>, expires_at: Timestamp) -> Self {
        Self::Set {
            name: name.into(),
            value: value.into(),
            expires_at,
        }
    }

    /// Build a clear instruction.
    pub fn clear(name: impl Into<String>) -> Self {
        Self::Clear { name: name.into() }
    }

    /// The cookie this instruction applies to.
    pub fn name(&self) -> &str {
        match self {
            Self::Set { name, .. } => name,
            Self::Clear { name } => name,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
