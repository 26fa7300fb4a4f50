//! Resolver configuration: strategy selection, ages, and hook wiring.

use std::sync::Arc;

use crate::codec::TokenCodec;
use crate::hooks::{DefaultCallbacks, DefaultEvents, SessionCallbacks, SessionEvents};
use crate::store::SessionStore;

/// Default session lifetime: 30 days.
pub const DEFAULT_MAX_AGE_SECS: i64 = 2_592_000;

/// Default refresh-throttle window: 1 day.
pub const DEFAULT_UPDATE_AGE_SECS: i64 = 86_400;

/// Default name of the cookie carrying the session token.
pub const DEFAULT_COOKIE_NAME: &str = "authgate.session-token";

/// Ceiling for both age knobs: one hundred years, in seconds.
///
/// Lifetimes past this have no practical meaning, and the bound keeps the
/// epoch-millisecond expiry arithmetic clear of chrono's overflow panics.
pub const MAX_SESSION_AGE_SECS: i64 = 100 * 365 * 86_400;

// ---------------------------------------------------------------------------
// SessionStrategy
// ---------------------------------------------------------------------------

/// How session state is held, together with the collaborator that holding
/// place requires.
///
/// Carrying the codec or store inside the variant makes a half-configured
/// resolver unrepresentable: selecting the stateless strategy without a
/// codec is not a runtime error, it simply cannot be written.
#[derive(Clone)]
pub enum SessionStrategy {
    /// Session state sealed inside the client-held token.
    Stateless { codec: Arc<dyn TokenCodec> },
    /// Session state in a server-side store; the client holds an opaque
    /// reference token.
    Persisted { store: Arc<dyn SessionStore> },
}

impl SessionStrategy {
    /// Select the stateless strategy backed by `codec`.
    pub fn stateless(codec: Arc<dyn TokenCodec>) -> Self {
        Self::Stateless { codec }
    }

    /// Select the persisted strategy backed by `store`.
    pub fn persisted(store: Arc<dyn SessionStore>) -> Self {
        Self::Persisted { store }
    }

    /// Short label for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stateless { .. } => "stateless",
            Self::Persisted { .. } => "persisted",
        }
    }
}

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Everything one resolution needs, passed explicitly — no process-global
/// state.
///
/// Constructed via [`SessionConfig::new`] and adjusted with the `with_*`
/// builder methods.
#[derive(Clone)]
pub struct SessionConfig {
    /// Strategy variant carrying its codec or store.
    pub strategy: SessionStrategy,
    /// Session lifetime in seconds; renewed expiries are `now + max_age_secs`.
    pub max_age_secs: i64,
    /// Minimum age (seconds) a persisted expiry must reach before it is
    /// written back. `0` writes on every resolution.
    pub update_age_secs: i64,
    /// Name of the cookie carrying the session token.
    pub cookie_name: String,
    /// Caller-supplied transform hooks.
    pub callbacks: Arc<dyn SessionCallbacks>,
    /// Caller-supplied notification hooks.
    pub events: Arc<dyn SessionEvents>,
}

impl SessionConfig {
    /// Create a config with the given strategy and defaults for everything
    /// else (30-day max age, 1-day update age, pass-through hooks).
    pub fn new(strategy: SessionStrategy) -> Self {
        Self {
            strategy,
            max_age_secs: DEFAULT_MAX_AGE_SECS,
            update_age_secs: DEFAULT_UPDATE_AGE_SECS,
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            callbacks: Arc::new(DefaultCallbacks),
            events: Arc::new(DefaultEvents),
        }
    }

    /// Set the session lifetime in seconds.
    pub fn with_max_age(mut self, secs: i64) -> Self {
        self.max_age_secs = secs;
        self
    }

    /// Set the refresh-throttle window in seconds.
    pub fn with_update_age(mut self, secs: i64) -> Self {
        self.update_age_secs = secs;
        self
    }

    /// Set the session cookie name.
    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    /// Install transform hooks.
    pub fn with_callbacks(mut self, callbacks: Arc<dyn SessionCallbacks>) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Install notification hooks.
    pub fn with_events(mut self, events: Arc<dyn SessionEvents>) -> Self {
        self.events = events;
        self
    }

    /// Check the construction invariants.
    ///
    /// Both age knobs must sit inside `0..=`[`MAX_SESSION_AGE_SECS`]
    /// (`max_age_secs` strictly above zero); everything the resolver
    /// computes from a validated config stays in range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_age_secs <= 0 {
            return Err(ConfigError::NonPositiveMaxAge(self.max_age_secs));
        }
        if self.max_age_secs > MAX_SESSION_AGE_SECS {
            return Err(ConfigError::ExcessiveMaxAge(self.max_age_secs));
        }
        if !(0..=MAX_SESSION_AGE_SECS).contains(&self.update_age_secs) {
            return Err(ConfigError::UpdateAgeOutOfRange(self.update_age_secs));
        }
        if self.cookie_name.is_empty() {
            return Err(ConfigError::EmptyCookieName);
        }
        Ok(())
    }
}

/// A configuration rejected at resolver construction.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("max_age_secs must be positive, got {0}")]
    NonPositiveMaxAge(i64),

    #[error("max_age_secs {0} exceeds the 100-year ceiling")]
    ExcessiveMaxAge(i64),

    #[error("update_age_secs must lie between 0 and the 100-year ceiling, got {0}")]
    UpdateAgeOutOfRange(i64),

    #[error("Cookie name must not be empty")]
    EmptyCookieName,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
