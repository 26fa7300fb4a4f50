//! The resolution entry point.

use authgate_core::claims::SessionClaims;
use authgate_core::cookie::CookieMutation;
use authgate_core::error::ResolveError;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::config::{ConfigError, SessionConfig, SessionStrategy};
use crate::strategy::{persisted, stateless};

// ---------------------------------------------------------------------------
// SessionResponse
// ---------------------------------------------------------------------------

/// The outcome of one resolution: a payload plus the cookie instructions
/// the transport boundary should execute, in order.
///
/// The body is the empty JSON object exactly when no valid session was
/// resolved.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub body: Value,
    pub cookies: Vec<CookieMutation>,
}

impl SessionResponse {
    /// The no-session response: `{}` body, no cookie work.
    pub fn empty() -> Self {
        Self {
            body: Value::Object(Default::default()),
            cookies: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// SessionResolver
// ---------------------------------------------------------------------------

/// Resolves client-presented session tokens under the configured strategy.
///
/// [`resolve`](Self::resolve) never fails: every strategy error is
/// translated into a terminal response here. The recovery differs per
/// strategy, and the difference is load-bearing:
///
/// - **stateless** -- any failure proves the presented token will never
///   become valid, so the response carries an explicit cookie-clear
///   instruction.
/// - **persisted** -- a store or hook failure says nothing about the
///   record itself, so the response is empty *without* clearing the
///   cookie; scrubbing on a transient store outage would log out every
///   active session.
pub struct SessionResolver {
    config: SessionConfig,
}

impl SessionResolver {
    /// Build a resolver, rejecting invalid configuration.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Resolve `token` into a response.
    ///
    /// An absent or empty token short-circuits to the empty response with
    /// zero collaborator calls. After a successful resolution the
    /// session-observed notification fires; its failure is logged and the
    /// response is returned unchanged.
    pub async fn resolve(&self, token: Option<&str>) -> SessionResponse {
        // Cookie parsing can hand over empty values; treat them as absent.
        let token = match token {
            Some(t) if !t.is_empty() => t,
            _ => return SessionResponse::empty(),
        };
        let now = Utc::now();

        match &self.config.strategy {
            SessionStrategy::Stateless { codec } => {
                match stateless::resolve(codec, token, &self.config, now).await {
                    Ok(session) => {
                        let response = SessionResponse {
                            body: session.payload,
                            cookies: vec![CookieMutation::set(
                                &self.config.cookie_name,
                                session.token,
                                session.expires_at,
                            )],
                        };
                        self.notify(&response.body, Some(&session.claims)).await;
                        response
                    }
                    Err(e) => {
                        match &e {
                            ResolveError::TokenInvalid(_) => {
                                tracing::warn!(error = %e, "Rejected stateless session token");
                            }
                            _ => {
                                tracing::error!(error = %e, "Stateless session resolution failed");
                            }
                        }
                        SessionResponse {
                            body: Value::Object(Default::default()),
                            cookies: vec![CookieMutation::clear(&self.config.cookie_name)],
                        }
                    }
                }
            }
            SessionStrategy::Persisted { store } => {
                match persisted::resolve(store, token, &self.config, now).await {
                    Ok(session) => {
                        let response = SessionResponse {
                            body: session.payload,
                            cookies: vec![CookieMutation::set(
                                &self.config.cookie_name,
                                token,
                                session.expires_at,
                            )],
                        };
                        self.notify(&response.body, None).await;
                        response
                    }
                    Err(e @ ResolveError::RecordAbsent)
                    | Err(e @ ResolveError::RecordExpired { .. }) => {
                        tracing::debug!(error = %e, "No usable persisted session");
                        SessionResponse::empty()
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Persisted session resolution failed");
                        SessionResponse::empty()
                    }
                }
            }
        }
    }

    /// Fire the session-observed notification for an already-built
    /// response.
    async fn notify(&self, payload: &Value, claims: Option<&SessionClaims>) {
        if let Err(e) = self.config.events.session_observed(payload, claims).await {
            tracing::error!(error = %e, "Session notification hook failed");
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
