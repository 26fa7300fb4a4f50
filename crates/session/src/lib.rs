//! Session resolution engine.
//!
//! Resolves an opaque client-presented session token into a validated,
//! possibly-refreshed session payload, under one of two interchangeable
//! strategies:
//!
//! - **stateless** — session state is sealed inside the client-held token;
//!   every successful resolution re-signs it with a fresh expiry.
//! - **persisted** — session state lives in a server-side store; the client
//!   holds only an opaque reference token and expiry extensions are written
//!   back under a refresh throttle.
//!
//! The entry point is [`SessionResolver`]. It performs no I/O of its own:
//! the token codec, the record store, and the transform hooks are injected
//! collaborators, and the outcome is a [`SessionResponse`] — a payload plus
//! a list of cookie mutations for the transport boundary to execute.
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use authgate_session::{JwtCodec, SessionConfig, SessionResolver, SessionStrategy};
//!
//! # async fn demo() -> Result<(), authgate_session::ConfigError> {
//! let config = SessionConfig::new(SessionStrategy::stateless(Arc::new(
//!     JwtCodec::new("a-secret-with-enough-entropy"),
//! )));
//! let resolver = SessionResolver::new(config)?;
//!
//! let response = resolver.resolve(Some("the-cookie-value")).await;
//! // response.body is the session payload (or `{}`), response.cookies the
//! // instructions to apply to the client.
//! # Ok(())
//! # }
//! ```

pub mod codec;
pub mod config;
pub mod hooks;
pub mod resolver;
pub mod store;
pub mod strategy;

pub use codec::{HmacAlgorithm, JwtCodec, TokenCodec};
pub use config::{ConfigError, SessionConfig, SessionStrategy};
pub use hooks::{DefaultCallbacks, DefaultEvents, IdentitySource, SessionCallbacks, SessionEvents};
pub use resolver::{SessionResolver, SessionResponse};
pub use store::{generate_session_token, MemoryStore, SessionStore};
pub use strategy::{PersistedSession, StatelessSession};

// The domain types the engine's API is expressed in.
pub use authgate_core::{
    BoxError, CookieMutation, ResolveError, SessionClaims, SessionRecord, SessionUser, SessionView,
    Timestamp, UserRecord,
};
