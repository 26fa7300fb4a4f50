//! Pure domain types and logic for session resolution.
//!
//! This crate holds everything the resolution engine computes *with* but
//! performs no I/O of its own:
//!
//! - [`expiry`] — refresh arithmetic shared by both session strategies.
//! - [`SessionClaims`] — the decoded contents of a stateless token.
//! - [`SessionRecord`] / [`UserRecord`] — the persisted-strategy entities.
//! - [`SessionView`] — the redacted identity projection handed to transform
//!   hooks.
//! - [`CookieMutation`] — one element of the side-effect plan a resolution
//!   emits.
//! - [`ResolveError`] — the failure taxonomy flowing between strategy
//!   handlers and the resolver.

pub mod claims;
pub mod cookie;
pub mod error;
pub mod expiry;
pub mod record;
pub mod types;
pub mod view;

pub use claims::SessionClaims;
pub use cookie::CookieMutation;
pub use error::{BoxError, ResolveError};
pub use record::{SessionRecord, UserRecord};
pub use types::Timestamp;
pub use view::{SessionUser, SessionView};
