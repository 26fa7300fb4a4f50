//! The two strategy handlers.
//!
//! [`stateless`] reseals the client-held token on every successful
//! resolution; [`persisted`] reads a server-side record and writes a
//! refreshed expiry back under the update-age throttle. They share the
//! expiry arithmetic in [`authgate_core::expiry`] and nothing else — each
//! has its own data shape and its own failure recovery.

pub mod persisted;
pub mod stateless;

pub use persisted::PersistedSession;
pub use stateless::StatelessSession;
