//! Expiry arithmetic shared by both session strategies.
//!
//! Two pure functions: [`compute_new_expiry`] produces the renewed expiry a
//! resolution hands back to the client, and [`is_refresh_due`] decides
//! whether that renewal is also worth a persisted write. The latter is what
//! throttles write amplification — without it every read of a persisted
//! session would trigger a store update.
//!
//! All arithmetic is epoch-millisecond, matching the wire contract of the
//! timestamps embedded in tokens and cookies.

use chrono::Duration;

use crate::types::Timestamp;

/// Compute the renewed expiry for a session observed at `now`:
/// `now + max_age_secs`.
pub fn compute_new_expiry(max_age_secs: i64, now: Timestamp) -> Timestamp {
    now + Duration::seconds(max_age_secs)
}

/// Decide whether a persisted session's expiry extension is due to be
/// written back.
///
/// Back-solves the original issue time from the stored expiry
/// (`expires_at - max_age_secs`) and returns `true` iff at least
/// `update_age_secs` have elapsed since then:
///
/// ```text
/// expires_ms - max_age_secs*1000 + update_age_secs*1000 <= now_ms
/// ```
///
/// With `update_age_secs == 0` every resolution of a still-valid session is
/// due.
pub fn is_refresh_due(
    expires_at: Timestamp,
    max_age_secs: i64,
    update_age_secs: i64,
    now: Timestamp,
) -> bool {
    let issued_ms = expires_at.timestamp_millis() - max_age_secs * 1000;
    issued_ms + update_age_secs * 1000 <= now.timestamp_millis()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
