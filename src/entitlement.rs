//! Time-limited entitlement flag

use chrono::{DateTime, Utc};

/// Checks whether a time-limited entitlement is active at `now`
///
/// No expiry means no entitlement. An expiry exactly at `now` still counts
/// as active; only an expiry strictly before `now` deactivates it. The
/// caller supplies `now` so decisions stay reproducible in tests.
pub fn is_active(expires_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match expires_at {
        None => false,
        Some(expires_at) => expires_at >= now,
    }
}
