//! Expiry inspection for the opaque access token.
//!
//! The token is a standard signed JWT issued by the account API. This module
//! only reads the `exp` claim to time proactive refreshes; it never checks
//! the signature (the server is the authority on validity).

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Refresh when fewer than this many seconds remain before expiry.
pub const REFRESH_WINDOW_SECS: i64 = 60;

/// Decode the `exp` claim (seconds since epoch) from an unverified JWT.
///
/// Returns `None` for anything that is not a three-segment token with a
/// base64url JSON payload carrying a numeric `exp`.
#[must_use]
pub fn decode_exp(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("exp")?.as_i64()
}

/// Whether a token needs a refresh: malformed, or expiring within
/// [`REFRESH_WINDOW_SECS`] of `now` (seconds since epoch).
#[must_use]
pub fn needs_refresh(token: &str, now: i64) -> bool {
    match decode_exp(token) {
        Some(exp) => exp - now <= REFRESH_WINDOW_SECS,
        None => true,
    }
}

/// Current wall-clock time in seconds since the Unix epoch.
#[must_use]
pub fn now_unix_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        {
            (js_sys::Date::now() / 1000.0) as i64
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}
