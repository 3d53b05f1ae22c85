use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Build an unsigned JWT-shaped token with the given `exp` claim.
fn token_with_exp(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"u1","exp":{exp}}}"#));
    format!("{header}.{payload}.sig")
}

#[test]
fn decode_exp_reads_the_claim() {
    let token = token_with_exp(1_700_000_000);
    assert_eq!(decode_exp(&token), Some(1_700_000_000));
}

#[test]
fn decode_exp_rejects_garbage() {
    assert_eq!(decode_exp("not-a-token"), None);
    assert_eq!(decode_exp(""), None);
    assert_eq!(decode_exp("a.!!!.c"), None);
}

#[test]
fn decode_exp_rejects_payload_without_exp() {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"none"}"#);
    let payload = URL_SAFE_NO_PAD.encode(br#"{"sub":"u1"}"#);
    assert_eq!(decode_exp(&format!("{header}.{payload}.s")), None);
}

#[test]
fn needs_refresh_when_inside_window() {
    let now = 1_000_000;
    assert!(needs_refresh(&token_with_exp(now + 30), now));
    assert!(needs_refresh(&token_with_exp(now + REFRESH_WINDOW_SECS), now));
}

#[test]
fn no_refresh_when_outside_window() {
    let now = 1_000_000;
    assert!(!needs_refresh(&token_with_exp(now + REFRESH_WINDOW_SECS + 1), now));
    assert!(!needs_refresh(&token_with_exp(now + 3_600), now));
}

#[test]
fn needs_refresh_when_malformed() {
    assert!(needs_refresh("garbage", 1_000_000));
}

#[test]
fn needs_refresh_when_already_expired() {
    let now = 1_000_000;
    assert!(needs_refresh(&token_with_exp(now - 10), now));
}
