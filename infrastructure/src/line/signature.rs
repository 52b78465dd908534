//! Webhook signature verification.
//!
//! The platform signs every webhook request:
//! `base64(HMAC-SHA256(channel_secret, raw_body))`, delivered in the
//! `x-line-signature` header. Verification must run against the raw body
//! bytes before any JSON parsing.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the request signature.
pub const SIGNATURE_HEADER: &str = "x-line-signature";

/// Computes the expected signature for a request body.
pub fn sign(channel_secret: &str, body: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(channel_secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(body);
    BASE64.encode(mac.finalize().into_bytes())
}

/// Verifies a request signature against the raw body.
pub fn verify(channel_secret: &str, body: &[u8], signature: &str) -> bool {
    constant_time_eq(sign(channel_secret, body).as_bytes(), signature.as_bytes())
}

/// Constant-time comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_signature() {
        let secret = "test-channel-secret";
        let body = br#"{"events":[]}"#;
        let signature = sign(secret, body);
        assert!(verify(secret, body, &signature));
    }

    #[test]
    fn test_rejects_tampered_body() {
        let secret = "test-channel-secret";
        let signature = sign(secret, br#"{"events":[]}"#);
        assert!(!verify(secret, br#"{"events":[{}]}"#, &signature));
    }

    #[test]
    fn test_rejects_wrong_secret() {
        let body = br#"{"events":[]}"#;
        let signature = sign("secret-a", body);
        assert!(!verify("secret-b", body, &signature));
    }

    #[test]
    fn test_rejects_garbage_signature() {
        assert!(!verify("secret", b"body", "not-a-signature"));
        assert!(!verify("secret", b"body", ""));
    }
}
