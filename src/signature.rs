//! Webhook payload signature verification.
//!
//! GitHub signs each delivery with HMAC-SHA1 over the raw body using the
//! shared secret, and sends the result in the `X-Hub-Signature` header as
//! `sha1=<hex>`.

use hmac::{Hmac, Mac};
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

/// Helper function for verifying a GitHub webhook signature.
///
/// Returns `false` for malformed headers (missing `sha1=` prefix, bad hex)
/// as well as digest mismatches. The digest comparison is constant-time.
pub fn verify_github_signature(secret: &str, payload: &[u8], signature_header: &str) -> bool {
    // Expected format: "sha1=..."
    let Some(hex_sig) = signature_header.strip_prefix("sha1=") else {
        return false;
    };

    let Ok(supplied) = hex::decode(hex_sig) else {
        return false;
    };

    let Ok(mut mac) = HmacSha1::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(payload);

    // Constant-time comparison via the HMAC library
    mac.verify_slice(&supplied).is_ok()
}

/// Computes the signature header value ("sha1=<hex>") for a payload.
///
/// This is what GitHub would send for the given secret; used by tests to
/// build authentic requests.
pub fn signature_header(secret: &str, payload: &[u8]) -> String {
    let mut mac =
        HmacSha1::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(payload);
    format!("sha1={}", hex::encode(mac.finalize().into_bytes()))
}
