//! HMAC-SHA256 signature generation for KuCoin API authentication.
//!
//! KuCoin private endpoints require a signature computed as:
//! ```text
//! hex(HMAC-SHA256(base64(path + "/" + nonce + "/" + canonical_form), api_secret))
//! ```
//!
//! The signature is sent in the `KC-API-SIGNATURE` header, next to the nonce in
//! `KC-API-NONCE` and the key in `KC-API-KEY`.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;

type HmacSha256 = Hmac<Sha256>;

/// Build the string that gets base64-encoded before signing.
pub fn signature_payload(url_path: &str, nonce: u64, canonical_form: &str) -> String {
    format!("{url_path}/{nonce}/{canonical_form}")
}

/// Sign a request for KuCoin's private API.
///
/// # Arguments
///
/// * `url_path` - The path component only (e.g., "/v1/user/info"), no host or query
/// * `canonical_form` - Sorted `key=value&...` parameters, empty when there are none
/// * `nonce` - Milliseconds since the UNIX epoch, as sent in `KC-API-NONCE`
/// * `api_secret` - The raw API secret used as HMAC key
///
/// # Returns
///
/// Lowercase hex-encoded HMAC-SHA256 signature (64 characters). Signing
/// cannot fail: HMAC takes keys of any length, the empty key included.
/// Blank secrets are refused earlier, when the client attaches credentials.
///
/// # Example
///
/// ```rust
/// use kucoin_api_client::auth::sign;
///
/// let signature = sign("/v1/order", "amount=10&price=1.1&type=BUY", 1700000000000, "test_secret");
/// assert_eq!(signature.len(), 64);
/// ```
pub fn sign(url_path: &str, canonical_form: &str, nonce: u64, api_secret: &str) -> String {
    let payload = signature_payload(url_path, nonce, canonical_form);
    let encoded = BASE64.encode(payload.as_bytes());

    // Longer keys are hashed and shorter ones padded, so no length is rejected.
    let mut hmac = HmacSha256::new_from_slice(api_secret.as_bytes())
        .expect("HMAC-SHA256 accepts keys of any length");
    hmac.update(encoded.as_bytes());

    hex::encode(hmac.finalize().into_bytes())
}

/// Sign a request using the secret held by `credentials`.
pub fn sign_request(
    credentials: &Credentials,
    url_path: &str,
    nonce: u64,
    canonical_form: &str,
) -> String {
    sign(url_path, canonical_form, nonce, credentials.expose_secret())
}
