//! Webhook authentication.
//!
//! Shopify signs custom-app webhooks with HMAC-SHA256 over the raw request
//! body, base64-encoded into the `X-Shopify-Hmac-Sha256` header. Stores that
//! use Notifications-style webhooks instead carry a static `token` query
//! parameter. Exactly one mode governs a deployment, chosen once at
//! configuration-load time; the HMAC secret takes precedence when both are
//! configured.
//!
//! The signature MUST be computed over the body bytes exactly as received.
//! Re-serializing a parsed payload changes the bytes and breaks verification.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Active verification mode, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub enum AuthMode {
    /// Shopify HMAC-SHA256 with the shared webhook secret.
    Hmac(String),
    /// Static `token` query parameter.
    Token(String),
    /// Neither secret configured; every request is rejected.
    Unconfigured,
}

impl AuthMode {
    /// Select the mode from configured secrets. Empty strings count as unset.
    pub fn from_secrets(hmac_secret: Option<&str>, token: Option<&str>) -> Self {
        match (non_empty(hmac_secret), non_empty(token)) {
            (Some(secret), _) => AuthMode::Hmac(secret.to_string()),
            (None, Some(token)) => AuthMode::Token(token.to_string()),
            (None, None) => AuthMode::Unconfigured,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Authenticate one webhook delivery against the active mode.
///
/// Never errors: absent or malformed credentials fail closed.
pub fn authenticate(
    mode: &AuthMode,
    raw_body: &[u8],
    hmac_header: Option<&str>,
    query_token: Option<&str>,
) -> bool {
    match mode {
        AuthMode::Hmac(secret) => match hmac_header {
            Some(header) => verify_hmac(raw_body, header, secret),
            None => false,
        },
        AuthMode::Token(expected) => match query_token {
            // Exact match; ct_eq rejects length mismatches without branching.
            Some(token) => token.as_bytes().ct_eq(expected.as_bytes()).into(),
            None => false,
        },
        AuthMode::Unconfigured => false,
    }
}

/// Verify a base64 HMAC-SHA256 digest header against the raw body.
pub fn verify_hmac(raw_body: &[u8], header: &str, secret: &str) -> bool {
    let Ok(claimed) = BASE64.decode(header) else {
        return false;
    };
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(raw_body);
    let digest = mac.finalize().into_bytes();
    digest.ct_eq(&claimed[..]).into()
}
