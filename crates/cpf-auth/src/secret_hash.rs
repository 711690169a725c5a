//! `SECRET_HASH` derivation.
//!
//! Confidential user-pool clients must prove possession of the client
//! secret on every authentication call: an HMAC-SHA256 keyed with the
//! client secret over the concatenation `username + client_id` (no
//! separator), encoded as standard base64. The message includes the
//! username, so the value is derived per request and never stored.

use aws_lc_rs::hmac;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Derives the `SECRET_HASH` for a username/client pair.
///
/// Deterministic and infallible for any string inputs.
#[must_use]
pub fn derive(username: &str, client_id: &str, client_secret: &str) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA256, client_secret.as_bytes());

    let mut context = hmac::Context::with_key(&key);
    context.update(username.as_bytes());
    context.update(client_id.as_bytes());

    STANDARD.encode(context.sign().as_ref())
}
