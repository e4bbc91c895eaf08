//! Opaque session tokens and their keyed digests.
//!
//! The raw token only ever lives in the `auth_token` cookie. The database
//! stores `HMAC-SHA256(signing_secret, token)` as lowercase hex.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Random bytes per token; 32 bytes encode to 43 base64url characters.
const TOKEN_BYTES: usize = 32;

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("System random source unavailable: {0}")]
    Entropy(String),

    #[error("Unusable signing secret: {0}")]
    Key(String),
}

/// Draws a fresh cookie-safe session token from the OS random source.
pub fn generate_token() -> Result<String, TokenError> {
    let mut bytes = [0u8; TOKEN_BYTES];
    getrandom::fill(&mut bytes).map_err(|e| TokenError::Entropy(e.to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

/// Keyed digest stored in place of the raw token.
pub fn hash_token(signing_secret: &str, token: &str) -> Result<String, TokenError> {
    let mut mac = Hmac::<Sha256>::new_from_slice(signing_secret.as_bytes())
        .map_err(|e| TokenError::Key(e.to_string()))?;
    mac.update(token.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}
