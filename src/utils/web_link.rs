//! Links that are rendered as clickable `href`s to other users.

use url::Url;
use validator::ValidationError;

/// True for absolute `http`/`https` URLs with a host.
pub fn is_web_link(value: &str) -> bool {
    Url::parse(value.trim())
        .map(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
        .unwrap_or(false)
}

/// `validator` hook rejecting `javascript:`, `data:` and other non-web schemes.
pub fn validate_web_link(value: &str) -> Result<(), ValidationError> {
    if is_web_link(value) {
        Ok(())
    } else {
        Err(ValidationError::new("web_link"))
    }
}
