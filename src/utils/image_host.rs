//! Allowlist for remotely hosted images.

use url::Url;

/// Returns the URL unchanged when it may be rendered as an image.
///
/// Root-relative paths (served by this application) are always allowed;
/// absolute URLs must use http(s) and point at an allowlisted host.
pub fn allowed_image_url(url: Option<&str>, allowed_hosts: &[String]) -> Option<String> {
    let url = url?.trim();
    if url.is_empty() {
        return None;
    }

    if url.starts_with('/') && !url.starts_with("//") {
        return Some(url.to_string());
    }

    let parsed = Url::parse(url).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }

    let host = parsed.host_str()?;
    allowed_hosts
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(host))
        .then(|| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hosts() -> Vec<String> {
        vec!["files.nextstep.test".to_string()]
    }

    #[test]
    fn test_allowlisted_host() {
        let url = "https://files.nextstep.test/storage/logos/1.png";
        assert_eq!(allowed_image_url(Some(url), &hosts()), Some(url.to_string()));
    }

    #[test]
    fn test_other_host_rejected() {
        assert_eq!(
            allowed_image_url(Some("https://evil.test/x.png"), &hosts()),
            None
        );
    }

    #[test]
    fn test_relative_path_allowed() {
        assert_eq!(
            allowed_image_url(Some("/storage/avatars/1.png"), &hosts()),
            Some("/storage/avatars/1.png".to_string())
        );
        assert_eq!(allowed_image_url(Some("//evil.test/x.png"), &hosts()), None);
    }

    #[test]
    fn test_missing_or_invalid() {
        assert_eq!(allowed_image_url(None, &hosts()), None);
        assert_eq!(allowed_image_url(Some(""), &hosts()), None);
        assert_eq!(allowed_image_url(Some("javascript:alert(1)"), &hosts()), None);
    }
}
