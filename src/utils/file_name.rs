//! Object names for uploaded files.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.\-]").expect("valid character regex"));

/// Builds a resume object name: `{unix_millis}-{applicant_name}.{ext}`.
///
/// Whitespace runs in the applicant name become underscores and characters
/// outside `[A-Za-z0-9_.-]` are dropped. The extension comes from the
/// uploaded file name, defaulting to `pdf`.
pub fn resume_object_name(timestamp_millis: i64, applicant_name: &str, file_name: &str) -> String {
    let underscored = WHITESPACE.replace_all(applicant_name.trim(), "_");
    let safe_name = UNSAFE_CHARS.replace_all(&underscored, "");
    let safe_name = if safe_name.is_empty() {
        "applicant"
    } else {
        safe_name.as_ref()
    };

    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or_else(|| "pdf".to_string());

    format!("{timestamp_millis}-{safe_name}.{extension}")
}

/// Builds an image object path: `{prefix}/{owner_id}-{unix_millis}.png`.
pub fn image_object_path(prefix: &str, owner_id: i64, timestamp_millis: i64) -> String {
    format!("{prefix}/{owner_id}-{timestamp_millis}.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_object_name() {
        assert_eq!(
            resume_object_name(1700000000000, "Jane  Doe", "cv.PDF"),
            "1700000000000-Jane_Doe.pdf"
        );
    }

    #[test]
    fn test_resume_object_name_strips_unsafe_characters() {
        assert_eq!(
            resume_object_name(1, "../Jane/Doe", "resume.pdf"),
            "1-..JaneDoe.pdf"
        );
        assert_eq!(resume_object_name(1, "///", "resume"), "1-applicant.pdf");
    }

    #[test]
    fn test_image_object_path() {
        assert_eq!(image_object_path("logos", 3, 42), "logos/3-42.png");
    }
}
