//! HTML rendering of [`AppError`].

use askama::Template;
use askama_web::WebTemplate;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// Error returned by page handlers; renders `notice.html` with the error's
/// status code.
#[derive(Debug)]
pub struct PageError(pub AppError);

#[derive(Template, WebTemplate)]
#[template(path = "notice.html")]
struct NoticeTemplate {
    title: &'static str,
    message: String,
}

impl PageError {
    fn title(status: StatusCode) -> &'static str {
        match status {
            StatusCode::BAD_REQUEST => "Please check your input",
            StatusCode::UNAUTHORIZED => "Please sign in",
            StatusCode::FORBIDDEN => "Access denied",
            StatusCode::NOT_FOUND => "Not found",
            StatusCode::CONFLICT => "Already done",
            _ => "Something went wrong",
        }
    }
}

impl From<AppError> for PageError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

impl From<validator::ValidationErrors> for PageError {
    fn from(e: validator::ValidationErrors) -> Self {
        Self(e.into())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.0.status();

        if status.is_server_error() {
            tracing::error!(error = ?self.0, "Request failed");
        } else {
            tracing::debug!(error = ?self.0, "Request rejected");
        }

        let page = NoticeTemplate {
            title: Self::title(status),
            message: self.0.message().to_string(),
        };

        (status, page).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_is_preserved() {
        let response =
            PageError(AppError::not_found("Candidate not found", json!({}))).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = PageError(AppError::internal("Database error", json!({}))).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
