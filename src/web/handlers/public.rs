//! Landing and pending-approval pages.

use askama::Template;
use askama_web::WebTemplate;
use axum::http::HeaderMap;
use axum::response::IntoResponse;

use crate::utils::cookie::{SESSION_COOKIE, read_cookie};

#[derive(Template, WebTemplate)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    signed_in: bool,
}

/// Renders the marketing landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn landing_page(headers: HeaderMap) -> impl IntoResponse {
    LandingTemplate {
        signed_in: read_cookie(&headers, SESSION_COOKIE).is_some(),
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "pending_approval.html")]
pub struct PendingApprovalTemplate {}

/// Shown to registered HR users until an admin approves them.
///
/// # Endpoint
///
/// `GET /pending-approval`
pub async fn pending_approval_page() -> impl IntoResponse {
    PendingApprovalTemplate {}
}
