//! Presence-only session cookie gate.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::domain::auth_gate::{GateDecision, decide};
use crate::utils::cookie::{SESSION_COOKIE, read_cookie};

/// Redirects based on whether an `auth_token` cookie is present.
///
/// | cookie  | path                        | result                  |
/// |---------|-----------------------------|-------------------------|
/// | absent  | `/dashboard`, `/dashboard/*`| redirect to `/`         |
/// | present | `/login`, `/register`       | redirect to `/dashboard`|
/// | any     | anything else               | pass through            |
///
/// The token itself is not checked here; dashboard routes validate it in
/// [`super::session::layer`].
pub async fn layer(req: Request, next: Next) -> Response {
    let has_session = read_cookie(req.headers(), SESSION_COOKIE).is_some();

    match decide(req.uri().path(), has_session) {
        GateDecision::Pass => next.run(req).await,
        GateDecision::RedirectToLanding => Redirect::to("/").into_response(),
        GateDecision::RedirectToDashboard => Redirect::to("/dashboard").into_response(),
    }
}
