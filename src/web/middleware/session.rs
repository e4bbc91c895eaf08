//! Session resolution for dashboard routes.

use axum::{
    extract::{Request, State},
    http::header::SET_COOKIE,
    middleware::Next,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};

use crate::application::services::Resolution;
use crate::state::AppState;
use crate::utils::cookie::{SESSION_COOKIE, clear_session_cookie, read_cookie};
use crate::web::PageError;

/// Resolves the session cookie into a [`crate::application::services::CurrentHr`].
///
/// # Outcomes
///
/// - unknown or expired token: clear the cookie, redirect to `/`
/// - account without an HR record: the session is deleted, cookie cleared,
///   redirect to `/`
/// - HR user not yet approved: redirect to `/pending-approval`
/// - approved: the `CurrentHr` is inserted into request extensions for
///   handlers to take with `Extension<CurrentHr>`
///
/// # Example
///
/// ```rust,ignore
/// let dashboard = web::routes::dashboard_routes()
///     .route_layer(middleware::from_fn_with_state(state.clone(), session::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, PageError> {
    let token = read_cookie(req.headers(), SESSION_COOKIE);

    match st.session_service.resolve(token.as_deref()).await? {
        Resolution::Unauthenticated | Resolution::Orphaned => Ok(signed_out(&st)),
        Resolution::PendingApproval(user) => {
            tracing::debug!(hr_user_id = user.id, "Dashboard request while pending approval");
            Ok(Redirect::to("/pending-approval").into_response())
        }
        Resolution::Active(current) => {
            req.extensions_mut().insert(current);
            Ok(next.run(req).await)
        }
    }
}

fn signed_out(st: &AppState) -> Response {
    (
        AppendHeaders([(SET_COOKIE, clear_session_cookie(st.settings.cookie_secure))]),
        Redirect::to("/"),
    )
        .into_response()
}
