//! Sign-in, registration and sign-out.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{HeaderMap, header::SET_COOKIE},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use validator::Validate;

use super::form_error;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::cookie::{SESSION_COOKIE, clear_session_cookie, read_cookie, session_cookie};
use crate::web::dto::auth::{LoginForm, RegisterForm};

#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    email: String,
    error: Option<String>,
}

#[derive(Template, WebTemplate)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    name: String,
    email: String,
    error: Option<String>,
}

/// # Endpoint
///
/// `GET /login`
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate {
        email: String::new(),
        error: None,
    }
}

/// Verifies credentials, sets the session cookie and sends the user to the
/// dashboard (which forwards unapproved users to the pending page).
///
/// # Endpoint
///
/// `POST /login`
pub async fn login_submit(State(st): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    let result = match form.validate() {
        Ok(()) => st.auth_service.sign_in(&form.email, &form.password).await,
        Err(e) => Err(AppError::from(e)),
    };

    match result {
        Ok(signed_in) => with_session(&st, &signed_in.token),
        Err(e) => (
            e.status(),
            LoginTemplate {
                email: form.email,
                error: Some(form_error(&e)),
            },
        )
            .into_response(),
    }
}

/// # Endpoint
///
/// `GET /register`
pub async fn register_page() -> impl IntoResponse {
    RegisterTemplate {
        name: String::new(),
        email: String::new(),
        error: None,
    }
}

/// Creates the account and HR record and signs the user in.
///
/// # Endpoint
///
/// `POST /register`
pub async fn register_submit(
    State(st): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Response {
    let result = match form.validate() {
        Ok(()) => {
            st.auth_service
                .sign_up(&form.email, &form.password, form.name.clone())
                .await
        }
        Err(e) => Err(AppError::from(e)),
    };

    match result {
        Ok(signed_in) => with_session(&st, &signed_in.token),
        Err(e) => (
            e.status(),
            RegisterTemplate {
                name: form.name.unwrap_or_default(),
                email: form.email,
                error: Some(form_error(&e)),
            },
        )
            .into_response(),
    }
}

/// Deletes the session and clears the cookie.
///
/// # Endpoint
///
/// `POST /logout`
pub async fn logout(State(st): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = read_cookie(&headers, SESSION_COOKIE)
        && let Err(e) = st.auth_service.sign_out(&token).await
    {
        tracing::error!(error = ?e, "Failed to delete session on sign-out");
    }

    (
        AppendHeaders([(SET_COOKIE, clear_session_cookie(st.settings.cookie_secure))]),
        Redirect::to("/"),
    )
        .into_response()
}

fn with_session(st: &AppState, token: &str) -> Response {
    let cookie = session_cookie(
        token,
        st.settings.session_ttl.num_seconds(),
        st.settings.cookie_secure,
    );

    (
        AppendHeaders([(SET_COOKIE, cookie)]),
        Redirect::to("/dashboard"),
    )
        .into_response()
}
