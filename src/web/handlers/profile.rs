//! The signed-in user's own profile.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension,
    extract::{Multipart, Query, State},
    response::{IntoResponse, Redirect, Response},
};

use super::form_error;
use crate::application::services::CurrentHr;
use crate::application::services::team_service::MAX_BIO_WORDS;
use crate::domain::entities::HrUser;
use crate::state::AppState;
use crate::web::PageError;
use crate::web::dto::profile::profile_input;
use crate::web::multipart::MultipartForm;
use crate::web::notice::{Notice, NoticeQuery};
use crate::web::view::Shell;

const PROFILE_PATH: &str = "/dashboard/profile";

#[derive(Template, WebTemplate)]
#[template(path = "dashboard/profile.html")]
pub struct ProfileTemplate {
    shell: Shell,
    user: HrUser,
    /// Skills joined for the comma-separated input.
    skills: String,
    max_bio_words: usize,
    error: Option<String>,
}

impl ProfileTemplate {
    fn new(shell: Shell, user: HrUser, error: Option<String>) -> Self {
        Self {
            shell,
            skills: user.skills.join(", "),
            user,
            max_bio_words: MAX_BIO_WORDS,
            error,
        }
    }
}

/// # Endpoint
///
/// `GET /dashboard/profile`
pub async fn profile_page(
    State(st): State<AppState>,
    Extension(current): Extension<CurrentHr>,
    Query(query): Query<NoticeQuery>,
) -> impl IntoResponse {
    let shell = Shell::new(&current, PROFILE_PATH, &st.settings).with_notice(query.message());
    ProfileTemplate::new(shell, current.user, None)
}

/// Saves profile fields and, when an `avatar` file is attached, the new
/// avatar.
///
/// # Endpoint
///
/// `POST /dashboard/profile` (`multipart/form-data`)
pub async fn update_profile(
    State(st): State<AppState>,
    Extension(current): Extension<CurrentHr>,
    multipart: Multipart,
) -> Result<Response, PageError> {
    let result = match MultipartForm::read(multipart).await {
        Ok(mut form) => {
            let avatar = form.take_file("avatar");
            st.team_service
                .update_profile(&current.user, profile_input(&form), avatar)
                .await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => Ok(Redirect::to(&Notice::ProfileSaved.redirect_to(PROFILE_PATH)).into_response()),
        Err(e) => {
            let shell = Shell::new(&current, PROFILE_PATH, &st.settings);
            let page = ProfileTemplate::new(shell, current.user, Some(form_error(&e)));
            Ok((e.status(), page).into_response())
        }
    }
}
