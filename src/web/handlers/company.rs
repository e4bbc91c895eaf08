//! Company profile page (admins only).

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension,
    extract::{Multipart, Query, State},
    response::{IntoResponse, Redirect, Response},
};

use super::{form_error, require_admin};
use crate::application::services::CurrentHr;
use crate::domain::entities::Company;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::image_host::allowed_image_url;
use crate::web::PageError;
use crate::web::dto::company::company_profile;
use crate::web::multipart::MultipartForm;
use crate::web::notice::{Notice, NoticeQuery};
use crate::web::view::Shell;

const COMPANY_PATH: &str = "/dashboard/company";

#[derive(Template, WebTemplate)]
#[template(path = "dashboard/company.html")]
pub struct CompanyTemplate {
    shell: Shell,
    company: Company,
    /// Only set when the logo host is allowlisted.
    logo_url: Option<String>,
    error: Option<String>,
}

async fn render(
    st: &AppState,
    current: &CurrentHr,
    error: Option<String>,
    notice: Option<&'static str>,
) -> Result<CompanyTemplate, AppError> {
    let company = st.company_service.get(current.company_id()).await?;

    Ok(CompanyTemplate {
        shell: Shell::new(current, COMPANY_PATH, &st.settings).with_notice(notice),
        logo_url: allowed_image_url(
            company.logo_url.as_deref(),
            &st.settings.image_allowed_hosts,
        ),
        company,
        error,
    })
}

/// Company profile with the edit form.
///
/// # Endpoint
///
/// `GET /dashboard/company`
pub async fn company_page(
    State(st): State<AppState>,
    Extension(current): Extension<CurrentHr>,
    Query(query): Query<NoticeQuery>,
) -> Result<impl IntoResponse, PageError> {
    require_admin(&current)?;
    Ok(render(&st, &current, None, query.message()).await?)
}

/// Saves the profile and, when a `logo` file is attached, the new logo.
///
/// # Endpoint
///
/// `POST /dashboard/company` (`multipart/form-data`)
pub async fn update_company(
    State(st): State<AppState>,
    Extension(current): Extension<CurrentHr>,
    multipart: Multipart,
) -> Result<Response, PageError> {
    require_admin(&current)?;

    let result = match MultipartForm::read(multipart).await {
        Ok(mut form) => {
            let logo = form.take_file("logo");
            st.company_service
                .update(current.company_id(), company_profile(&form), logo)
                .await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(_) => Ok(Redirect::to(&Notice::CompanySaved.redirect_to(COMPANY_PATH)).into_response()),
        Err(e) => {
            let page = render(&st, &current, Some(form_error(&e)), None).await?;
            Ok((e.status(), page).into_response())
        }
    }
}

/// Resets the profile text to the defaults, keeping the logo.
///
/// # Endpoint
///
/// `POST /dashboard/company/default`
pub async fn restore_default_company(
    State(st): State<AppState>,
    Extension(current): Extension<CurrentHr>,
) -> Result<Redirect, PageError> {
    require_admin(&current)?;
    st.company_service
        .restore_default(current.company_id())
        .await?;
    tracing::info!(company_id = current.company_id(), "Company profile reset to defaults");
    Ok(Redirect::to(&Notice::CompanyReset.redirect_to(COMPANY_PATH)))
}
