//! Job posting management.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension, Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};
use validator::Validate;

use super::form_error;
use crate::application::services::CurrentHr;
use crate::domain::board::EMPLOYMENT_TYPES;
use crate::domain::entities::Job;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::PageError;
use crate::web::dto::job::{EDUCATION_LEVELS, JOB_LEVELS, JobForm, JobStatusForm, WORK_SETUPS};
use crate::web::notice::{Notice, NoticeQuery};
use crate::web::view::{SelectOption, Shell};

const JOBS_PATH: &str = "/dashboard/jobs";

#[derive(Template, WebTemplate)]
#[template(path = "dashboard/jobs.html")]
pub struct JobsTemplate {
    shell: Shell,
    jobs: Vec<Job>,
    form: JobForm,
    error: Option<String>,
    job_levels: Vec<SelectOption>,
    education_levels: Vec<SelectOption>,
    employment_types: Vec<SelectOption>,
    work_setups: Vec<SelectOption>,
}

async fn render(
    st: &AppState,
    current: &CurrentHr,
    form: JobForm,
    error: Option<String>,
    notice: Option<&'static str>,
) -> Result<JobsTemplate, AppError> {
    let jobs = st.job_service.list(current.company_id()).await?;

    Ok(JobsTemplate {
        shell: Shell::new(current, JOBS_PATH, &st.settings).with_notice(notice),
        jobs,
        job_levels: SelectOption::plain(JOB_LEVELS, &form.job_level),
        education_levels: SelectOption::labeled(EDUCATION_LEVELS, &form.education),
        employment_types: SelectOption::plain(EMPLOYMENT_TYPES, &form.employment_type),
        work_setups: SelectOption::plain(WORK_SETUPS, &form.work_setup),
        form,
        error,
    })
}

/// Lists the company's postings, newest first, with the posting form.
///
/// # Endpoint
///
/// `GET /dashboard/jobs`
pub async fn jobs_page(
    State(st): State<AppState>,
    Extension(current): Extension<CurrentHr>,
    Query(query): Query<NoticeQuery>,
) -> Result<impl IntoResponse, PageError> {
    Ok(render(&st, &current, JobForm::default(), None, query.message()).await?)
}

/// Creates an `open` posting for the user's company.
///
/// # Endpoint
///
/// `POST /dashboard/jobs`
pub async fn create_job(
    State(st): State<AppState>,
    Extension(current): Extension<CurrentHr>,
    Form(form): Form<JobForm>,
) -> Result<Response, PageError> {
    let result = match form.validate() {
        Ok(()) => {
            st.job_service
                .create(form.clone().into_new_job(current.company_id()))
                .await
        }
        Err(e) => Err(AppError::from(e)),
    };

    match result {
        Ok(_) => Ok(Redirect::to(&Notice::JobCreated.redirect_to(JOBS_PATH)).into_response()),
        Err(e) => {
            let page = render(&st, &current, form, Some(form_error(&e)), None).await?;
            Ok((e.status(), page).into_response())
        }
    }
}

/// # Endpoint
///
/// `POST /dashboard/jobs/{id}/delete`
pub async fn delete_job(
    State(st): State<AppState>,
    Extension(current): Extension<CurrentHr>,
    Path(id): Path<i64>,
) -> Result<Redirect, PageError> {
    st.job_service.delete(current.company_id(), id).await?;
    Ok(Redirect::to(&Notice::JobDeleted.redirect_to(JOBS_PATH)))
}

/// Opens or closes a posting.
///
/// # Endpoint
///
/// `POST /dashboard/jobs/{id}/status` (`status=open|closed`)
pub async fn set_job_status(
    State(st): State<AppState>,
    Extension(current): Extension<CurrentHr>,
    Path(id): Path<i64>,
    Form(form): Form<JobStatusForm>,
) -> Result<Redirect, PageError> {
    let job = st
        .job_service
        .set_status(current.company_id(), id, form.status)
        .await?;

    tracing::info!(job_id = job.id, status = %job.status, "Job status updated");
    Ok(Redirect::to(&Notice::JobUpdated.redirect_to(JOBS_PATH)))
}
