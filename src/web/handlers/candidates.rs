//! Candidate pipeline pages.

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
use crate::domain::entities::{Candidate, CandidateStatus};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::PageError;
use crate::web::dto::candidate::{CandidateListParams, ScheduleForm, StatusForm};
use crate::web::notice::{Notice, NoticeQuery, notice_message};
use crate::web::view::{SelectOption, Shell};

const CANDIDATES_PATH: &str = "/dashboard/candidates";

#[derive(Template, WebTemplate)]
#[template(path = "dashboard/candidates.html")]
pub struct CandidatesTemplate {
    shell: Shell,
    candidates: Vec<Candidate>,
    status_options: Vec<SelectOption>,
    sort_options: Vec<SelectOption>,
    search: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "dashboard/candidate.html")]
pub struct CandidateTemplate {
    shell: Shell,
    candidate: Candidate,
    /// Status buttons offered for the current status.
    actions: Vec<CandidateStatus>,
    error: Option<String>,
}

fn status_options(selected: Option<CandidateStatus>) -> Vec<SelectOption> {
    let all = SelectOption {
        value: "all",
        label: "All statuses",
        selected: selected.is_none(),
    };
    std::iter::once(all)
        .chain(CandidateStatus::ALL.into_iter().map(|s| SelectOption {
            value: s.as_str(),
            label: s.label(),
            selected: selected == Some(s),
        }))
        .collect()
}

/// Lists candidates of the company's jobs with filter, search and sort.
///
/// # Endpoint
///
/// `GET /dashboard/candidates?status=<status|all>&search=<text>&sort=newest|oldest`
pub async fn candidates_page(
    State(st): State<AppState>,
    Extension(current): Extension<CurrentHr>,
    Query(params): Query<CandidateListParams>,
) -> Result<impl IntoResponse, PageError> {
    let query = params.to_query();
    let candidates = st
        .candidate_service
        .list(current.company_id(), &query)
        .await?;

    Ok(CandidatesTemplate {
        shell: Shell::new(&current, CANDIDATES_PATH, &st.settings)
            .with_notice(notice_message(params.notice.as_deref())),
        candidates,
        status_options: status_options(query.status),
        sort_options: SelectOption::labeled(
            &[("newest", "Newest first"), ("oldest", "Oldest first")],
            query.sort.as_str(),
        ),
        search: query.search.unwrap_or_default(),
    })
}

async fn render_detail(
    st: &AppState,
    current: &CurrentHr,
    id: i64,
    error: Option<String>,
    notice: Option<&'static str>,
) -> Result<CandidateTemplate, AppError> {
    let candidate = st.candidate_service.get(current.company_id(), id).await?;
    let path = format!("{CANDIDATES_PATH}/{id}");

    Ok(CandidateTemplate {
        shell: Shell::new(current, &path, &st.settings).with_notice(notice),
        actions: candidate.status.manual_transitions(),
        candidate,
        error,
    })
}

/// Applicant details, resume link, status actions and interview schedule.
///
/// The schedule form is only shown in `interview`; the stored schedule only
/// in `interview_set`.
///
/// # Endpoint
///
/// `GET /dashboard/candidates/{id}`
pub async fn candidate_detail(
    State(st): State<AppState>,
    Extension(current): Extension<CurrentHr>,
    Path(id): Path<i64>,
    Query(query): Query<NoticeQuery>,
) -> Result<impl IntoResponse, PageError> {
    Ok(render_detail(&st, &current, id, None, query.message()).await?)
}

/// # Endpoint
///
/// `POST /dashboard/candidates/{id}/delete`
pub async fn delete_candidate(
    State(st): State<AppState>,
    Extension(current): Extension<CurrentHr>,
    Path(id): Path<i64>,
) -> Result<Redirect, PageError> {
    st.candidate_service.delete(current.company_id(), id).await?;
    Ok(Redirect::to(
        &Notice::CandidateDeleted.redirect_to(CANDIDATES_PATH),
    ))
}

/// Moves the candidate along the transition table.
///
/// # Endpoint
///
/// `POST /dashboard/candidates/{id}/status` (`status=<status>`)
pub async fn change_candidate_status(
    State(st): State<AppState>,
    Extension(current): Extension<CurrentHr>,
    Path(id): Path<i64>,
    Form(form): Form<StatusForm>,
) -> Result<Response, PageError> {
    let result = st
        .candidate_service
        .change_status(current.company_id(), id, form.status)
        .await;

    after_write(&st, &current, id, result.map(|_| ()), Notice::StatusChanged).await
}

/// Stores interview details and moves the candidate to `interview_set`.
///
/// # Endpoint
///
/// `POST /dashboard/candidates/{id}/schedule` (`date`, `time`,
/// `meeting_link`, `notes`)
pub async fn schedule_interview(
    State(st): State<AppState>,
    Extension(current): Extension<CurrentHr>,
    Path(id): Path<i64>,
    Form(form): Form<ScheduleForm>,
) -> Result<Response, PageError> {
    let result = match form.validate() {
        Ok(()) => match form.into_schedule() {
            Ok(schedule) => st
                .candidate_service
                .schedule_interview(current.company_id(), id, schedule)
                .await
                .map(|_| ()),
            Err(e) => Err(e),
        },
        Err(e) => Err(AppError::from(e)),
    };

    after_write(&st, &current, id, result, Notice::InterviewScheduled).await
}

/// Redirects back to the detail page on success; otherwise shows the page
/// again with the error next to the actions.
async fn after_write(
    st: &AppState,
    current: &CurrentHr,
    id: i64,
    result: Result<(), AppError>,
    notice: Notice,
) -> Result<Response, PageError> {
    let path = format!("{CANDIDATES_PATH}/{id}");

    match result {
        Ok(()) => Ok(Redirect::to(&notice.redirect_to(&path)).into_response()),
        Err(e @ AppError::NotFound { .. }) => Err(PageError(e)),
        Err(e) => {
            let page = render_detail(st, current, id, Some(form_error(&e)), None).await?;
            Ok((e.status(), page).into_response())
        }
    }
}
