//! Web route tables.
//!
//! Pages and form submissions are split so that submissions can carry the
//! stricter rate limit.

use crate::state::AppState;
use crate::web::handlers::{
    apply, approve_member, candidate_detail, candidates_page, change_candidate_status,
    company_page, create_job, delete_candidate, delete_job, job_board, job_detail, jobs_page,
    landing_page, login_page, login_submit, logout, overview_page, pending_approval_page,
    profile_page, register_page, register_submit, restore_default_company, schedule_interview,
    set_job_status, team_page, update_company, update_profile,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Public pages.
///
/// # Endpoints
///
/// - `GET /` - Landing page
/// - `GET /login`, `GET /register` - Auth forms
/// - `GET /jobs` - Job board
/// - `GET /jobs/{id}` - Job detail and application form
/// - `GET /pending-approval` - Waiting page for unapproved HR users
pub fn public_pages() -> Router<AppState> {
    Router::new()
        .route("/", get(landing_page))
        .route("/login", get(login_page))
        .route("/register", get(register_page))
        .route("/jobs", get(job_board))
        .route("/jobs/{id}", get(job_detail))
        .route("/pending-approval", get(pending_approval_page))
}

/// Public form submissions.
///
/// # Endpoints
///
/// - `POST /login`, `POST /register`, `POST /logout`
/// - `POST /jobs/{id}/apply` - Application with PDF resume
pub fn public_actions() -> Router<AppState> {
    Router::new()
        .route("/login", post(login_submit))
        .route("/register", post(register_submit))
        .route("/logout", post(logout))
        .route("/jobs/{id}/apply", post(apply))
}

/// Dashboard pages. Requires the session resolver.
///
/// # Endpoints
///
/// - `GET /dashboard` - Overview
/// - `GET /dashboard/jobs` - Postings and posting form
/// - `GET /dashboard/candidates` - Pipeline list
/// - `GET /dashboard/candidates/{id}` - Candidate detail
/// - `GET /dashboard/company` - Company profile (admins)
/// - `GET /dashboard/team` - Team approvals (admins) or directory
/// - `GET /dashboard/profile` - Own profile
pub fn dashboard_pages() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(overview_page))
        .route("/dashboard/jobs", get(jobs_page))
        .route("/dashboard/candidates", get(candidates_page))
        .route("/dashboard/candidates/{id}", get(candidate_detail))
        .route("/dashboard/company", get(company_page))
        .route("/dashboard/team", get(team_page))
        .route("/dashboard/profile", get(profile_page))
}

/// Dashboard form submissions. Requires the session resolver.
pub fn dashboard_actions() -> Router<AppState> {
    Router::new()
        .route("/dashboard/jobs", post(create_job))
        .route("/dashboard/jobs/{id}/delete", post(delete_job))
        .route("/dashboard/jobs/{id}/status", post(set_job_status))
        .route("/dashboard/candidates/{id}/delete", post(delete_candidate))
        .route(
            "/dashboard/candidates/{id}/status",
            post(change_candidate_status),
        )
        .route(
            "/dashboard/candidates/{id}/schedule",
            post(schedule_interview),
        )
        .route("/dashboard/company", post(update_company))
        .route("/dashboard/company/default", post(restore_default_company))
        .route("/dashboard/team/{id}/approve", post(approve_member))
        .route("/dashboard/profile", post(update_profile))
}
