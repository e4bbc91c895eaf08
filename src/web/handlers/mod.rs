//! HTML template rendering handlers.
//!
//! Public pages live in [`public`], [`auth`] and [`board`]; everything else
//! sits behind the session resolver and takes the signed-in
//! [`CurrentHr`] from request extensions.

mod auth;
mod board;
mod candidates;
mod company;
mod jobs;
mod overview;
mod profile;
mod public;
mod team;

pub use auth::{login_page, login_submit, logout, register_page, register_submit};
pub use board::{apply, job_board, job_detail};
pub use candidates::{
    candidate_detail, candidates_page, change_candidate_status, delete_candidate,
    schedule_interview,
};
pub use company::{company_page, restore_default_company, update_company};
pub use jobs::{create_job, delete_job, jobs_page, set_job_status};
pub use overview::overview_page;
pub use profile::{profile_page, update_profile};
pub use public::{landing_page, pending_approval_page};
pub use team::{approve_member, team_page};

use serde_json::json;

use crate::application::services::CurrentHr;
use crate::error::AppError;
use crate::web::PageError;

/// Rejects non-admin users with `403`.
fn require_admin(current: &CurrentHr) -> Result<(), PageError> {
    if current.is_admin() {
        Ok(())
    } else {
        tracing::warn!(hr_user_id = current.user.id, "Admin page requested by HR member");
        Err(PageError(AppError::forbidden(
            "Only company admins can open this page",
            json!({ "role": current.role.as_str() }),
        )))
    }
}

/// Message to show inline next to a form. Server errors are logged and
/// replaced by a generic text.
fn form_error(e: &AppError) -> String {
    if e.status().is_server_error() {
        tracing::error!(error = ?e, "Form submission failed");
        "Something went wrong, please try again".to_string()
    } else {
        e.message().to_string()
    }
}
