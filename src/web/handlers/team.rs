//! Team page: approvals for admins, a read-only directory for HR members.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
};

use super::require_admin;
use crate::application::services::CurrentHr;
use crate::domain::entities::HrUser;
use crate::state::AppState;
use crate::utils::image_host::allowed_image_url;
use crate::web::PageError;
use crate::web::notice::{Notice, NoticeQuery};
use crate::web::view::Shell;

const TEAM_PATH: &str = "/dashboard/team";

/// An HR user prepared for display.
pub struct MemberView {
    pub user: HrUser,
    pub display_name: String,
    pub initials: String,
    /// Only set when the avatar host is allowlisted.
    pub avatar_url: Option<String>,
}

impl MemberView {
    fn new(user: HrUser, allowed_hosts: &[String]) -> Self {
        Self {
            display_name: user.name.clone().unwrap_or_else(|| user.email.clone()),
            initials: user.initials(),
            avatar_url: allowed_image_url(user.avatar_url.as_deref(), allowed_hosts),
            user,
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "dashboard/team_admin.html")]
pub struct TeamAdminTemplate {
    shell: Shell,
    approved: Vec<MemberView>,
    pending: Vec<MemberView>,
}

#[derive(Template, WebTemplate)]
#[template(path = "dashboard/team_directory.html")]
pub struct TeamDirectoryTemplate {
    shell: Shell,
    members: Vec<MemberView>,
}

/// Admins see approved and pending members with approve buttons; HR
/// members see the approved team with positions, bios, skills and links.
///
/// # Endpoint
///
/// `GET /dashboard/team`
pub async fn team_page(
    State(st): State<AppState>,
    Extension(current): Extension<CurrentHr>,
    Query(query): Query<NoticeQuery>,
) -> Result<Response, PageError> {
    let roster = st.team_service.roster(current.company_id()).await?;
    let hosts = &st.settings.image_allowed_hosts;
    let view = |users: Vec<HrUser>| -> Vec<MemberView> {
        users.into_iter().map(|u| MemberView::new(u, hosts)).collect()
    };
    let shell = Shell::new(&current, TEAM_PATH, &st.settings).with_notice(query.message());

    if current.is_admin() {
        Ok(TeamAdminTemplate {
            shell,
            approved: view(roster.approved),
            pending: view(roster.pending),
        }
        .into_response())
    } else {
        Ok(TeamDirectoryTemplate {
            shell,
            members: view(roster.approved),
        }
        .into_response())
    }
}

/// # Endpoint
///
/// `POST /dashboard/team/{id}/approve`
pub async fn approve_member(
    State(st): State<AppState>,
    Extension(current): Extension<CurrentHr>,
    Path(id): Path<i64>,
) -> Result<Redirect, PageError> {
    require_admin(&current)?;
    st.team_service.approve(current.company_id(), id).await?;
    Ok(Redirect::to(&Notice::MemberApproved.redirect_to(TEAM_PATH)))
}
