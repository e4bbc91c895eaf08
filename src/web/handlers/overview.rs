//! Dashboard overview page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension,
    extract::State,
    response::IntoResponse,
};

use crate::application::services::{CurrentHr, Overview};
use crate::state::AppState;
use crate::web::PageError;
use crate::web::view::Shell;

#[derive(Template, WebTemplate)]
#[template(path = "dashboard/overview.html")]
pub struct OverviewTemplate {
    shell: Shell,
    overview: Overview,
}

/// Headline recruitment numbers for the user's company.
///
/// # Endpoint
///
/// `GET /dashboard`
pub async fn overview_page(
    State(st): State<AppState>,
    Extension(current): Extension<CurrentHr>,
) -> Result<impl IntoResponse, PageError> {
    let overview = st.overview_service.overview(&current).await?;

    Ok(OverviewTemplate {
        shell: Shell::new(&current, "/dashboard", &st.settings),
        overview,
    })
}
