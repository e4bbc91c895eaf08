//! Public job board, job detail and application submission.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Multipart, Path, Query, State},
    response::{IntoResponse, Response},
};

use super::form_error;
use crate::domain::board::EMPLOYMENT_TYPES;
use crate::domain::entities::{Job, JobListing};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::image_host::allowed_image_url;
use crate::web::PageError;
use crate::web::dto::board::{BoardParams, applicant_details};
use crate::web::multipart::MultipartForm;
use crate::web::view::SelectOption;

/// A posting with display-ready company fields.
pub struct ListingView {
    pub job: Job,
    pub company_name: String,
    pub company_location: Option<String>,
    pub company_about: Option<String>,
    /// Only set when the logo host is allowlisted.
    pub logo_url: Option<String>,
}

impl ListingView {
    fn new(listing: JobListing, allowed_hosts: &[String]) -> Self {
        let company = listing.company;
        Self {
            logo_url: allowed_image_url(company.logo_url.as_deref(), allowed_hosts),
            company_name: company.name.unwrap_or_else(|| "Unknown company".to_string()),
            company_location: company.location,
            company_about: company.about,
            job: listing.job,
        }
    }

    pub fn initial(&self) -> String {
        self.company_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "jobs/board.html")]
pub struct BoardTemplate {
    listings: Vec<ListingView>,
    search: String,
    type_options: Vec<SelectOption>,
}

/// Values typed into the application form, kept when it is shown again.
#[derive(Debug, Default)]
pub struct ApplyValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "jobs/detail.html")]
pub struct JobDetailTemplate {
    listing: ListingView,
    values: ApplyValues,
    error: Option<String>,
}

#[derive(Template, WebTemplate)]
#[template(path = "jobs/applied.html")]
pub struct AppliedTemplate {
    name: String,
    job_title: String,
    company_name: String,
}

fn type_options(current: &str) -> Vec<SelectOption> {
    let mut options = vec![SelectOption {
        value: "all",
        label: "All types",
        selected: !EMPLOYMENT_TYPES.contains(&current),
    }];
    options.extend(SelectOption::plain(EMPLOYMENT_TYPES, current));
    options
}

/// Lists open postings with search and employment-type filter.
///
/// # Endpoint
///
/// `GET /jobs?search=<text>&type=<employment type|all>`
pub async fn job_board(
    State(st): State<AppState>,
    Query(params): Query<BoardParams>,
) -> Result<impl IntoResponse, PageError> {
    let listings = st.job_service.board(&params.to_query()).await?;
    let hosts = &st.settings.image_allowed_hosts;

    Ok(BoardTemplate {
        listings: listings
            .into_iter()
            .map(|l| ListingView::new(l, hosts))
            .collect(),
        search: params.search_value().to_string(),
        type_options: type_options(params.type_value()),
    })
}

/// Shows a posting with its company and the application form.
///
/// # Endpoint
///
/// `GET /jobs/{id}`
pub async fn job_detail(
    State(st): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, PageError> {
    let listing = st.job_service.listing(id).await?;

    Ok(JobDetailTemplate {
        listing: ListingView::new(listing, &st.settings.image_allowed_hosts),
        values: ApplyValues::default(),
        error: None,
    })
}

/// Accepts an application with a PDF resume.
///
/// # Endpoint
///
/// `POST /jobs/{id}/apply` (`multipart/form-data`: `name`, `email`, `phone`,
/// `city`, `resume`)
///
/// Rejected applications re-render the job page with the message and the
/// typed values; nothing is stored for them.
pub async fn apply(
    State(st): State<AppState>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Result<Response, PageError> {
    let result = match MultipartForm::read(multipart).await {
        Ok(mut form) => {
            let details = applicant_details(&form);
            let resume = form.take_file("resume");
            let values = ApplyValues {
                name: details.name.clone(),
                email: details.email.clone(),
                phone: details.phone.clone(),
                city: details.city.clone(),
            };
            (
                values,
                st.application_service.apply(id, details, resume).await,
            )
        }
        Err(e) => (ApplyValues::default(), Err(e)),
    };

    match result {
        (_, Ok(candidate)) => {
            let listing = st.job_service.listing(id).await?;
            Ok(AppliedTemplate {
                name: candidate.name,
                job_title: candidate.job_title,
                company_name: listing
                    .company
                    .name
                    .unwrap_or_else(|| "the company".to_string()),
            }
            .into_response())
        }
        (_, Err(e @ AppError::NotFound { .. })) => Err(PageError(e)),
        (values, Err(e)) => {
            let listing = st.job_service.listing(id).await?;
            Ok((
                e.status(),
                JobDetailTemplate {
                    listing: ListingView::new(listing, &st.settings.image_allowed_hosts),
                    values,
                    error: Some(form_error(&e)),
                },
            )
                .into_response())
        }
    }
}
