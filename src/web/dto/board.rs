//! Public job board query and application form.

use serde::Deserialize;

use crate::application::services::ApplicantDetails;
use crate::domain::board::{BoardQuery, EMPLOYMENT_TYPES};
use crate::web::multipart::MultipartForm;

/// `GET /jobs?search=..&type=..`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct BoardParams {
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: Option<String>,
}

impl BoardParams {
    /// `all`, blank or unknown employment types mean no filter.
    pub fn to_query(&self) -> BoardQuery {
        BoardQuery {
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            employment_type: self
                .employment_type
                .as_deref()
                .filter(|t| EMPLOYMENT_TYPES.contains(t))
                .map(str::to_string),
        }
    }

    pub fn search_value(&self) -> &str {
        self.search.as_deref().unwrap_or_default()
    }

    pub fn type_value(&self) -> &str {
        self.employment_type.as_deref().unwrap_or("all")
    }
}

/// Text fields of the application form.
pub fn applicant_details(form: &MultipartForm) -> ApplicantDetails {
    ApplicantDetails {
        name: form.text("name"),
        email: form.text("email"),
        phone: form.text("phone"),
        city: form.text("city"),
    }
}
