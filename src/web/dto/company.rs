//! Company profile form.

use crate::domain::entities::CompanyProfile;
use crate::web::multipart::MultipartForm;

/// Profile fields of the company form. The logo is read separately from
/// the `logo` file part.
pub fn company_profile(form: &MultipartForm) -> CompanyProfile {
    CompanyProfile {
        name: form.text("name"),
        logo_url: None,
        industry: form.optional("industry"),
        location: form.optional("location"),
        website: form.optional("website"),
        team_size: form.optional("team_size"),
        about: form.optional("about"),
    }
}
