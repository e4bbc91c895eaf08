//! Own-profile form.

use crate::application::services::ProfileInput;
use crate::web::multipart::MultipartForm;

/// Profile fields of the profile form. The avatar is read separately from
/// the `avatar` file part.
pub fn profile_input(form: &MultipartForm) -> ProfileInput {
    ProfileInput {
        name: form.optional("name"),
        position: form.optional("position"),
        bio: form.optional("bio"),
        skills: form.optional("skills"),
        linkedin: form.optional("linkedin"),
        github: form.optional("github"),
        website: form.optional("website"),
    }
}
