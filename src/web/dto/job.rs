//! Job posting form.

use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};
use validator::Validate;

use crate::domain::entities::{JobStatus, NewJob};

pub const JOB_LEVELS: &[&str] = &["Intern", "Junior", "Mid", "Senior", "Manager"];

/// `(value, label)` pairs.
pub const EDUCATION_LEVELS: &[(&str, &str)] = &[
    ("SMA/SMK", "SMA / SMK"),
    ("Diploma", "Diploma"),
    ("S1", "Sarjana (S1)"),
    ("S2", "Magister (S2)"),
    ("S3", "Doktor (S3)"),
    ("Tidak Wajib", "Tidak Wajib"),
];

pub const WORK_SETUPS: &[&str] = &["Onsite", "Hybrid", "Remote"];

/// `POST /dashboard/jobs`
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct JobForm {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub job_level: String,
    #[validate(length(min = 1))]
    pub education: String,
    #[validate(length(min = 1))]
    pub employment_type: String,
    #[serde_as(as = "NoneAsEmptyString")]
    pub experience: Option<String>,
    #[validate(length(min = 1))]
    pub work_setup: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[serde_as(as = "NoneAsEmptyString")]
    pub required_skills: Option<String>,
    #[validate(length(min = 1))]
    pub description: String,
}

impl JobForm {
    pub fn into_new_job(self, company_id: i64) -> NewJob {
        NewJob {
            company_id,
            title: self.title,
            job_level: self.job_level,
            education: self.education,
            employment_type: self.employment_type,
            experience: self.experience,
            work_setup: self.work_setup,
            location: self.location,
            required_skills: self.required_skills,
            description: self.description,
        }
    }
}

/// `POST /dashboard/jobs/{id}/status`
#[derive(Debug, Deserialize)]
pub struct JobStatusForm {
    pub status: JobStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fail_validation() {
        let form = JobForm {
            title: "Frontend Developer".to_string(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("description"));
        assert!(!fields.contains_key("title"));
        assert!(!fields.contains_key("experience"));
    }
}
