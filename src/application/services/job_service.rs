//! Job posting management and the public job board.

use std::sync::Arc;

use crate::domain::board::BoardQuery;
use crate::domain::entities::{Job, JobListing, JobStatus, NewJob};
use crate::domain::repositories::JobRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for company-scoped job postings and public listings.
pub struct JobService {
    repository: Arc<dyn JobRepository>,
}

impl JobService {
    pub fn new(repository: Arc<dyn JobRepository>) -> Self {
        Self { repository }
    }

    /// Creates a posting for the caller's company. New postings are always `open`.
    ///
    /// Required text fields are trimmed; blank optional fields become `None`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] listing every blank required field.
    pub async fn create(&self, new_job: NewJob) -> Result<Job, AppError> {
        let new_job = normalize(new_job);

        let missing: Vec<&str> = [
            ("title", &new_job.title),
            ("job_level", &new_job.job_level),
            ("education", &new_job.education),
            ("employment_type", &new_job.employment_type),
            ("work_setup", &new_job.work_setup),
            ("location", &new_job.location),
            ("description", &new_job.description),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();

        if !missing.is_empty() {
            return Err(AppError::bad_request(
                "Please fill in all required fields",
                json!({ "fields": missing }),
            ));
        }

        let job = self.repository.create(new_job).await?;
        tracing::info!(job_id = job.id, company_id = job.company_id, "Job posted");
        Ok(job)
    }

    /// Lists every posting of a company, newest first.
    pub async fn list(&self, company_id: i64) -> Result<Vec<Job>, AppError> {
        self.repository.list_by_company(company_id).await
    }

    /// Deletes one posting owned by the company.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no posting with this id belongs to the company.
    pub async fn delete(&self, company_id: i64, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id, company_id).await? {
            return Err(AppError::not_found("Job not found", json!({ "id": id })));
        }

        tracing::info!(job_id = id, company_id, "Job deleted");
        Ok(())
    }

    /// Opens or closes a posting. Closed postings leave the public board.
    pub async fn set_status(
        &self,
        company_id: i64,
        id: i64,
        status: JobStatus,
    ) -> Result<Job, AppError> {
        self.repository
            .set_status(id, company_id, status)
            .await?
            .ok_or_else(|| AppError::not_found("Job not found", json!({ "id": id })))
    }

    /// Open postings filtered for the public board.
    pub async fn board(&self, query: &BoardQuery) -> Result<Vec<JobListing>, AppError> {
        let listings = self.repository.list_open().await?;
        Ok(query.apply(listings))
    }

    /// A single posting with its company details.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the posting does not exist.
    pub async fn listing(&self, id: i64) -> Result<JobListing, AppError> {
        self.repository
            .find_listing(id)
            .await?
            .ok_or_else(|| AppError::not_found("Job not found", json!({ "id": id })))
    }
}

fn normalize(job: NewJob) -> NewJob {
    let optional = |value: Option<String>| {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    NewJob {
        company_id: job.company_id,
        title: job.title.trim().to_string(),
        job_level: job.job_level.trim().to_string(),
        education: job.education.trim().to_string(),
        employment_type: job.employment_type.trim().to_string(),
        experience: optional(job.experience),
        work_setup: job.work_setup.trim().to_string(),
        location: job.location.trim().to_string(),
        required_skills: optional(job.required_skills),
        description: job.description.trim().to_string(),
    }
}
