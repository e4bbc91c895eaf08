//! Public application intake: resume upload followed by candidate insert.

use chrono::Utc;
use std::sync::Arc;

use crate::domain::entities::{Candidate, NewCandidate};
use crate::domain::repositories::{CandidateRepository, JobRepository};
use crate::domain::storage::{FileUpload, ObjectStorage, RESUMES_BUCKET};
use crate::error::AppError;
use crate::utils::file_name::resume_object_name;
use serde_json::json;
use validator::Validate;

/// Upload attempts before a resume name clash is reported as a conflict.
const RESUME_NAME_ATTEMPTS: u32 = 3;

/// Applicant contact details from the application form.
#[derive(Debug, Clone, Validate)]
pub struct ApplicantDetails {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1), email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub city: String,
}

/// Service accepting applications to open job postings.
///
/// Upload and insert are not transactional: when the candidate insert fails
/// after the resume was stored, the resume is removed again before the
/// error is returned.
pub struct ApplicationService {
    jobs: Arc<dyn JobRepository>,
    candidates: Arc<dyn CandidateRepository>,
    storage: Arc<dyn ObjectStorage>,
}

impl ApplicationService {
    pub fn new(
        jobs: Arc<dyn JobRepository>,
        candidates: Arc<dyn CandidateRepository>,
        storage: Arc<dyn ObjectStorage>,
    ) -> Self {
        Self {
            jobs,
            candidates,
            storage,
        }
    }

    /// Submits an application with a PDF resume.
    ///
    /// Checks run before any storage write, in this order: required fields
    /// and email format, resume presence, PDF content type, job exists and is open, no earlier
    /// application with the same email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for missing fields, an invalid email, a missing or
    /// non-PDF resume, or a closed job.
    /// Returns [`AppError::NotFound`] if the job does not exist.
    /// Returns [`AppError::Conflict`] if this email already applied to the job.
    pub async fn apply(
        &self,
        job_id: i64,
        details: ApplicantDetails,
        resume: Option<FileUpload>,
    ) -> Result<Candidate, AppError> {
        let details = ApplicantDetails {
            name: details.name.trim().to_string(),
            email: details.email.trim().to_lowercase(),
            phone: details.phone.trim().to_string(),
            city: details.city.trim().to_string(),
        };

        details.validate()?;

        let resume = resume.filter(|r| !r.bytes.is_empty()).ok_or_else(|| {
            AppError::bad_request("Please upload your resume", json!({ "field": "resume" }))
        })?;

        if !resume.is_pdf() {
            return Err(AppError::bad_request(
                "Only PDF files are allowed",
                json!({ "content_type": resume.content_type }),
            ));
        }

        let job = self
            .jobs
            .find_by_id(job_id)
            .await?
            .ok_or_else(|| AppError::not_found("Job not found", json!({ "id": job_id })))?;

        if !job.is_open() {
            return Err(AppError::bad_request(
                "This position is no longer accepting applications",
                json!({ "job_id": job_id }),
            ));
        }

        if self
            .candidates
            .find_by_email_and_job(&details.email, job_id)
            .await?
            .is_some()
        {
            return Err(already_applied(job_id));
        }

        let object_name = self.upload_resume(&details.name, resume).await?;

        let Some(resume_url) = self.storage.public_url(RESUMES_BUCKET, &object_name) else {
            self.discard_resume(&object_name).await;
            return Err(AppError::internal(
                "Failed to get resume URL",
                json!({ "object": object_name }),
            ));
        };

        let created = self
            .candidates
            .create(NewCandidate {
                job_id,
                name: details.name,
                email: details.email,
                phone: details.phone,
                city: details.city,
                resume_url,
            })
            .await;

        match created {
            Ok(candidate) => {
                tracing::info!(candidate_id = candidate.id, job_id, "Application received");
                Ok(candidate)
            }
            Err(e) => {
                self.discard_resume(&object_name).await;
                match e {
                    AppError::Conflict { .. } => Err(already_applied(job_id)),
                    other => Err(other),
                }
            }
        }
    }

    /// Stores the PDF without overwriting. A name already taken by an
    /// applicant with the same name in the same millisecond moves on to the
    /// next millisecond.
    async fn upload_resume(
        &self,
        applicant_name: &str,
        resume: FileUpload,
    ) -> Result<String, AppError> {
        let mut timestamp = Utc::now().timestamp_millis();
        let mut attempt = 1;

        loop {
            let object_name = resume_object_name(timestamp, applicant_name, &resume.file_name);
            let uploaded = self
                .storage
                .upload(
                    RESUMES_BUCKET,
                    &object_name,
                    resume.bytes.clone(),
                    "application/pdf",
                    false,
                )
                .await;

            match uploaded {
                Ok(()) => return Ok(object_name),
                Err(AppError::Conflict { .. }) if attempt < RESUME_NAME_ATTEMPTS => {
                    tracing::warn!(object = %object_name, "Resume name taken, retrying");
                    timestamp += 1;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn discard_resume(&self, object_name: &str) {
        if let Err(e) = self.storage.remove(RESUMES_BUCKET, object_name).await {
            tracing::error!(
                error = %e,
                object = object_name,
                "Failed to remove orphaned resume"
            );
        }
    }
}

fn already_applied(job_id: i64) -> AppError {
    AppError::conflict(
        "You have already applied for this position",
        json!({ "job_id": job_id }),
    )
}
