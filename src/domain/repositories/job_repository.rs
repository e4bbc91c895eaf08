//! Repository trait for job postings.

use crate::domain::entities::{Job, JobListing, JobStatus, NewJob};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for job postings.
///
/// Dashboard operations are scoped by `company_id`; public board queries
/// only ever return `open` postings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgJobRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Inserts a posting with `status = open`.
    async fn create(&self, new_job: NewJob) -> Result<Job, AppError>;

    /// Finds a posting regardless of status or company.
    async fn find_by_id(&self, id: i64) -> Result<Option<Job>, AppError>;

    /// Finds a posting with its company display fields.
    async fn find_listing(&self, id: i64) -> Result<Option<JobListing>, AppError>;

    /// Company postings, newest first.
    async fn list_by_company(&self, company_id: i64) -> Result<Vec<Job>, AppError>;

    /// All open postings with company display fields, newest first.
    async fn list_open(&self) -> Result<Vec<JobListing>, AppError>;

    /// Number of open postings of a company.
    async fn count_open(&self, company_id: i64) -> Result<i64, AppError>;

    /// Removes one posting. Returns `Ok(false)` if nothing matched.
    async fn delete(&self, id: i64, company_id: i64) -> Result<bool, AppError>;

    /// Updates the posting status. Returns `Ok(None)` if nothing matched.
    async fn set_status(
        &self,
        id: i64,
        company_id: i64,
        status: JobStatus,
    ) -> Result<Option<Job>, AppError>;
}
