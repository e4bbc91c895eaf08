//! Repository trait for candidates.

use crate::domain::entities::{Candidate, CandidateStatus, InterviewSchedule, NewCandidate};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for candidates.
///
/// Dashboard operations are scoped to a company through the candidate's job.
/// Status writes are compare-and-set on the current status so concurrent or
/// out-of-order updates do not overwrite each other silently.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCandidateRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// Inserts a candidate with `status = screening`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the (email, job) pair already exists.
    async fn create(&self, new_candidate: NewCandidate) -> Result<Candidate, AppError>;

    /// Looks up an application by (email, job), case-insensitive on email.
    async fn find_by_email_and_job(
        &self,
        email: &str,
        job_id: i64,
    ) -> Result<Option<Candidate>, AppError>;

    async fn find_by_id(&self, id: i64, company_id: i64) -> Result<Option<Candidate>, AppError>;

    /// Company candidates, most recently applied first.
    async fn list_by_company(&self, company_id: i64) -> Result<Vec<Candidate>, AppError>;

    /// Removes one candidate. Returns `Ok(false)` if nothing matched.
    async fn delete(&self, id: i64, company_id: i64) -> Result<bool, AppError>;

    /// Sets `status = to` only when the stored status equals `from`.
    ///
    /// Returns `Ok(false)` if the candidate is missing or its status changed.
    async fn transition(
        &self,
        id: i64,
        company_id: i64,
        from: CandidateStatus,
        to: CandidateStatus,
    ) -> Result<bool, AppError>;

    /// Stores the schedule and moves `interview` to `interview_set`.
    ///
    /// Returns `Ok(false)` if the candidate is missing or not in `interview`.
    async fn schedule_interview(
        &self,
        id: i64,
        company_id: i64,
        schedule: InterviewSchedule,
    ) -> Result<bool, AppError>;

    /// Number of company candidates per status.
    async fn count_by_status(
        &self,
        company_id: i64,
    ) -> Result<Vec<(CandidateStatus, i64)>, AppError>;
}
