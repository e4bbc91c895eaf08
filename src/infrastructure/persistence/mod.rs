//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx prepared
//! statements. Rows are decoded into private `FromRow` structs and converted
//! into domain entities; text-encoded enums are parsed on the way out.
//!
//! # Repositories
//!
//! - [`PgAccountRepository`] / [`PgSessionRepository`] - Authentication
//! - [`PgCompanyRepository`] - Company profile
//! - [`PgHrUserRepository`] - HR users and approvals
//! - [`PgJobRepository`] - Job postings and public listings
//! - [`PgCandidateRepository`] - Candidates and pipeline status

pub mod pg_account_repository;
pub mod pg_candidate_repository;
pub mod pg_company_repository;
pub mod pg_hr_user_repository;
pub mod pg_job_repository;

pub use pg_account_repository::{PgAccountRepository, PgSessionRepository};
pub use pg_candidate_repository::PgCandidateRepository;
pub use pg_company_repository::PgCompanyRepository;
pub use pg_hr_user_repository::PgHrUserRepository;
pub use pg_job_repository::PgJobRepository;

use crate::error::AppError;
use serde_json::json;
use std::str::FromStr;

/// Parses a text column into a domain enum.
///
/// The schema's CHECK constraints make failures unreachable in practice;
/// they surface as [`AppError::Internal`].
fn parse_column<T>(column: &'static str, value: &str) -> Result<T, AppError>
where
    T: FromStr<Err = String>,
{
    value.parse().map_err(|reason: String| {
        tracing::error!(column, value, reason = %reason, "Unexpected value in database");
        AppError::internal("Database error", json!({ "column": column }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CandidateStatus, Role};

    #[test]
    fn test_parse_column() {
        let status: CandidateStatus = parse_column("candidates.status", "interview_set").unwrap();
        assert_eq!(status, CandidateStatus::InterviewSet);

        let role: Result<Role, _> = parse_column("hr_users.role", "owner");
        assert!(matches!(role, Err(AppError::Internal { .. })));
    }
}
