//! Repository trait for HR user records.

use crate::domain::entities::{HrUser, NewHrUser, ProfileUpdate};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for HR users.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgHrUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HrUserRepository: Send + Sync {
    /// Creates an HR record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a record with the same email exists.
    async fn create(&self, new_user: NewHrUser) -> Result<HrUser, AppError>;

    /// Finds the HR record linked to an account email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> Result<Option<HrUser>, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<HrUser>, AppError>;

    /// Total number of HR records across all companies.
    async fn count(&self) -> Result<i64, AppError>;

    /// All members of a company, approved first, then by name.
    async fn list_by_company(&self, company_id: i64) -> Result<Vec<HrUser>, AppError>;

    /// Number of members still awaiting approval.
    async fn count_pending(&self, company_id: i64) -> Result<i64, AppError>;

    /// Sets `approved = true` and `approved_at = now()`.
    ///
    /// Returns `Ok(None)` if no pending member with this id exists in the company.
    async fn approve(&self, id: i64, company_id: i64) -> Result<Option<HrUser>, AppError>;

    /// Overwrites the editable profile fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    async fn update_profile(&self, id: i64, update: ProfileUpdate) -> Result<HrUser, AppError>;
}
