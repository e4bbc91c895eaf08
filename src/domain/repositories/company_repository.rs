//! Repository trait for company profiles.

use crate::domain::entities::{Company, CompanyProfile};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for company profiles.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCompanyRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn create(&self, profile: CompanyProfile) -> Result<Company, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Company>, AppError>;

    /// Returns the earliest created company, used as the tenant new
    /// registrations join.
    async fn find_first(&self) -> Result<Option<Company>, AppError>;

    /// Overwrites every profile field.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the company does not exist.
    async fn update(&self, id: i64, profile: CompanyProfile) -> Result<Company, AppError>;
}
