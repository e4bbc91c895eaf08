//! Repository traits for authentication identities and sessions.

use crate::domain::entities::Account;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for email + password accounts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAccountRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, email: &str, password_hash: &str) -> Result<Account, AppError>;

    /// Finds an account by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError>;

    /// Finds an account by its database ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, AppError>;
}

/// Repository interface for login sessions.
///
/// Only HMAC hashes of session tokens are stored; raw tokens live in the
/// client cookie.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Stores a new session.
    async fn create(
        &self,
        account_id: i64,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AppError>;

    /// Returns the account owning an unexpired session, if any.
    async fn find_account_id(&self, token_hash: &str) -> Result<Option<i64>, AppError>;

    /// Deletes a session. Deleting an unknown session is not an error.
    async fn delete(&self, token_hash: &str) -> Result<(), AppError>;

    /// Deletes every expired session and returns how many were removed.
    async fn delete_expired(&self) -> Result<u64, AppError>;
}
