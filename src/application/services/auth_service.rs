//! Account registration, sign-in and sign-out.

use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::domain::entities::{CompanyProfile, HrUser, NewHrUser, Role};
use crate::domain::repositories::{
    AccountRepository, CompanyRepository, HrUserRepository, SessionRepository,
};
use crate::error::AppError;
use crate::utils::password::{hash_password, verify_password};
use crate::utils::token::{generate_token, hash_token};
use serde_json::json;
use validator::ValidateEmail;

const MIN_PASSWORD_LENGTH: usize = 6;

/// Result of a successful sign-up or sign-in.
#[derive(Debug, Clone)]
pub struct SignedIn {
    /// Raw session token to place in the `auth_token` cookie.
    pub token: String,
    pub hr_user: HrUser,
}

/// Service for authenticating HR users with email and password.
///
/// Session tokens are random 32-byte values; only their HMAC-SHA256 hash
/// (keyed by `signing_secret`) is stored, so a database leak does not leak
/// usable cookies.
///
/// The first account ever registered bootstraps the company profile and is
/// approved as `admin`. Every later account joins that company as an
/// unapproved `hr` user and must be approved by an admin.
pub struct AuthService {
    accounts: Arc<dyn AccountRepository>,
    sessions: Arc<dyn SessionRepository>,
    hr_users: Arc<dyn HrUserRepository>,
    companies: Arc<dyn CompanyRepository>,
    signing_secret: String,
    session_ttl: Duration,
}

impl AuthService {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        sessions: Arc<dyn SessionRepository>,
        hr_users: Arc<dyn HrUserRepository>,
        companies: Arc<dyn CompanyRepository>,
        signing_secret: String,
        session_ttl: Duration,
    ) -> Self {
        Self {
            accounts,
            sessions,
            hr_users,
            companies,
            signing_secret,
            session_ttl,
        }
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    /// Registers a new account and signs it in.
    ///
    /// An existing HR record with the same email is reused, which lets
    /// admins pre-provision team members.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed email or short password.
    /// Returns [`AppError::Conflict`] if the email is already registered.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: Option<String>,
    ) -> Result<SignedIn, AppError> {
        let email = normalize_email(email)?;

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::bad_request(
                "Password must be at least 6 characters",
                json!({ "field": "password" }),
            ));
        }

        if self.accounts.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict(
                "An account with this email already exists",
                json!({ "email": email }),
            ));
        }

        let password_hash =
            hash_password(password).map_err(|e| AppError::internal(e.to_string(), json!({})))?;
        let account = self.accounts.create(&email, &password_hash).await?;

        let hr_user = match self.hr_users.find_by_email(&email).await? {
            Some(existing) => existing,
            None => self.provision_hr_user(&email, name).await?,
        };

        tracing::info!(
            account_id = account.id,
            hr_user_id = hr_user.id,
            role = %hr_user.role,
            approved = hr_user.approved,
            "Account registered"
        );

        let token = self.create_session(account.id).await?;
        Ok(SignedIn { token, hr_user })
    }

    /// Verifies credentials and opens a new session.
    ///
    /// Unapproved users still get a session; the caller routes them to the
    /// pending-approval page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for unknown emails or wrong passwords.
    /// Returns [`AppError::Forbidden`] if no HR record is linked to the account.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignedIn, AppError> {
        let email = email.trim().to_lowercase();
        let invalid = || {
            AppError::unauthorized("Invalid email or password", json!({ "reason": "credentials" }))
        };

        let account = self
            .accounts
            .find_by_email(&email)
            .await?
            .ok_or_else(invalid)?;

        let matches = verify_password(password, &account.password_hash)
            .map_err(|e| AppError::internal(e.to_string(), json!({ "account_id": account.id })))?;
        if !matches {
            tracing::warn!(account_id = account.id, "Failed sign-in attempt");
            return Err(invalid());
        }

        let hr_user = self.hr_users.find_by_email(&email).await?.ok_or_else(|| {
            AppError::forbidden(
                "No HR profile is linked to this account",
                json!({ "email": email }),
            )
        })?;

        let token = self.create_session(account.id).await?;
        tracing::info!(account_id = account.id, hr_user_id = hr_user.id, "Signed in");

        Ok(SignedIn { token, hr_user })
    }

    /// Deletes the session behind a raw token. Unknown tokens are ignored.
    pub async fn sign_out(&self, token: &str) -> Result<(), AppError> {
        let token_hash = hash_token(&self.signing_secret, token)?;
        self.sessions.delete(&token_hash).await
    }

    async fn create_session(&self, account_id: i64) -> Result<String, AppError> {
        let token = generate_token()?;
        let token_hash = hash_token(&self.signing_secret, &token)?;
        let expires_at = Utc::now() + self.session_ttl;

        self.sessions
            .create(account_id, &token_hash, expires_at)
            .await?;

        Ok(token)
    }

    async fn provision_hr_user(
        &self,
        email: &str,
        name: Option<String>,
    ) -> Result<HrUser, AppError> {
        let is_first_user = self.hr_users.count().await? == 0;

        let company = match self.companies.find_first().await? {
            Some(company) => company,
            None => {
                self.companies
                    .create(CompanyProfile::default_profile())
                    .await?
            }
        };

        let (role, approved) = if is_first_user {
            (Role::Admin, true)
        } else {
            (Role::Hr, false)
        };

        self.hr_users
            .create(NewHrUser {
                company_id: company.id,
                email: email.to_string(),
                name: name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
                role,
                approved,
            })
            .await
    }
}

fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();

    if !email.validate_email() {
        return Err(AppError::bad_request(
            "Please enter a valid email address",
            json!({ "field": "email" }),
        ));
    }

    Ok(email)
}
