//! Resolves a session cookie into the signed-in HR user and its role.

use std::sync::Arc;

use crate::domain::entities::{HrUser, Role};
use crate::domain::navigation::{NavLink, links_for};
use crate::domain::repositories::{AccountRepository, HrUserRepository, SessionRepository};
use crate::error::AppError;
use crate::utils::token::hash_token;

/// An approved HR user with the role-derived navigation.
#[derive(Debug, Clone)]
pub struct CurrentHr {
    pub user: HrUser,
    pub role: Role,
    pub nav: Vec<NavLink>,
}

impl CurrentHr {
    pub fn new(user: HrUser) -> Self {
        let role = user.role;
        Self {
            user,
            role,
            nav: links_for(role),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn company_id(&self) -> i64 {
        self.user.company_id
    }
}

/// Outcome of resolving a session token.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// No cookie, or the token is unknown or expired.
    Unauthenticated,
    /// The account has no HR record. The session has already been deleted.
    Orphaned,
    /// Signed in but not yet approved by an admin.
    PendingApproval(HrUser),
    Active(CurrentHr),
}

/// Looks up the account and HR record behind a session cookie.
pub struct SessionService {
    accounts: Arc<dyn AccountRepository>,
    sessions: Arc<dyn SessionRepository>,
    hr_users: Arc<dyn HrUserRepository>,
    signing_secret: String,
}

impl SessionService {
    pub fn new(
        accounts: Arc<dyn AccountRepository>,
        sessions: Arc<dyn SessionRepository>,
        hr_users: Arc<dyn HrUserRepository>,
        signing_secret: String,
    ) -> Self {
        Self {
            accounts,
            sessions,
            hr_users,
            signing_secret,
        }
    }

    /// Resolves a raw session token.
    ///
    /// A valid session whose account has no HR record is an inconsistency:
    /// the session is deleted and [`Resolution::Orphaned`] returned so the
    /// caller can clear the cookie.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, token: Option<&str>) -> Result<Resolution, AppError> {
        let Some(token) = token else {
            return Ok(Resolution::Unauthenticated);
        };

        let token_hash = hash_token(&self.signing_secret, token)?;

        let Some(account_id) = self.sessions.find_account_id(&token_hash).await? else {
            return Ok(Resolution::Unauthenticated);
        };

        let Some(account) = self.accounts.find_by_id(account_id).await? else {
            return Ok(Resolution::Unauthenticated);
        };

        let Some(user) = self.hr_users.find_by_email(&account.email).await? else {
            tracing::warn!(
                account_id = account.id,
                "Session without HR record, signing out"
            );
            self.sessions.delete(&token_hash).await?;
            return Ok(Resolution::Orphaned);
        };

        if !user.approved {
            return Ok(Resolution::PendingApproval(user));
        }

        Ok(Resolution::Active(CurrentHr::new(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Account;
    use crate::domain::repositories::{
        MockAccountRepository, MockHrUserRepository, MockSessionRepository,
    };
    use chrono::Utc;

    fn account() -> Account {
        Account {
            id: 7,
            email: "jane@acme.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            created_at: Utc::now(),
        }
    }

    fn hr_user(role: Role, approved: bool) -> HrUser {
        HrUser {
            id: 42,
            company_id: 1,
            email: "jane@acme.com".to_string(),
            name: Some("Jane Doe".to_string()),
            role,
            approved,
            approved_at: None,
            avatar_url: None,
            position: None,
            bio: None,
            skills: vec![],
            linkedin: None,
            github: None,
            website: None,
            created_at: Utc::now(),
        }
    }

    fn service(
        accounts: MockAccountRepository,
        sessions: MockSessionRepository,
        hr_users: MockHrUserRepository,
    ) -> SessionService {
        SessionService::new(
            Arc::new(accounts),
            Arc::new(sessions),
            Arc::new(hr_users),
            "test-signing-secret".to_string(),
        )
    }

    fn signed_in(hr: Option<HrUser>) -> SessionService {
        let mut accounts = MockAccountRepository::new();
        let mut sessions = MockSessionRepository::new();
        let mut hr_users = MockHrUserRepository::new();

        sessions
            .expect_find_account_id()
            .returning(|_| Ok(Some(7)));
        accounts
            .expect_find_by_id()
            .withf(|id| *id == 7)
            .returning(|_| Ok(Some(account())));
        hr_users
            .expect_find_by_email()
            .withf(|email| email == "jane@acme.com")
            .returning(move |_| Ok(hr.clone()));

        service(accounts, sessions, hr_users)
    }

    #[tokio::test]
    async fn test_no_token_is_unauthenticated() {
        let result = service(
            MockAccountRepository::new(),
            MockSessionRepository::new(),
            MockHrUserRepository::new(),
        )
        .resolve(None)
        .await
        .unwrap();

        assert!(matches!(result, Resolution::Unauthenticated));
    }

    #[tokio::test]
    async fn test_unknown_token_is_unauthenticated() {
        let mut sessions = MockSessionRepository::new();
        sessions
            .expect_find_account_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(
            MockAccountRepository::new(),
            sessions,
            MockHrUserRepository::new(),
        )
        .resolve(Some("stale"))
        .await
        .unwrap();

        assert!(matches!(result, Resolution::Unauthenticated));
    }

    #[tokio::test]
    async fn test_missing_hr_record_deletes_session() {
        let mut accounts = MockAccountRepository::new();
        let mut sessions = MockSessionRepository::new();
        let mut hr_users = MockHrUserRepository::new();

        sessions
            .expect_find_account_id()
            .returning(|_| Ok(Some(7)));
        accounts
            .expect_find_by_id()
            .returning(|_| Ok(Some(account())));
        hr_users.expect_find_by_email().returning(|_| Ok(None));
        sessions.expect_delete().times(1).returning(|_| Ok(()));

        let result = service(accounts, sessions, hr_users)
            .resolve(Some("token"))
            .await
            .unwrap();

        assert!(matches!(result, Resolution::Orphaned));
    }

    #[tokio::test]
    async fn test_unapproved_user_is_pending() {
        let result = signed_in(Some(hr_user(Role::Hr, false)))
            .resolve(Some("token"))
            .await
            .unwrap();

        assert!(matches!(result, Resolution::PendingApproval(u) if u.id == 42));
    }

    #[tokio::test]
    async fn test_active_hr_gets_base_navigation() {
        let result = signed_in(Some(hr_user(Role::Hr, true)))
            .resolve(Some("token"))
            .await
            .unwrap();

        let Resolution::Active(current) = result else {
            panic!("expected active session");
        };
        assert_eq!(current.role, Role::Hr);
        assert_eq!(current.nav.len(), 3);
        assert!(!current.is_admin());
    }

    #[tokio::test]
    async fn test_active_admin_gets_extended_navigation() {
        let result = signed_in(Some(hr_user(Role::Admin, true)))
            .resolve(Some("token"))
            .await
            .unwrap();

        let Resolution::Active(current) = result else {
            panic!("expected active session");
        };
        assert!(current.is_admin());
        assert!(current.nav.iter().any(|l| l.href == "/dashboard/team"));
        assert!(current.nav.iter().any(|l| l.href == "/dashboard/company"));
    }
}
