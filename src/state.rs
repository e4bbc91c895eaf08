//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::api::middleware::rate_limit::RateLimitSettings;
use crate::application::services::{
    ApplicationService, AuthService, CandidateService, CompanyService, HealthService, JobService,
    OverviewService, SessionService, TeamService,
};
use crate::domain::repositories::{
    AccountRepository, CandidateRepository, CompanyRepository, HrUserRepository, JobRepository,
    SessionRepository,
};
use crate::domain::storage::ObjectStorage;

/// Every repository the services are built from.
#[derive(Clone)]
pub struct Repositories {
    pub accounts: Arc<dyn AccountRepository>,
    pub sessions: Arc<dyn SessionRepository>,
    pub companies: Arc<dyn CompanyRepository>,
    pub hr_users: Arc<dyn HrUserRepository>,
    pub jobs: Arc<dyn JobRepository>,
    pub candidates: Arc<dyn CandidateRepository>,
}

/// Settings the web layer reads at request time.
#[derive(Debug, Clone)]
pub struct WebSettings {
    pub signing_secret: String,
    pub session_ttl: chrono::Duration,
    /// Adds `Secure` to the session cookie.
    pub cookie_secure: bool,
    /// Hosts allowed as `src` of remote images (logos, avatars).
    pub image_allowed_hosts: Vec<String>,
    /// Request body limit for multipart uploads.
    pub max_upload_bytes: usize,
    pub rate_limit: RateLimitSettings,
}

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub session_service: Arc<SessionService>,
    pub job_service: Arc<JobService>,
    pub application_service: Arc<ApplicationService>,
    pub candidate_service: Arc<CandidateService>,
    pub company_service: Arc<CompanyService>,
    pub team_service: Arc<TeamService>,
    pub overview_service: Arc<OverviewService>,
    pub health_service: Arc<HealthService>,
    pub settings: Arc<WebSettings>,
}

impl AppState {
    /// Wires every service from the given repositories and storage.
    pub fn new(
        repos: Repositories,
        storage: Arc<dyn ObjectStorage>,
        settings: WebSettings,
    ) -> Self {
        let auth_service = AuthService::new(
            repos.accounts.clone(),
            repos.sessions.clone(),
            repos.hr_users.clone(),
            repos.companies.clone(),
            settings.signing_secret.clone(),
            settings.session_ttl,
        );
        let session_service = SessionService::new(
            repos.accounts,
            repos.sessions,
            repos.hr_users.clone(),
            settings.signing_secret.clone(),
        );
        let application_service = ApplicationService::new(
            repos.jobs.clone(),
            repos.candidates.clone(),
            storage.clone(),
        );
        let overview_service = OverviewService::new(
            repos.jobs.clone(),
            repos.candidates.clone(),
            repos.hr_users.clone(),
        );

        Self {
            auth_service: Arc::new(auth_service),
            session_service: Arc::new(session_service),
            job_service: Arc::new(JobService::new(repos.jobs)),
            application_service: Arc::new(application_service),
            candidate_service: Arc::new(CandidateService::new(repos.candidates)),
            company_service: Arc::new(CompanyService::new(repos.companies, storage.clone())),
            team_service: Arc::new(TeamService::new(repos.hr_users.clone(), storage.clone())),
            overview_service: Arc::new(overview_service),
            health_service: Arc::new(HealthService::new(repos.hr_users, storage)),
            settings: Arc::new(settings),
        }
    }
}
