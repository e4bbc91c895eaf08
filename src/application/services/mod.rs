//! Business logic services for the application layer.

pub mod application_service;
pub mod auth_service;
pub mod candidate_service;
pub mod company_service;
pub mod health_service;
pub mod job_service;
pub mod overview_service;
pub mod session_service;
pub mod team_service;

pub use application_service::{ApplicantDetails, ApplicationService};
pub use auth_service::{AuthService, SignedIn};
pub use candidate_service::CandidateService;
pub use company_service::CompanyService;
pub use health_service::{ComponentHealth, HealthReport, HealthService};
pub use job_service::JobService;
pub use overview_service::{Overview, OverviewService};
pub use session_service::{CurrentHr, Resolution, SessionService};
pub use team_service::{ProfileInput, TeamRoster, TeamService};
