//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services hold repository trait objects and
//! provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Sign up, sign in, sign out
//! - [`services::session_service::SessionService`] - Session and role resolution
//! - [`services::overview_service::OverviewService`] - Dashboard counters
//! - [`services::job_service::JobService`] - Job postings and the public board
//! - [`services::application_service::ApplicationService`] - Resume-backed applications
//! - [`services::candidate_service::CandidateService`] - Candidate pipeline
//! - [`services::company_service::CompanyService`] - Company profile
//! - [`services::team_service::TeamService`] - Team roster, approvals, profiles
//! - [`services::health_service::HealthService`] - Database and storage probes

pub mod services;
