//! Repository trait definitions for the domain layer.
//!
//! These traits are the application's only view of persistence. Concrete
//! implementations live in `crate::infrastructure::persistence` and are
//! injected through [`crate::state::AppState`]; mock implementations are
//! auto-generated via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`AccountRepository`] / [`SessionRepository`] - Authentication
//! - [`HrUserRepository`] - HR user records
//! - [`CompanyRepository`] - Company profiles
//! - [`JobRepository`] - Job postings
//! - [`CandidateRepository`] - Candidates and pipeline status

pub mod account_repository;
pub mod candidate_repository;
pub mod company_repository;
pub mod hr_user_repository;
pub mod job_repository;

pub use account_repository::{AccountRepository, SessionRepository};
pub use candidate_repository::CandidateRepository;
pub use company_repository::CompanyRepository;
pub use hr_user_repository::HrUserRepository;
pub use job_repository::JobRepository;

#[cfg(test)]
pub use account_repository::{MockAccountRepository, MockSessionRepository};
#[cfg(test)]
pub use candidate_repository::MockCandidateRepository;
#[cfg(test)]
pub use company_repository::MockCompanyRepository;
#[cfg(test)]
pub use hr_user_repository::MockHrUserRepository;
#[cfg(test)]
pub use job_repository::MockJobRepository;
