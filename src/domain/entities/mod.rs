//! Core domain entities representing the recruitment data model.
//!
//! # Entity Types
//!
//! - [`Company`] - A tenant's company profile
//! - [`Account`] - An authentication identity
//! - [`HrUser`] - A recruiter or admin belonging to a company
//! - [`Job`] - A job posting
//! - [`Candidate`] - An application to a job, with its pipeline status
//!
//! Creation inputs use separate structs (`NewJob`, `NewCandidate`, `NewHrUser`).

pub mod account;
pub mod candidate;
pub mod company;
pub mod hr_user;
pub mod job;

pub use account::Account;
pub use candidate::{Candidate, CandidateStatus, InterviewSchedule, NewCandidate};
pub use company::{Company, CompanyProfile};
pub use hr_user::{HrUser, NewHrUser, ProfileUpdate, Role};
pub use job::{CompanySummary, Job, JobListing, JobStatus, NewJob};
