//! Domain layer containing business entities and rules.
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository and storage traits define the contracts implemented by
//! `crate::infrastructure`; orchestration lives in
//! [`crate::application::services`].
//!
//! # Modules
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`storage`] - Object storage trait and bucket names
//! - [`auth_gate`] - Presence-only session routing decisions
//! - [`navigation`] - Role-based dashboard navigation
//! - [`pipeline`] - Candidate list filter/search/sort
//! - [`board`] - Public job board filtering

pub mod auth_gate;
pub mod board;
pub mod entities;
pub mod navigation;
pub mod pipeline;
pub mod repositories;
pub mod storage;
