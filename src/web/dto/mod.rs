//! Form and query payloads for web pages.

pub mod auth;
pub mod board;
pub mod candidate;
pub mod company;
pub mod job;
pub mod profile;
