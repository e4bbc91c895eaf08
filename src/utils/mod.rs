//! Utility functions shared across layers.
//!
//! - [`token`] - Session token generation and HMAC hashing
//! - [`password`] - Argon2id password hashing
//! - [`cookie`] - Session cookie parsing and formatting
//! - [`file_name`] - Object names for uploaded files
//! - [`image_host`] - Remote image host allowlist
//! - [`web_link`] - http(s) check for user-supplied links

pub mod cookie;
pub mod file_name;
pub mod image_host;
pub mod password;
pub mod token;
pub mod web_link;
