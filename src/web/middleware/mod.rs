//! Middleware for the web layer.
//!
//! - [`auth_gate`] - presence-only cookie routing applied to every request
//! - [`session`] - resolves the signed-in HR user on dashboard routes

pub mod auth_gate;
pub mod session;
