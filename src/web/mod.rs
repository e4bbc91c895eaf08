//! Server-rendered web layer: public pages and the HR dashboard.
//!
//! Uses Askama templates for server-side rendering. Forms post back to the
//! server and successful writes answer with `303 See Other`.
//!
//! # Modules
//!
//! - [`dto`] - Form and query payloads
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Auth gate and session resolution
//! - [`routes`] - Route tables for public and dashboard pages

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod multipart;
pub mod notice;
pub mod routes;
pub mod view;

pub use error::PageError;
