//! Machine-facing HTTP layer: JSON endpoints and shared middleware.
//!
//! # Modules
//!
//! - [`dto`] - Serializable response bodies
//! - [`handlers`] - JSON endpoint handlers
//! - [`middleware`] - Rate limiting and request tracing shared with the web layer

pub mod dto;
pub mod handlers;
pub mod middleware;
