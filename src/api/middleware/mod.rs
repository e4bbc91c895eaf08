//! HTTP middleware for request protection and observability.

pub mod rate_limit;
pub mod tracing;
