//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check: database and storage (public)
//! - `/`, `/jobs/*`, `/login`, `/register`, `/pending-approval` - Public pages
//! - `/dashboard/*`      - HR dashboard (session cookie required)
//! - `/storage/*`        - Uploaded files (resumes, logos, avatars)
//! - `/static/*`         - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Auth gate** - Cookie presence redirects on every request
//! - **Session** - HR user resolution on dashboard routes
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Body limit** - Upload size cap from configuration
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::health_handler;
use crate::api::middleware::rate_limit::{self, Policy};
use crate::api::middleware::tracing as http_tracing;
use crate::state::AppState;
use crate::web;
use crate::web::middleware::{auth_gate, session};
use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::{Router, middleware};
use std::path::Path;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with trailing slashes trimmed before
/// routing.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers; its
///   settings carry the rate limit switches and upload limit
/// - `storage_dir` - root of the uploaded files served under `/storage`
pub fn app_router(state: AppState, storage_dir: &Path) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, storage_dir))
}

/// All routes and middleware, without path normalization.
pub fn router(state: AppState, storage_dir: &Path) -> Router {
    let limits = state.settings.rate_limit;

    let dashboard = Router::new()
        .merge(rate_limit::apply(
            web::routes::dashboard_pages(),
            Policy::Public,
            limits,
        ))
        .merge(rate_limit::apply(
            web::routes::dashboard_actions(),
            Policy::Sensitive,
            limits,
        ))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session::layer,
        ));

    let public = Router::new()
        .merge(rate_limit::apply(
            web::routes::public_pages().route("/health", get(health_handler)),
            Policy::Public,
            limits,
        ))
        .merge(rate_limit::apply(
            web::routes::public_actions(),
            Policy::Sensitive,
            limits,
        ));

    Router::new()
        .merge(public)
        .merge(dashboard)
        .nest_service("/storage", ServeDir::new(storage_dir))
        .nest_service("/static", ServeDir::new("static"))
        .layer(DefaultBodyLimit::max(state.settings.max_upload_bytes))
        .layer(middleware::from_fn(auth_gate::layer))
        .with_state(state)
        .layer(http_tracing::layer())
}
