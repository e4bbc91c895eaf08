//! Process startup: pool, migrations, upload directories, then the listener.

use crate::api::middleware::rate_limit::RateLimitSettings;
use crate::config::Config;
use crate::infrastructure::persistence::{
    PgAccountRepository, PgCandidateRepository, PgCompanyRepository, PgHrUserRepository,
    PgJobRepository, PgSessionRepository,
};
use crate::infrastructure::storage::LocalStorage;
use crate::routes::app_router;
use crate::state::{AppState, Repositories, WebSettings};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Connects to PostgreSQL, applies pending migrations, prepares the upload
/// buckets and serves until Ctrl-C.
///
/// # Errors
///
/// Fails when the database is unreachable, a migration fails, the storage
/// directory cannot be created or the listen address cannot be bound.
pub async fn run(config: Config) -> Result<()> {
    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let uploads = &config.storage;
    let storage = LocalStorage::new(uploads.dir.clone(), &uploads.public_base_url)
        .await
        .with_context(|| {
            format!("Failed to prepare storage directory {}", uploads.dir.display())
        })?;
    tracing::info!(root = %storage.root().display(), "Storage ready");

    let pool = Arc::new(pool);
    let repos = Repositories {
        accounts: Arc::new(PgAccountRepository::new(pool.clone())),
        sessions: Arc::new(PgSessionRepository::new(pool.clone())),
        companies: Arc::new(PgCompanyRepository::new(pool.clone())),
        hr_users: Arc::new(PgHrUserRepository::new(pool.clone())),
        jobs: Arc::new(PgJobRepository::new(pool.clone())),
        candidates: Arc::new(PgCandidateRepository::new(pool)),
    };

    let state = AppState::new(repos, Arc::new(storage), web_settings(&config));

    let app = app_router(state, &config.storage.dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Request-time settings derived from the configuration.
pub fn web_settings(config: &Config) -> WebSettings {
    WebSettings {
        signing_secret: config.session.signing_secret.clone(),
        session_ttl: config.session.ttl(),
        cookie_secure: config.session.cookie_secure,
        image_allowed_hosts: config.storage.image_allowed_hosts.clone(),
        max_upload_bytes: config.storage.max_upload_bytes,
        rate_limit: RateLimitSettings {
            enabled: config.rate_limit_enabled,
            behind_proxy: config.behind_proxy,
        },
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
