#![allow(dead_code)]

use axum::http::{HeaderValue, StatusCode, header};
use axum_test::{TestResponse, TestServer};
use nextstep::api::middleware::rate_limit::RateLimitSettings;
use nextstep::infrastructure::persistence::{
    PgAccountRepository, PgCandidateRepository, PgCompanyRepository, PgHrUserRepository,
    PgJobRepository, PgSessionRepository,
};
use nextstep::infrastructure::storage::LocalStorage;
use nextstep::routes::router;
use nextstep::state::{AppState, Repositories, WebSettings};
use sqlx::PgPool;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const PASSWORD: &str = "secret-password";

static STORAGE_DIRS: AtomicUsize = AtomicUsize::new(0);

fn storage_dir() -> PathBuf {
    let n = STORAGE_DIRS.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!("nextstep-test-{}-{n}", std::process::id()))
}

pub fn test_settings() -> WebSettings {
    WebSettings {
        signing_secret: "test-signing-secret".to_string(),
        session_ttl: chrono::Duration::days(7),
        cookie_secure: false,
        image_allowed_hosts: vec![],
        max_upload_bytes: 5 * 1024 * 1024,
        rate_limit: RateLimitSettings {
            enabled: false,
            behind_proxy: false,
        },
    }
}

pub async fn create_test_state(pool: PgPool) -> (AppState, PathBuf) {
    let pool = Arc::new(pool);
    let dir = storage_dir();

    let storage = LocalStorage::new(dir.clone(), "").await.unwrap();

    let repos = Repositories {
        accounts: Arc::new(PgAccountRepository::new(pool.clone())),
        sessions: Arc::new(PgSessionRepository::new(pool.clone())),
        companies: Arc::new(PgCompanyRepository::new(pool.clone())),
        hr_users: Arc::new(PgHrUserRepository::new(pool.clone())),
        jobs: Arc::new(PgJobRepository::new(pool.clone())),
        candidates: Arc::new(PgCandidateRepository::new(pool)),
    };

    let state = AppState::new(repos, Arc::new(storage), test_settings());
    (state, dir)
}

pub async fn create_test_server(pool: PgPool) -> TestServer {
    let (state, dir) = create_test_state(pool).await;
    TestServer::new(router(state, &dir)).unwrap()
}

/// Session token from a `Set-Cookie` response header.
pub fn session_token(response: &TestResponse) -> String {
    let set_cookie = response.header(header::SET_COOKIE);
    let value = set_cookie.to_str().unwrap();
    value
        .split(';')
        .next()
        .and_then(|pair| pair.strip_prefix("auth_token="))
        .unwrap()
        .to_string()
}

pub fn cookie(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("auth_token={token}")).unwrap()
}

/// Registers an account through the web form and returns its session token.
pub async fn register(server: &TestServer, email: &str, name: &str) -> String {
    let response = server
        .post("/register")
        .form(&[("name", name), ("email", email), ("password", PASSWORD)])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    session_token(&response)
}

pub async fn sign_in(server: &TestServer, email: &str) -> String {
    let response = server
        .post("/login")
        .form(&[("email", email), ("password", PASSWORD)])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    session_token(&response)
}

pub async fn create_test_job(pool: &PgPool, company_id: i64, title: &str, status: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO jobs (company_id, title, job_level, education, employment_type, \
         work_setup, location, description, status) \
         VALUES ($1, $2, 'Mid', 'S1', 'Full-time', 'Remote', 'Jakarta', \
         'Build things', $3) RETURNING id",
    )
    .bind(company_id)
    .bind(title)
    .bind(status)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_candidate(pool: &PgPool, job_id: i64, email: &str, status: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO candidates (job_id, name, email, phone, city, resume_url, status) \
         VALUES ($1, 'Jane Doe', $2, '0812', 'Bandung', '/storage/resumes/cv.pdf', $3) \
         RETURNING id",
    )
    .bind(job_id)
    .bind(email)
    .bind(status)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn company_id(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT id FROM companies ORDER BY id LIMIT 1")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn candidate_status(pool: &PgPool, id: i64) -> String {
    sqlx::query_scalar("SELECT status FROM candidates WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}
