use chrono::{Duration, Utc};
use nextstep::domain::repositories::{AccountRepository, SessionRepository};
use nextstep::infrastructure::persistence::{PgAccountRepository, PgSessionRepository};
use sqlx::PgPool;
use std::sync::Arc;

async fn session_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM sessions")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test]
async fn test_find_live_session(pool: PgPool) {
    let pool = Arc::new(pool);
    let accounts = PgAccountRepository::new(pool.clone());
    let sessions = PgSessionRepository::new(pool);

    let account = accounts.create("jane@acme.com", "hash").await.unwrap();
    sessions
        .create(account.id, "live", Utc::now() + Duration::hours(1))
        .await
        .unwrap();

    assert_eq!(sessions.find_account_id("live").await.unwrap(), Some(account.id));
    assert_eq!(sessions.find_account_id("unknown").await.unwrap(), None);
}

#[sqlx::test]
async fn test_expired_session_is_removed_on_lookup(pool: PgPool) {
    let accounts = PgAccountRepository::new(Arc::new(pool.clone()));
    let sessions = PgSessionRepository::new(Arc::new(pool.clone()));

    let account = accounts.create("jane@acme.com", "hash").await.unwrap();
    sessions
        .create(account.id, "stale", Utc::now() - Duration::minutes(1))
        .await
        .unwrap();

    assert_eq!(sessions.find_account_id("stale").await.unwrap(), None);
    assert_eq!(session_count(&pool).await, 0);
}

#[sqlx::test]
async fn test_delete_expired_keeps_live_sessions(pool: PgPool) {
    let accounts = PgAccountRepository::new(Arc::new(pool.clone()));
    let sessions = PgSessionRepository::new(Arc::new(pool.clone()));

    let account = accounts.create("jane@acme.com", "hash").await.unwrap();
    for (hash, offset) in [("old-1", -48), ("old-2", -1), ("live", 24)] {
        sessions
            .create(account.id, hash, Utc::now() + Duration::hours(offset))
            .await
            .unwrap();
    }

    assert_eq!(sessions.delete_expired().await.unwrap(), 2);
    assert_eq!(session_count(&pool).await, 1);
    assert_eq!(sessions.find_account_id("live").await.unwrap(), Some(account.id));
    assert_eq!(sessions.delete_expired().await.unwrap(), 0);
}
