mod common;

use serde_json::Value;
use sqlx::PgPool;

#[sqlx::test]
async fn test_health_reports_both_probes(pool: PgPool) {
    let server = common::create_test_server(pool).await;

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert_eq!(body["checks"]["storage"]["status"], "ok");
}

#[sqlx::test]
async fn test_health_counts_hr_users(pool: PgPool) {
    let server = common::create_test_server(pool).await;
    common::register(&server, "boss@acme.com", "Alice Boss").await;

    let body = server.get("/health").await.json::<Value>();

    assert_eq!(body["checks"]["database"]["message"], "Connected, 1 HR users");
}
