mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use axum_test::multipart::{MultipartForm, Part};
use sqlx::PgPool;

const PDF: &[u8] = b"%PDF-1.4\n%test resume\n";

fn application(email: &str, file_name: &str, mime_type: &str) -> MultipartForm {
    MultipartForm::new()
        .add_text("name", "Jane Doe")
        .add_text("email", email)
        .add_text("phone", "081234567")
        .add_text("city", "Bandung")
        .add_part(
            "resume",
            Part::bytes(PDF.to_vec())
                .file_name(file_name)
                .mime_type(mime_type),
        )
}

async fn setup(pool: &PgPool) -> (TestServer, i64) {
    let server = common::create_test_server(pool.clone()).await;
    common::register(&server, "boss@acme.com", "Alice Boss").await;
    let company_id = common::company_id(pool).await;
    (server, company_id)
}

#[sqlx::test]
async fn test_board_lists_only_open_jobs(pool: PgPool) {
    let (server, company_id) = setup(&pool).await;
    common::create_test_job(&pool, company_id, "Rust Engineer", "open").await;
    common::create_test_job(&pool, company_id, "Retired Role", "closed").await;

    let response = server.get("/jobs").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Rust Engineer"));
    assert!(!html.contains("Retired Role"));
}

#[sqlx::test]
async fn test_board_search_and_type_filter(pool: PgPool) {
    let (server, company_id) = setup(&pool).await;
    common::create_test_job(&pool, company_id, "Rust Engineer", "open").await;
    common::create_test_job(&pool, company_id, "Product Designer", "open").await;

    let html = server
        .get("/jobs")
        .add_query_param("search", "rust")
        .add_query_param("type", "all")
        .await
        .text();
    assert!(html.contains("Rust Engineer"));
    assert!(!html.contains("Product Designer"));

    let html = server
        .get("/jobs")
        .add_query_param("type", "Internship")
        .await
        .text();
    assert!(html.contains("No open jobs match your search"));
}

#[sqlx::test]
async fn test_job_detail_not_found(pool: PgPool) {
    let server = common::create_test_server(pool).await;

    server.get("/jobs/999").await.assert_status_not_found();
}

#[sqlx::test]
async fn test_apply_stores_candidate_in_screening(pool: PgPool) {
    let (server, company_id) = setup(&pool).await;
    let job_id = common::create_test_job(&pool, company_id, "Rust Engineer", "open").await;

    let response = server
        .post(&format!("/jobs/{job_id}/apply"))
        .multipart(application("Jane@Mail.com", "My CV.pdf", "application/pdf"))
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("Application sent"));

    let (email, status, resume_url): (String, String, String) = sqlx::query_as(
        "SELECT email, status, resume_url FROM candidates WHERE job_id = $1",
    )
    .bind(job_id)
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(email, "jane@mail.com");
    assert_eq!(status, "screening");
    assert!(resume_url.starts_with("/storage/resumes/"));
    assert!(resume_url.ends_with(".pdf"));
}

#[sqlx::test]
async fn test_apply_rejects_non_pdf(pool: PgPool) {
    let (server, company_id) = setup(&pool).await;
    let job_id = common::create_test_job(&pool, company_id, "Rust Engineer", "open").await;

    let response = server
        .post(&format!("/jobs/{job_id}/apply"))
        .multipart(application("jane@mail.com", "cv.docx", "application/msword"))
        .await;

    response.assert_status_bad_request();
    let html = response.text();
    assert!(html.contains("Only PDF files are allowed"));
    // Typed values are kept.
    assert!(html.contains("value=\"Bandung\""));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM candidates")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test]
async fn test_apply_rejects_malformed_email(pool: PgPool) {
    let (server, company_id) = setup(&pool).await;
    let job_id = common::create_test_job(&pool, company_id, "Rust Engineer", "open").await;

    let response = server
        .post(&format!("/jobs/{job_id}/apply"))
        .multipart(application("jane@.com", "cv.pdf", "application/pdf"))
        .await;

    response.assert_status_bad_request();
    assert!(response.text().contains("Please enter a valid email address"));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM candidates")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test]
async fn test_apply_twice_is_rejected(pool: PgPool) {
    let (server, company_id) = setup(&pool).await;
    let job_id = common::create_test_job(&pool, company_id, "Rust Engineer", "open").await;
    let path = format!("/jobs/{job_id}/apply");

    server
        .post(&path)
        .multipart(application("jane@mail.com", "cv.pdf", "application/pdf"))
        .await
        .assert_status_ok();

    let response = server
        .post(&path)
        .multipart(application("JANE@mail.com", "cv.pdf", "application/pdf"))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert!(response.text().contains("You have already applied for this position"));
}

#[sqlx::test]
async fn test_apply_to_closed_job(pool: PgPool) {
    let (server, company_id) = setup(&pool).await;
    let job_id = common::create_test_job(&pool, company_id, "Retired Role", "closed").await;

    let response = server
        .post(&format!("/jobs/{job_id}/apply"))
        .multipart(application("jane@mail.com", "cv.pdf", "application/pdf"))
        .await;

    response.assert_status_bad_request();
    assert!(response.text().contains("no longer accepting applications"));
}
