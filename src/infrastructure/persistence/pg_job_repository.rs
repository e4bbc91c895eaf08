//! PostgreSQL implementation of job repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use super::parse_column;
use crate::domain::entities::{CompanySummary, Job, JobListing, JobStatus, NewJob};
use crate::domain::repositories::JobRepository;
use crate::error::AppError;

const JOB_COLUMNS: &str = "j.id, j.company_id, j.title, j.job_level, j.education, \
     j.employment_type, j.experience, j.work_setup, j.location, j.required_skills, \
     j.description, j.status, j.created_at";

#[derive(sqlx::FromRow)]
struct JobRow {
    id: i64,
    company_id: i64,
    title: String,
    job_level: String,
    education: String,
    employment_type: String,
    experience: Option<String>,
    work_setup: String,
    location: String,
    required_skills: Option<String>,
    description: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<JobRow> for Job {
    type Error = AppError;

    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        Ok(Job {
            id: row.id,
            company_id: row.company_id,
            title: row.title,
            job_level: row.job_level,
            education: row.education,
            employment_type: row.employment_type,
            experience: row.experience,
            work_setup: row.work_setup,
            location: row.location,
            required_skills: row.required_skills,
            description: row.description,
            status: parse_column("jobs.status", &row.status)?,
            created_at: row.created_at,
        })
    }
}

/// Job row joined with the owning company's display fields.
#[derive(sqlx::FromRow)]
struct JobListingRow {
    #[sqlx(flatten)]
    job: JobRow,
    company_name: Option<String>,
    company_location: Option<String>,
    company_logo_url: Option<String>,
    company_about: Option<String>,
}

impl TryFrom<JobListingRow> for JobListing {
    type Error = AppError;

    fn try_from(row: JobListingRow) -> Result<Self, Self::Error> {
        Ok(JobListing {
            job: row.job.try_into()?,
            company: CompanySummary {
                name: row.company_name,
                location: row.company_location,
                logo_url: row.company_logo_url,
                about: row.company_about,
            },
        })
    }
}

fn listing_query(filter: &str) -> String {
    format!(
        r#"
        SELECT {JOB_COLUMNS},
               c.name AS company_name,
               c.location AS company_location,
               c.logo_url AS company_logo_url,
               c.about AS company_about
        FROM jobs j
        LEFT JOIN companies c ON c.id = j.company_id
        {filter}
        "#
    )
}

/// PostgreSQL repository for job postings.
pub struct PgJobRepository {
    pool: Arc<PgPool>,
}

impl PgJobRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PgJobRepository {
    async fn create(&self, new_job: NewJob) -> Result<Job, AppError> {
        let sql = format!(
            r#"
            INSERT INTO jobs AS j (
                company_id, title, job_level, education, employment_type,
                experience, work_setup, location, required_skills, description, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 'open')
            RETURNING {JOB_COLUMNS}
            "#
        );

        sqlx::query_as::<_, JobRow>(&sql)
            .bind(new_job.company_id)
            .bind(new_job.title)
            .bind(new_job.job_level)
            .bind(new_job.education)
            .bind(new_job.employment_type)
            .bind(new_job.experience)
            .bind(new_job.work_setup)
            .bind(new_job.location)
            .bind(new_job.required_skills)
            .bind(new_job.description)
            .fetch_one(self.pool.as_ref())
            .await?
            .try_into()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Job>, AppError> {
        let sql = format!("SELECT {JOB_COLUMNS} FROM jobs j WHERE j.id = $1");

        sqlx::query_as::<_, JobRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?
            .map(Job::try_from)
            .transpose()
    }

    async fn find_listing(&self, id: i64) -> Result<Option<JobListing>, AppError> {
        sqlx::query_as::<_, JobListingRow>(&listing_query("WHERE j.id = $1"))
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?
            .map(JobListing::try_from)
            .transpose()
    }

    async fn list_by_company(&self, company_id: i64) -> Result<Vec<Job>, AppError> {
        let sql = format!(
            r#"
            SELECT {JOB_COLUMNS}
            FROM jobs j
            WHERE j.company_id = $1
            ORDER BY j.created_at DESC
            "#
        );

        sqlx::query_as::<_, JobRow>(&sql)
            .bind(company_id)
            .fetch_all(self.pool.as_ref())
            .await?
            .into_iter()
            .map(Job::try_from)
            .collect()
    }

    async fn list_open(&self) -> Result<Vec<JobListing>, AppError> {
        sqlx::query_as::<_, JobListingRow>(&listing_query(
            "WHERE j.status = 'open' ORDER BY j.created_at DESC",
        ))
        .fetch_all(self.pool.as_ref())
        .await?
        .into_iter()
        .map(JobListing::try_from)
        .collect()
    }

    async fn count_open(&self, company_id: i64) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM jobs WHERE company_id = $1 AND status = 'open'",
        )
        .bind(company_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn delete(&self, id: i64, company_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1 AND company_id = $2")
            .bind(id)
            .bind(company_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn set_status(
        &self,
        id: i64,
        company_id: i64,
        status: JobStatus,
    ) -> Result<Option<Job>, AppError> {
        let sql = format!(
            r#"
            UPDATE jobs AS j
            SET status = $3
            WHERE j.id = $1 AND j.company_id = $2
            RETURNING {JOB_COLUMNS}
            "#
        );

        sqlx::query_as::<_, JobRow>(&sql)
            .bind(id)
            .bind(company_id)
            .bind(status.as_str())
            .fetch_optional(self.pool.as_ref())
            .await?
            .map(Job::try_from)
            .transpose()
    }
}
