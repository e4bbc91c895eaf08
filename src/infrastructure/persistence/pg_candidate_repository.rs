//! PostgreSQL implementation of candidate repository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use super::parse_column;
use crate::domain::entities::{Candidate, CandidateStatus, InterviewSchedule, NewCandidate};
use crate::domain::repositories::CandidateRepository;
use crate::error::AppError;

const CANDIDATE_SELECT: &str = r#"
    SELECT c.id, c.job_id, j.title AS job_title, c.name, c.email, c.phone, c.city,
           c.resume_url, c.status, c.interview_date, c.interview_time,
           c.meeting_link, c.interview_notes, c.applied_at
    FROM candidates c
    JOIN jobs j ON j.id = c.job_id
"#;

#[derive(sqlx::FromRow)]
struct CandidateRow {
    id: i64,
    job_id: i64,
    job_title: String,
    name: String,
    email: String,
    phone: String,
    city: String,
    resume_url: String,
    status: String,
    interview_date: Option<NaiveDate>,
    interview_time: Option<NaiveTime>,
    meeting_link: Option<String>,
    interview_notes: Option<String>,
    applied_at: DateTime<Utc>,
}

impl TryFrom<CandidateRow> for Candidate {
    type Error = AppError;

    fn try_from(row: CandidateRow) -> Result<Self, Self::Error> {
        let schedule = match (row.interview_date, row.interview_time, row.meeting_link) {
            (Some(date), Some(time), Some(meeting_link)) => Some(InterviewSchedule {
                date,
                time,
                meeting_link,
                notes: row.interview_notes,
            }),
            _ => None,
        };

        Ok(Candidate {
            id: row.id,
            job_id: row.job_id,
            job_title: row.job_title,
            name: row.name,
            email: row.email,
            phone: row.phone,
            city: row.city,
            resume_url: row.resume_url,
            status: parse_column("candidates.status", &row.status)?,
            schedule,
            applied_at: row.applied_at,
        })
    }
}

/// PostgreSQL repository for candidates.
///
/// Company scoping goes through the owning job: a candidate belongs to a
/// company when its job does.
pub struct PgCandidateRepository {
    pool: Arc<PgPool>,
}

impl PgCandidateRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateRepository for PgCandidateRepository {
    async fn create(&self, new_candidate: NewCandidate) -> Result<Candidate, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO candidates (job_id, name, email, phone, city, resume_url, status)
            VALUES ($1, $2, $3, $4, $5, $6, 'screening')
            RETURNING id
            "#,
        )
        .bind(new_candidate.job_id)
        .bind(new_candidate.name)
        .bind(new_candidate.email)
        .bind(new_candidate.phone)
        .bind(new_candidate.city)
        .bind(new_candidate.resume_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        sqlx::query_as::<_, CandidateRow>(&format!("{CANDIDATE_SELECT} WHERE c.id = $1"))
            .bind(id)
            .fetch_one(self.pool.as_ref())
            .await?
            .try_into()
    }

    async fn find_by_email_and_job(
        &self,
        email: &str,
        job_id: i64,
    ) -> Result<Option<Candidate>, AppError> {
        sqlx::query_as::<_, CandidateRow>(&format!(
            "{CANDIDATE_SELECT} WHERE LOWER(c.email) = LOWER($1) AND c.job_id = $2"
        ))
        .bind(email)
        .bind(job_id)
        .fetch_optional(self.pool.as_ref())
        .await?
        .map(Candidate::try_from)
        .transpose()
    }

    async fn find_by_id(&self, id: i64, company_id: i64) -> Result<Option<Candidate>, AppError> {
        sqlx::query_as::<_, CandidateRow>(&format!(
            "{CANDIDATE_SELECT} WHERE c.id = $1 AND j.company_id = $2"
        ))
        .bind(id)
        .bind(company_id)
        .fetch_optional(self.pool.as_ref())
        .await?
        .map(Candidate::try_from)
        .transpose()
    }

    async fn list_by_company(&self, company_id: i64) -> Result<Vec<Candidate>, AppError> {
        sqlx::query_as::<_, CandidateRow>(&format!(
            "{CANDIDATE_SELECT} WHERE j.company_id = $1 ORDER BY c.applied_at DESC"
        ))
        .bind(company_id)
        .fetch_all(self.pool.as_ref())
        .await?
        .into_iter()
        .map(Candidate::try_from)
        .collect()
    }

    async fn delete(&self, id: i64, company_id: i64) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM candidates c
            USING jobs j
            WHERE c.id = $1 AND j.id = c.job_id AND j.company_id = $2
            "#,
        )
        .bind(id)
        .bind(company_id)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn transition(
        &self,
        id: i64,
        company_id: i64,
        from: CandidateStatus,
        to: CandidateStatus,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE candidates c
            SET status = $4
            FROM jobs j
            WHERE c.id = $1 AND j.id = c.job_id AND j.company_id = $2 AND c.status = $3
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(from.as_str())
        .bind(to.as_str())
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn schedule_interview(
        &self,
        id: i64,
        company_id: i64,
        schedule: InterviewSchedule,
    ) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE candidates c
            SET status = 'interview_set',
                interview_date = $3,
                interview_time = $4,
                meeting_link = $5,
                interview_notes = $6
            FROM jobs j
            WHERE c.id = $1 AND j.id = c.job_id AND j.company_id = $2
              AND c.status = 'interview'
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(schedule.date)
        .bind(schedule.time)
        .bind(schedule.meeting_link)
        .bind(schedule.notes)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn count_by_status(
        &self,
        company_id: i64,
    ) -> Result<Vec<(CandidateStatus, i64)>, AppError> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            r#"
            SELECT c.status, COUNT(*)
            FROM candidates c
            JOIN jobs j ON j.id = c.job_id
            WHERE j.company_id = $1
            GROUP BY c.status
            "#,
        )
        .bind(company_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter()
            .map(|(status, count)| Ok((parse_column("candidates.status", &status)?, count)))
            .collect()
    }
}
