//! PostgreSQL implementation of HR user repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use super::parse_column;
use crate::domain::entities::{HrUser, NewHrUser, ProfileUpdate};
use crate::domain::repositories::HrUserRepository;
use crate::error::AppError;

const HR_USER_COLUMNS: &str = "id, company_id, email, name, role, approved, approved_at, \
     avatar_url, position, bio, skills, linkedin, github, website, created_at";

#[derive(sqlx::FromRow)]
struct HrUserRow {
    id: i64,
    company_id: i64,
    email: String,
    name: Option<String>,
    role: String,
    approved: bool,
    approved_at: Option<DateTime<Utc>>,
    avatar_url: Option<String>,
    position: Option<String>,
    bio: Option<String>,
    skills: Vec<String>,
    linkedin: Option<String>,
    github: Option<String>,
    website: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<HrUserRow> for HrUser {
    type Error = AppError;

    fn try_from(row: HrUserRow) -> Result<Self, Self::Error> {
        Ok(HrUser {
            id: row.id,
            company_id: row.company_id,
            email: row.email,
            name: row.name,
            role: parse_column("hr_users.role", &row.role)?,
            approved: row.approved,
            approved_at: row.approved_at,
            avatar_url: row.avatar_url,
            position: row.position,
            bio: row.bio,
            skills: row.skills,
            linkedin: row.linkedin,
            github: row.github,
            website: row.website,
            created_at: row.created_at,
        })
    }
}

pub struct PgHrUserRepository {
    pool: Arc<PgPool>,
}

impl PgHrUserRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HrUserRepository for PgHrUserRepository {
    async fn create(&self, new_user: NewHrUser) -> Result<HrUser, AppError> {
        let sql = format!(
            r#"
            INSERT INTO hr_users (company_id, email, name, role, approved, approved_at)
            VALUES ($1, $2, $3, $4, $5, CASE WHEN $5 THEN NOW() END)
            RETURNING {HR_USER_COLUMNS}
            "#
        );

        sqlx::query_as::<_, HrUserRow>(&sql)
            .bind(new_user.company_id)
            .bind(new_user.email)
            .bind(new_user.name)
            .bind(new_user.role.as_str())
            .bind(new_user.approved)
            .fetch_one(self.pool.as_ref())
            .await?
            .try_into()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<HrUser>, AppError> {
        let sql = format!("SELECT {HR_USER_COLUMNS} FROM hr_users WHERE LOWER(email) = LOWER($1)");

        sqlx::query_as::<_, HrUserRow>(&sql)
            .bind(email)
            .fetch_optional(self.pool.as_ref())
            .await?
            .map(HrUser::try_from)
            .transpose()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<HrUser>, AppError> {
        let sql = format!("SELECT {HR_USER_COLUMNS} FROM hr_users WHERE id = $1");

        sqlx::query_as::<_, HrUserRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?
            .map(HrUser::try_from)
            .transpose()
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hr_users")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn list_by_company(&self, company_id: i64) -> Result<Vec<HrUser>, AppError> {
        let sql = format!(
            r#"
            SELECT {HR_USER_COLUMNS}
            FROM hr_users
            WHERE company_id = $1
            ORDER BY created_at DESC
            "#
        );

        sqlx::query_as::<_, HrUserRow>(&sql)
            .bind(company_id)
            .fetch_all(self.pool.as_ref())
            .await?
            .into_iter()
            .map(HrUser::try_from)
            .collect()
    }

    async fn count_pending(&self, company_id: i64) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM hr_users WHERE company_id = $1 AND NOT approved",
        )
        .bind(company_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn approve(&self, id: i64, company_id: i64) -> Result<Option<HrUser>, AppError> {
        let sql = format!(
            r#"
            UPDATE hr_users
            SET approved = TRUE, approved_at = COALESCE(approved_at, NOW())
            WHERE id = $1 AND company_id = $2
            RETURNING {HR_USER_COLUMNS}
            "#
        );

        sqlx::query_as::<_, HrUserRow>(&sql)
            .bind(id)
            .bind(company_id)
            .fetch_optional(self.pool.as_ref())
            .await?
            .map(HrUser::try_from)
            .transpose()
    }

    async fn update_profile(&self, id: i64, update: ProfileUpdate) -> Result<HrUser, AppError> {
        let sql = format!(
            r#"
            UPDATE hr_users
            SET name = $2, avatar_url = $3, position = $4, bio = $5,
                skills = $6, linkedin = $7, github = $8, website = $9
            WHERE id = $1
            RETURNING {HR_USER_COLUMNS}
            "#
        );

        sqlx::query_as::<_, HrUserRow>(&sql)
            .bind(id)
            .bind(update.name)
            .bind(update.avatar_url)
            .bind(update.position)
            .bind(update.bio)
            .bind(update.skills)
            .bind(update.linkedin)
            .bind(update.github)
            .bind(update.website)
            .fetch_one(self.pool.as_ref())
            .await?
            .try_into()
    }
}
