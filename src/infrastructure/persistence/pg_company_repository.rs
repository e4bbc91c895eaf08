//! PostgreSQL implementation of company repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Company, CompanyProfile};
use crate::domain::repositories::CompanyRepository;
use crate::error::AppError;

const COMPANY_COLUMNS: &str =
    "id, name, logo_url, industry, location, website, team_size, about, created_at";

#[derive(sqlx::FromRow)]
struct CompanyRow {
    id: i64,
    name: String,
    logo_url: Option<String>,
    industry: Option<String>,
    location: Option<String>,
    website: Option<String>,
    team_size: Option<String>,
    about: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            id: row.id,
            name: row.name,
            logo_url: row.logo_url,
            industry: row.industry,
            location: row.location,
            website: row.website,
            team_size: row.team_size,
            about: row.about,
            created_at: row.created_at,
        }
    }
}

pub struct PgCompanyRepository {
    pool: Arc<PgPool>,
}

impl PgCompanyRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for PgCompanyRepository {
    async fn create(&self, profile: CompanyProfile) -> Result<Company, AppError> {
        let sql = format!(
            r#"
            INSERT INTO companies (name, logo_url, industry, location, website, team_size, about)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {COMPANY_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, CompanyRow>(&sql)
            .bind(profile.name)
            .bind(profile.logo_url)
            .bind(profile.industry)
            .bind(profile.location)
            .bind(profile.website)
            .bind(profile.team_size)
            .bind(profile.about)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Company>, AppError> {
        let sql = format!("SELECT {COMPANY_COLUMNS} FROM companies WHERE id = $1");

        let row = sqlx::query_as::<_, CompanyRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Company::from))
    }

    async fn find_first(&self) -> Result<Option<Company>, AppError> {
        let sql = format!("SELECT {COMPANY_COLUMNS} FROM companies ORDER BY id LIMIT 1");

        let row = sqlx::query_as::<_, CompanyRow>(&sql)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Company::from))
    }

    async fn update(&self, id: i64, profile: CompanyProfile) -> Result<Company, AppError> {
        let sql = format!(
            r#"
            UPDATE companies
            SET name = $2, logo_url = $3, industry = $4, location = $5,
                website = $6, team_size = $7, about = $8
            WHERE id = $1
            RETURNING {COMPANY_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, CompanyRow>(&sql)
            .bind(id)
            .bind(profile.name)
            .bind(profile.logo_url)
            .bind(profile.industry)
            .bind(profile.location)
            .bind(profile.website)
            .bind(profile.team_size)
            .bind(profile.about)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }
}
