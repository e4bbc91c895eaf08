//! CLI administration tool for NextStep.
//!
//! Approves HR users, shows pipeline numbers and checks the database without
//! going through the web dashboard.
//!
//! # Usage
//!
//! ```bash
//! # List HR users waiting for approval
//! cargo run --bin admin -- hr pending
//!
//! # Approve an HR user
//! cargo run --bin admin -- hr approve jane@acme.com
//!
//! # Pipeline statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Delete expired login sessions
//! cargo run --bin admin -- db prune-sessions
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use nextstep::domain::entities::{CandidateStatus, HrUser};
use nextstep::domain::repositories::{CompanyRepository, HrUserRepository, SessionRepository};
use nextstep::infrastructure::persistence::{
    PgCompanyRepository, PgHrUserRepository, PgSessionRepository,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing NextStep.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage HR users
    Hr {
        #[command(subcommand)]
        action: HrAction,
    },

    /// Show recruitment statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum HrAction {
    /// List HR users waiting for approval
    Pending,

    /// Approve an HR user by email
    Approve {
        /// Email the user registered with (prompted when omitted)
        email: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Delete expired login sessions
    PruneSessions,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Hr { action } => handle_hr_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_hr_action(action: HrAction, pool: &PgPool) -> Result<()> {
    let pool = Arc::new(pool.clone());
    let hr_users = PgHrUserRepository::new(pool.clone());

    match action {
        HrAction::Pending => {
            let companies = PgCompanyRepository::new(pool);
            list_pending(&hr_users, &companies).await?;
        }
        HrAction::Approve { email, yes } => {
            approve(&hr_users, email, yes).await?;
        }
    }

    Ok(())
}

/// Lists unapproved HR users of the company.
async fn list_pending(
    hr_users: &PgHrUserRepository,
    companies: &PgCompanyRepository,
) -> Result<()> {
    println!("{}", "⏳ Pending HR users".bright_blue().bold());
    println!();

    let Some(company) = companies
        .find_first()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load company: {}", e))?
    else {
        println!("{}", "  No company yet, nobody has signed up".yellow());
        return Ok(());
    };

    let pending: Vec<HrUser> = hr_users
        .list_by_company(company.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list HR users: {}", e))?
        .into_iter()
        .filter(|u| !u.approved)
        .collect();

    if pending.is_empty() {
        println!("{}", "  Nobody is waiting for approval".green());
        return Ok(());
    }

    println!(
        "  {:<5} {:<32} {:<24} {:<16}",
        "ID".bright_white().bold(),
        "Email".bright_white().bold(),
        "Name".bright_white().bold(),
        "Registered".bright_white().bold()
    );
    println!("  {}", "─".repeat(80).bright_black());

    for user in &pending {
        println!(
            "  {:<5} {:<32} {:<24} {}",
            user.id.to_string().bright_black(),
            user.email.cyan(),
            user.name.as_deref().unwrap_or("-"),
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        pending.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Approves an HR user after a confirmation prompt.
async fn approve(
    hr_users: &PgHrUserRepository,
    email: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "✅ Approve HR user".bright_blue().bold());
    println!();

    let email = match email {
        Some(e) => e,
        None => Input::new().with_prompt("Email").interact_text()?,
    };

    let user = hr_users
        .find_by_email(&email)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("HR user not found")?;

    if user.approved {
        println!("{}", "⚠️  This user is already approved".yellow());
        return Ok(());
    }

    println!("  Email: {}", user.email.cyan());
    println!("  Name:  {}", user.name.as_deref().unwrap_or("-"));
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Approve this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    hr_users
        .approve(user.id, user.company_id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to approve user: {}", e))?
        .context("HR user disappeared before approval")?;

    println!(
        "{}",
        "✅ User approved, they can now sign in to the dashboard"
            .green()
            .bold()
    );
    println!();

    Ok(())
}

/// Displays job and candidate pipeline counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let open_jobs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs WHERE status = 'open'")
        .fetch_one(pool)
        .await?;

    let hr_users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hr_users WHERE approved")
        .fetch_one(pool)
        .await?;

    let by_status: Vec<(String, i64)> =
        sqlx::query_as("SELECT status, COUNT(*) FROM candidates GROUP BY status")
            .fetch_all(pool)
            .await?;

    println!("  Open jobs:  {}", open_jobs.to_string().bright_green().bold());
    println!("  HR users:   {}", hr_users.to_string().bright_green().bold());
    println!();
    println!("{}", "  Candidates".bright_white().bold());

    for status in CandidateStatus::ALL {
        let count = by_status
            .iter()
            .find(|(s, _)| s == status.as_str())
            .map_or(0, |(_, n)| *n);

        println!(
            "    {:<16} {}",
            status.label(),
            count.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
        DbAction::PruneSessions => {
            let sessions = PgSessionRepository::new(Arc::new(pool.clone()));
            let removed = sessions
                .delete_expired()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to prune sessions: {}", e))?;

            println!(
                "{} {}",
                "🧹 Expired sessions removed:".green().bold(),
                removed.to_string().bright_white()
            );
        }
    }

    Ok(())
}
