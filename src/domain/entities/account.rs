//! Authentication identity.

use chrono::{DateTime, Utc};

/// Email + password identity. HR records are linked to it by email.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
