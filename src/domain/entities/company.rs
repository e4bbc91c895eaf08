//! Company profile entity.

use chrono::{DateTime, Utc};

/// The single descriptive record of a tenant.
#[derive(Debug, Clone)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub logo_url: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub team_size: Option<String>,
    pub about: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Profile fields used both for creation and full updates.
#[derive(Debug, Clone, Default)]
pub struct CompanyProfile {
    pub name: String,
    pub logo_url: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub team_size: Option<String>,
    pub about: Option<String>,
}

impl CompanyProfile {
    /// Profile used to bootstrap a fresh installation.
    pub fn default_profile() -> Self {
        Self {
            name: "NextStep HR".to_string(),
            logo_url: None,
            industry: Some("HR Automation".to_string()),
            location: Some("Jakarta, Indonesia".to_string()),
            website: None,
            team_size: Some("10-20".to_string()),
            about: Some(
                "NextStep helps automate your HR and recruitment processes.".to_string(),
            ),
        }
    }
}
