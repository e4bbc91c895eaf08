//! HR user entity and role.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of an HR user inside its company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Hr,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Hr => "hr",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "hr" => Ok(Role::Hr),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

/// A recruiter or admin belonging to one company.
#[derive(Debug, Clone)]
pub struct HrUser {
    pub id: i64,
    pub company_id: i64,
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
    pub approved: bool,
    pub approved_at: Option<DateTime<Utc>>,
    pub avatar_url: Option<String>,
    pub position: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl HrUser {
    /// First name for greetings, `"User"` when no name is set.
    pub fn first_name(&self) -> &str {
        self.name
            .as_deref()
            .and_then(|n| n.split_whitespace().next())
            .unwrap_or("User")
    }

    /// Up to two initials for avatar fallbacks.
    pub fn initials(&self) -> String {
        let source = self.name.as_deref().unwrap_or(&self.email);
        source
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

/// Input data for a new HR user record.
#[derive(Debug, Clone)]
pub struct NewHrUser {
    pub company_id: i64,
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
    pub approved: bool,
}

/// Editable profile fields.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub position: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: Option<&str>) -> HrUser {
        HrUser {
            id: 1,
            company_id: 1,
            email: "jane@x.com".to_string(),
            name: name.map(str::to_string),
            role: Role::Hr,
            approved: true,
            approved_at: None,
            avatar_url: None,
            position: None,
            bio: None,
            skills: vec![],
            linkedin: None,
            github: None,
            website: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("hr".parse::<Role>(), Ok(Role::Hr));
        assert!("owner".parse::<Role>().is_err());
        assert!(Role::Admin.is_admin());
        assert!(!Role::Hr.is_admin());
    }

    #[test]
    fn test_first_name_and_initials() {
        let u = user(Some("Jane Mary Doe"));
        assert_eq!(u.first_name(), "Jane");
        assert_eq!(u.initials(), "JM");

        let anonymous = user(None);
        assert_eq!(anonymous.first_name(), "User");
        assert_eq!(anonymous.initials(), "J");
    }
}
