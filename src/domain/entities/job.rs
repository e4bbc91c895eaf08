//! Job posting entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Open,
    Closed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Open => "open",
            JobStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(JobStatus::Open),
            "closed" => Ok(JobStatus::Closed),
            other => Err(format!("unknown job status '{other}'")),
        }
    }
}

/// A job posting owned by a company.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: i64,
    pub company_id: i64,
    pub title: String,
    pub job_level: String,
    pub education: String,
    pub employment_type: String,
    pub experience: Option<String>,
    pub work_setup: String,
    pub location: String,
    pub required_skills: Option<String>,
    pub description: String,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
}

impl Job {
    pub fn is_open(&self) -> bool {
        self.status == JobStatus::Open
    }
}

/// Input data for a new posting.
///
/// There is no status field: postings are always created `open`.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub company_id: i64,
    pub title: String,
    pub job_level: String,
    pub education: String,
    pub employment_type: String,
    pub experience: Option<String>,
    pub work_setup: String,
    pub location: String,
    pub required_skills: Option<String>,
    pub description: String,
}

/// Company display fields joined onto public listings.
#[derive(Debug, Clone, Default)]
pub struct CompanySummary {
    pub name: Option<String>,
    pub location: Option<String>,
    pub logo_url: Option<String>,
    pub about: Option<String>,
}

/// A job as shown on the public board.
#[derive(Debug, Clone)]
pub struct JobListing {
    pub job: Job,
    pub company: CompanySummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_status_parse() {
        assert_eq!("open".parse::<JobStatus>(), Ok(JobStatus::Open));
        assert_eq!("closed".parse::<JobStatus>(), Ok(JobStatus::Closed));
        assert!("archived".parse::<JobStatus>().is_err());
        assert_eq!(JobStatus::Closed.to_string(), "closed");
    }
}
