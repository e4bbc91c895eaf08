//! Candidate pipeline query and forms.

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::domain::entities::{CandidateStatus, InterviewSchedule};
use crate::domain::pipeline::{PipelineQuery, SortOrder};
use crate::error::AppError;
use crate::utils::web_link::validate_web_link;

/// `GET /dashboard/candidates?status=..&search=..&sort=..`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CandidateListParams {
    pub status: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub notice: Option<String>,
}

impl CandidateListParams {
    /// `all`, blank or unknown values fall back to no filter and newest first.
    pub fn to_query(&self) -> PipelineQuery {
        PipelineQuery {
            status: self
                .status
                .as_deref()
                .and_then(|s| s.parse::<CandidateStatus>().ok()),
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            sort: match self.sort.as_deref() {
                Some("oldest") => SortOrder::Oldest,
                _ => SortOrder::Newest,
            },
        }
    }
}

/// `POST /dashboard/candidates/{id}/status`
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub status: CandidateStatus,
}

/// `POST /dashboard/candidates/{id}/schedule`
///
/// Date and time arrive as `YYYY-MM-DD` and `HH:MM` from the browser's
/// date/time inputs.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct ScheduleForm {
    #[validate(length(min = 1))]
    pub date: String,
    #[validate(length(min = 1))]
    pub time: String,
    #[validate(length(min = 1), url, custom(function = "validate_web_link"))]
    pub meeting_link: String,
    pub notes: Option<String>,
}

impl ScheduleForm {
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an unparseable date or time.
    pub fn into_schedule(self) -> Result<InterviewSchedule, AppError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|_| {
            AppError::bad_request("Invalid interview date", json!({ "field": "date" }))
        })?;

        let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(self.time.trim(), "%H:%M:%S"))
            .map_err(|_| {
                AppError::bad_request("Invalid interview time", json!({ "field": "time" }))
            })?;

        Ok(InterviewSchedule {
            date,
            time,
            meeting_link: self.meeting_link,
            notes: self.notes,
        })
    }
}
