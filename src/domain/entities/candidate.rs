//! Candidate entity and its pipeline status state machine.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Pipeline status of a candidate.
///
/// Allowed moves are listed in [`CandidateStatus::allowed_transitions`]:
///
/// ```text
/// screening ──► interview ──(schedule)──► interview_set ──► technical_test ──► hired
///     │             │                          │    │             │
///     └─────────────┴──────────► rejected ◄────┘    └──► hired    └──► rejected
/// ```
///
/// `hired` and `rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    Screening,
    Interview,
    InterviewSet,
    TechnicalTest,
    Hired,
    Rejected,
}

impl CandidateStatus {
    pub const ALL: [CandidateStatus; 6] = [
        CandidateStatus::Screening,
        CandidateStatus::Interview,
        CandidateStatus::InterviewSet,
        CandidateStatus::TechnicalTest,
        CandidateStatus::Hired,
        CandidateStatus::Rejected,
    ];

    /// Storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::Screening => "screening",
            CandidateStatus::Interview => "interview",
            CandidateStatus::InterviewSet => "interview_set",
            CandidateStatus::TechnicalTest => "technical_test",
            CandidateStatus::Hired => "hired",
            CandidateStatus::Rejected => "rejected",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            CandidateStatus::Screening => "Screening",
            CandidateStatus::Interview => "Interview",
            CandidateStatus::InterviewSet => "Interview Scheduled",
            CandidateStatus::TechnicalTest => "Technical Test",
            CandidateStatus::Hired => "Hired",
            CandidateStatus::Rejected => "Rejected",
        }
    }

    /// Statuses reachable in a single step.
    pub fn allowed_transitions(&self) -> &'static [CandidateStatus] {
        use CandidateStatus::*;
        match self {
            Screening => &[Interview, Rejected],
            Interview => &[InterviewSet, Rejected],
            InterviewSet => &[TechnicalTest, Hired, Rejected],
            TechnicalTest => &[Hired, Rejected],
            Hired | Rejected => &[],
        }
    }

    pub fn can_transition_to(&self, next: CandidateStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// Targets offered as plain status actions.
    ///
    /// `interview_set` is excluded: it is only reachable by submitting an
    /// interview schedule.
    pub fn manual_transitions(&self) -> Vec<CandidateStatus> {
        self.allowed_transitions()
            .iter()
            .copied()
            .filter(|s| *s != CandidateStatus::InterviewSet)
            .collect()
    }

    pub fn is_terminal(&self) -> bool {
        self.allowed_transitions().is_empty()
    }

    /// Still moving through the pipeline (not hired, not rejected).
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }

    pub fn can_schedule_interview(&self) -> bool {
        *self == CandidateStatus::Interview
    }

    pub fn has_schedule(&self) -> bool {
        *self == CandidateStatus::InterviewSet
    }
}

impl fmt::Display for CandidateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CandidateStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CandidateStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown candidate status '{s}'"))
    }
}

/// Interview details stored when an interview is scheduled.
#[derive(Debug, Clone, PartialEq)]
pub struct InterviewSchedule {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub meeting_link: String,
    pub notes: Option<String>,
}

/// A candidate's application to a job, joined with the job title.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub id: i64,
    pub job_id: i64,
    pub job_title: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub resume_url: String,
    pub status: CandidateStatus,
    pub schedule: Option<InterviewSchedule>,
    pub applied_at: DateTime<Utc>,
}

/// Input data for a new application. Status always starts at `screening`.
#[derive(Debug, Clone)]
pub struct NewCandidate {
    pub job_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub resume_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_storage_names() {
        for status in CandidateStatus::ALL {
            assert_eq!(status.as_str().parse::<CandidateStatus>(), Ok(status));
        }
        assert!("pending".parse::<CandidateStatus>().is_err());
    }

    #[test]
    fn test_happy_path_transitions() {
        use CandidateStatus::*;
        assert!(Screening.can_transition_to(Interview));
        assert!(Interview.can_transition_to(InterviewSet));
        assert!(InterviewSet.can_transition_to(TechnicalTest));
        assert!(TechnicalTest.can_transition_to(Hired));
    }

    #[test]
    fn test_out_of_order_transitions_rejected() {
        use CandidateStatus::*;
        assert!(!Screening.can_transition_to(InterviewSet));
        assert!(!Screening.can_transition_to(Hired));
        assert!(!Interview.can_transition_to(TechnicalTest));
        assert!(!TechnicalTest.can_transition_to(Interview));
        assert!(!Hired.can_transition_to(Rejected));
        assert!(!Rejected.can_transition_to(Screening));
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(CandidateStatus::Hired.is_terminal());
        assert!(CandidateStatus::Rejected.is_terminal());
        assert!(CandidateStatus::TechnicalTest.is_active());
    }

    #[test]
    fn test_manual_transitions_exclude_interview_set() {
        assert_eq!(
            CandidateStatus::Interview.manual_transitions(),
            vec![CandidateStatus::Rejected]
        );
        assert!(CandidateStatus::Hired.manual_transitions().is_empty());
    }

    #[test]
    fn test_schedule_actions_follow_status() {
        assert!(CandidateStatus::Interview.can_schedule_interview());
        assert!(!CandidateStatus::InterviewSet.can_schedule_interview());
        assert!(!CandidateStatus::Screening.can_schedule_interview());
        assert!(CandidateStatus::InterviewSet.has_schedule());
        assert!(!CandidateStatus::Interview.has_schedule());
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&CandidateStatus::TechnicalTest).unwrap();
        assert_eq!(json, "\"technical_test\"");
    }
}
