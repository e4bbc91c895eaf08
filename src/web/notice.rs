//! One-shot confirmation banners carried in the redirect query string.

use serde::Deserialize;

/// Confirmation shown after a successful form submission.
///
/// Only these fixed keys are recognised, so no user input is echoed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    JobCreated,
    JobDeleted,
    JobUpdated,
    CandidateDeleted,
    StatusChanged,
    InterviewScheduled,
    CompanySaved,
    CompanyReset,
    MemberApproved,
    ProfileSaved,
}

impl Notice {
    const ALL: [Notice; 10] = [
        Notice::JobCreated,
        Notice::JobDeleted,
        Notice::JobUpdated,
        Notice::CandidateDeleted,
        Notice::StatusChanged,
        Notice::InterviewScheduled,
        Notice::CompanySaved,
        Notice::CompanyReset,
        Notice::MemberApproved,
        Notice::ProfileSaved,
    ];

    pub fn message(&self) -> &'static str {
        match self {
            Notice::JobCreated => "Job posted successfully",
            Notice::JobDeleted => "Job deleted",
            Notice::JobUpdated => "Job status updated",
            Notice::CandidateDeleted => "Candidate deleted",
            Notice::StatusChanged => "Candidate status updated",
            Notice::InterviewScheduled => "Interview scheduled",
            Notice::CompanySaved => "Company profile saved",
            Notice::CompanyReset => "Company profile restored to defaults",
            Notice::MemberApproved => "HR member approved",
            Notice::ProfileSaved => "Profile updated",
        }
    }

    /// `path?notice=<key>` for a redirect target.
    pub fn redirect_to(self, path: &str) -> String {
        format!("{path}?notice={}", self.key())
    }

    /// Parses a `notice` key; unknown keys are ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.key() == key)
    }

    fn key(&self) -> &'static str {
        match self {
            Notice::JobCreated => "job_created",
            Notice::JobDeleted => "job_deleted",
            Notice::JobUpdated => "job_updated",
            Notice::CandidateDeleted => "candidate_deleted",
            Notice::StatusChanged => "status_changed",
            Notice::InterviewScheduled => "interview_scheduled",
            Notice::CompanySaved => "company_saved",
            Notice::CompanyReset => "company_reset",
            Notice::MemberApproved => "member_approved",
            Notice::ProfileSaved => "profile_saved",
        }
    }
}

/// `?notice=` query parameter.
#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    pub notice: Option<String>,
}

impl NoticeQuery {
    pub fn message(&self) -> Option<&'static str> {
        notice_message(self.notice.as_deref())
    }
}

/// Banner text for a raw `notice` query value.
pub fn notice_message(key: Option<&str>) -> Option<&'static str> {
    key.and_then(Notice::from_key).map(|n| n.message())
}
