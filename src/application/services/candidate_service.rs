//! Candidate pipeline: listing, status transitions and interview scheduling.

use std::sync::Arc;

use crate::domain::entities::{Candidate, CandidateStatus, InterviewSchedule};
use crate::domain::pipeline::PipelineQuery;
use crate::domain::repositories::CandidateRepository;
use crate::error::AppError;
use crate::utils::web_link::is_web_link;
use serde_json::json;

/// Service for moving candidates of one company through the pipeline.
///
/// Every status write is a compare-and-set against the status the service
/// read, so a concurrent change makes the later write fail with
/// [`AppError::Conflict`] instead of silently overwriting it.
pub struct CandidateService {
    repository: Arc<dyn CandidateRepository>,
}

impl CandidateService {
    pub fn new(repository: Arc<dyn CandidateRepository>) -> Self {
        Self { repository }
    }

    /// Lists the company's candidates with filters and ordering applied.
    pub async fn list(
        &self,
        company_id: i64,
        query: &PipelineQuery,
    ) -> Result<Vec<Candidate>, AppError> {
        let candidates = self.repository.list_by_company(company_id).await?;
        Ok(query.apply(candidates))
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no candidate with this id applied to
    /// one of the company's jobs.
    pub async fn get(&self, company_id: i64, id: i64) -> Result<Candidate, AppError> {
        self.repository
            .find_by_id(id, company_id)
            .await?
            .ok_or_else(|| AppError::not_found("Candidate not found", json!({ "id": id })))
    }

    pub async fn delete(&self, company_id: i64, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id, company_id).await? {
            return Err(AppError::not_found(
                "Candidate not found",
                json!({ "id": id }),
            ));
        }

        tracing::info!(candidate_id = id, company_id, "Candidate deleted");
        Ok(())
    }

    /// Moves a candidate to `next`.
    ///
    /// `interview_set` cannot be reached here; use
    /// [`Self::schedule_interview`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the transition table forbids the move.
    /// Returns [`AppError::Conflict`] if the status changed since it was read.
    pub async fn change_status(
        &self,
        company_id: i64,
        id: i64,
        next: CandidateStatus,
    ) -> Result<Candidate, AppError> {
        let candidate = self.get(company_id, id).await?;
        let current = candidate.status;

        if !current.manual_transitions().contains(&next) {
            return Err(AppError::bad_request(
                format!(
                    "Cannot move a candidate from {} to {}",
                    current.label(),
                    next.label()
                ),
                json!({ "from": current.as_str(), "to": next.as_str() }),
            ));
        }

        if !self
            .repository
            .transition(id, company_id, current, next)
            .await?
        {
            return Err(stale_status(id));
        }

        tracing::info!(
            candidate_id = id,
            from = %current,
            to = %next,
            "Candidate status changed"
        );

        self.get(company_id, id).await
    }

    /// Stores interview details and moves the candidate to `interview_set`.
    ///
    /// Only allowed while the candidate is in `interview`. Returns the
    /// re-fetched candidate.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a blank or non-http(s) meeting
    /// link or a candidate outside `interview`.
    /// Returns [`AppError::Conflict`] if the status changed since it was read.
    pub async fn schedule_interview(
        &self,
        company_id: i64,
        id: i64,
        schedule: InterviewSchedule,
    ) -> Result<Candidate, AppError> {
        let schedule = InterviewSchedule {
            meeting_link: schedule.meeting_link.trim().to_string(),
            notes: schedule
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            ..schedule
        };

        if schedule.meeting_link.is_empty() {
            return Err(AppError::bad_request(
                "Please fill in all required fields",
                json!({ "fields": ["meeting_link"] }),
            ));
        }
        if !is_web_link(&schedule.meeting_link) {
            return Err(AppError::bad_request(
                "Links must be full http:// or https:// addresses",
                json!({ "fields": ["meeting_link"] }),
            ));
        }

        let candidate = self.get(company_id, id).await?;
        if !candidate.status.can_schedule_interview() {
            return Err(AppError::bad_request(
                "Interviews can only be scheduled for candidates in the interview stage",
                json!({ "status": candidate.status.as_str() }),
            ));
        }

        if !self
            .repository
            .schedule_interview(id, company_id, schedule)
            .await?
        {
            return Err(stale_status(id));
        }

        tracing::info!(candidate_id = id, "Interview scheduled");
        self.get(company_id, id).await
    }
}

fn stale_status(id: i64) -> AppError {
    AppError::conflict(
        "Candidate status was changed by someone else, please reload",
        json!({ "id": id }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCandidateRepository;
    use chrono::{NaiveDate, NaiveTime, Utc};

    fn candidate(status: CandidateStatus, schedule: Option<InterviewSchedule>) -> Candidate {
        Candidate {
            id: 5,
            job_id: 1,
            job_title: "Frontend Developer".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@mail.com".to_string(),
            phone: "0812".to_string(),
            city: "Bandung".to_string(),
            resume_url: "/storage/resumes/1-Jane_Doe.pdf".to_string(),
            status,
            schedule,
            applied_at: Utc::now(),
        }
    }

    fn schedule() -> InterviewSchedule {
        InterviewSchedule {
            date: NaiveDate::from_ymd_opt(2026, 11, 3).unwrap(),
            time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            meeting_link: " https://meet.example.com/abc ".to_string(),
            notes: Some("Bring portfolio".to_string()),
        }
    }

    #[tokio::test]
    async fn test_change_status_follows_table() {
        let mut repo = MockCandidateRepository::new();
        let mut reads = 0;

        repo.expect_find_by_id().times(2).returning(move |_, _| {
            reads += 1;
            let status = if reads == 1 {
                CandidateStatus::Screening
            } else {
                CandidateStatus::Interview
            };
            Ok(Some(candidate(status, None)))
        });
        repo.expect_transition()
            .withf(|id, company_id, from, to| {
                *id == 5
                    && *company_id == 1
                    && *from == CandidateStatus::Screening
                    && *to == CandidateStatus::Interview
            })
            .times(1)
            .returning(|_, _, _, _| Ok(true));

        let updated = CandidateService::new(Arc::new(repo))
            .change_status(1, 5, CandidateStatus::Interview)
            .await
            .unwrap();

        assert_eq!(updated.status, CandidateStatus::Interview);
    }

    #[tokio::test]
    async fn test_change_status_rejects_out_of_order() {
        let mut repo = MockCandidateRepository::new();
        repo.expect_find_by_id()
            .returning(|_, _| Ok(Some(candidate(CandidateStatus::Screening, None))));
        repo.expect_transition().never();

        let err = CandidateService::new(Arc::new(repo))
            .change_status(1, 5, CandidateStatus::Hired)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_change_status_cannot_skip_scheduling() {
        let mut repo = MockCandidateRepository::new();
        repo.expect_find_by_id()
            .returning(|_, _| Ok(Some(candidate(CandidateStatus::Interview, None))));
        repo.expect_transition().never();

        let err = CandidateService::new(Arc::new(repo))
            .change_status(1, 5, CandidateStatus::InterviewSet)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_terminal_status_is_final() {
        let mut repo = MockCandidateRepository::new();
        repo.expect_find_by_id()
            .returning(|_, _| Ok(Some(candidate(CandidateStatus::Rejected, None))));
        repo.expect_transition().never();

        let result = CandidateService::new(Arc::new(repo))
            .change_status(1, 5, CandidateStatus::Screening)
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_change_status_lost_race() {
        let mut repo = MockCandidateRepository::new();
        repo.expect_find_by_id()
            .returning(|_, _| Ok(Some(candidate(CandidateStatus::Interview, None))));
        repo.expect_transition().returning(|_, _, _, _| Ok(false));

        let err = CandidateService::new(Arc::new(repo))
            .change_status(1, 5, CandidateStatus::Rejected)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_schedule_interview_sets_interview_set() {
        let mut repo = MockCandidateRepository::new();
        let mut reads = 0;

        repo.expect_find_by_id().times(2).returning(move |_, _| {
            reads += 1;
            if reads == 1 {
                Ok(Some(candidate(CandidateStatus::Interview, None)))
            } else {
                let mut stored = schedule();
                stored.meeting_link = "https://meet.example.com/abc".to_string();
                Ok(Some(candidate(CandidateStatus::InterviewSet, Some(stored))))
            }
        });
        repo.expect_schedule_interview()
            .withf(|id, _, s| *id == 5 && s.meeting_link == "https://meet.example.com/abc")
            .times(1)
            .returning(|_, _, _| Ok(true));

        let updated = CandidateService::new(Arc::new(repo))
            .schedule_interview(1, 5, schedule())
            .await
            .unwrap();

        assert_eq!(updated.status, CandidateStatus::InterviewSet);
        let stored = updated.schedule.unwrap();
        assert_eq!(stored.notes.as_deref(), Some("Bring portfolio"));
        assert_eq!(stored.date, NaiveDate::from_ymd_opt(2026, 11, 3).unwrap());
    }

    #[tokio::test]
    async fn test_schedule_interview_requires_interview_stage() {
        let mut repo = MockCandidateRepository::new();
        repo.expect_find_by_id()
            .returning(|_, _| Ok(Some(candidate(CandidateStatus::Screening, None))));
        repo.expect_schedule_interview().never();

        let err = CandidateService::new(Arc::new(repo))
            .schedule_interview(1, 5, schedule())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_schedule_interview_requires_meeting_link() {
        let mut repo = MockCandidateRepository::new();
        repo.expect_find_by_id().never();

        let mut input = schedule();
        input.meeting_link = "  ".to_string();

        let err = CandidateService::new(Arc::new(repo))
            .schedule_interview(1, 5, input)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_schedule_interview_rejects_script_link() {
        let mut repo = MockCandidateRepository::new();
        repo.expect_find_by_id().never();
        repo.expect_schedule_interview().never();

        let mut input = schedule();
        input.meeting_link = "javascript:alert(document.cookie)".to_string();

        let err = CandidateService::new(Arc::new(repo))
            .schedule_interview(1, 5, input)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Links must be full http:// or https:// addresses");
    }

    #[tokio::test]
    async fn test_delete_scoped_to_company() {
        let mut repo = MockCandidateRepository::new();
        repo.expect_delete()
            .withf(|id, company_id| *id == 5 && *company_id == 2)
            .times(1)
            .returning(|_, _| Ok(false));

        let err = CandidateService::new(Arc::new(repo))
            .delete(2, 5)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
