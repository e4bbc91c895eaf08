//! Dashboard overview counters.

use std::sync::Arc;

use crate::application::services::session_service::CurrentHr;
use crate::domain::entities::CandidateStatus;
use crate::domain::repositories::{CandidateRepository, HrUserRepository, JobRepository};
use crate::error::AppError;

/// Headline numbers shown on the dashboard landing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overview {
    pub open_jobs: i64,
    /// Candidates not yet hired or rejected.
    pub active_candidates: i64,
    /// Candidates in `interview`; scheduled ones (`interview_set`) are not counted.
    pub in_interview: i64,
    pub in_technical_test: i64,
    pub hired: i64,
    /// Only computed for admins.
    pub pending_approvals: Option<i64>,
}

pub struct OverviewService {
    jobs: Arc<dyn JobRepository>,
    candidates: Arc<dyn CandidateRepository>,
    hr_users: Arc<dyn HrUserRepository>,
}

impl OverviewService {
    pub fn new(
        jobs: Arc<dyn JobRepository>,
        candidates: Arc<dyn CandidateRepository>,
        hr_users: Arc<dyn HrUserRepository>,
    ) -> Self {
        Self {
            jobs,
            candidates,
            hr_users,
        }
    }

    pub async fn overview(&self, current: &CurrentHr) -> Result<Overview, AppError> {
        let company_id = current.company_id();

        let open_jobs = self.jobs.count_open(company_id).await?;
        let by_status = self.candidates.count_by_status(company_id).await?;

        let count = |wanted: CandidateStatus| {
            by_status
                .iter()
                .filter(|(status, _)| *status == wanted)
                .map(|(_, n)| n)
                .sum::<i64>()
        };

        let active_candidates = by_status
            .iter()
            .filter(|(status, _)| status.is_active())
            .map(|(_, n)| n)
            .sum();

        let pending_approvals = if current.is_admin() {
            Some(self.hr_users.count_pending(company_id).await?)
        } else {
            None
        };

        Ok(Overview {
            open_jobs,
            active_candidates,
            in_interview: count(CandidateStatus::Interview),
            in_technical_test: count(CandidateStatus::TechnicalTest),
            hired: count(CandidateStatus::Hired),
            pending_approvals,
        })
    }
}
