//! Derived candidate pipeline view: status filter, search and sort.

use crate::domain::entities::{Candidate, CandidateStatus};
use serde::Deserialize;

/// Ordering by application date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
        }
    }
}

/// Filter, search and sort options for the candidate list.
#[derive(Debug, Clone, Default)]
pub struct PipelineQuery {
    /// `None` shows every status.
    pub status: Option<CandidateStatus>,
    pub search: Option<String>,
    pub sort: SortOrder,
}

impl PipelineQuery {
    /// Applies the query to a candidate list.
    ///
    /// Search is a case-insensitive substring match on name, email or job title.
    pub fn apply(&self, candidates: Vec<Candidate>) -> Vec<Candidate> {
        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let mut list: Vec<Candidate> = candidates
            .into_iter()
            .filter(|c| self.status.is_none_or(|s| c.status == s))
            .filter(|c| match &needle {
                Some(q) => {
                    c.name.to_lowercase().contains(q)
                        || c.email.to_lowercase().contains(q)
                        || c.job_title.to_lowercase().contains(q)
                }
                None => true,
            })
            .collect();

        match self.sort {
            SortOrder::Newest => list.sort_by(|a, b| b.applied_at.cmp(&a.applied_at)),
            SortOrder::Oldest => list.sort_by(|a, b| a.applied_at.cmp(&b.applied_at)),
        }

        list
    }
}
