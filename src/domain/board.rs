//! Public job board filtering.

use crate::domain::entities::JobListing;

/// Employment types offered by the posting form and board filter.
pub const EMPLOYMENT_TYPES: &[&str] = &["Full-time", "Part-time", "Internship", "Contract"];

/// Search and employment-type filter for the public board.
#[derive(Debug, Clone, Default)]
pub struct BoardQuery {
    pub search: Option<String>,
    /// `None` shows every type.
    pub employment_type: Option<String>,
}

impl BoardQuery {
    /// Keeps listings whose title or description contains the search text
    /// (case-insensitive) and whose employment type matches exactly.
    pub fn apply(&self, listings: Vec<JobListing>) -> Vec<JobListing> {
        let needle = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        listings
            .into_iter()
            .filter(|l| match &needle {
                Some(q) => {
                    l.job.title.to_lowercase().contains(q)
                        || l.job.description.to_lowercase().contains(q)
                }
                None => true,
            })
            .filter(|l| {
                self.employment_type
                    .as_deref()
                    .is_none_or(|t| l.job.employment_type == t)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CompanySummary, Job, JobStatus};
    use chrono::Utc;

    fn listing(id: i64, title: &str, description: &str, employment_type: &str) -> JobListing {
        JobListing {
            job: Job {
                id,
                company_id: 1,
                title: title.to_string(),
                job_level: "Mid".to_string(),
                education: "S1".to_string(),
                employment_type: employment_type.to_string(),
                experience: None,
                work_setup: "Remote".to_string(),
                location: "Jakarta".to_string(),
                required_skills: None,
                description: description.to_string(),
                status: JobStatus::Open,
                created_at: Utc::now(),
            },
            company: CompanySummary::default(),
        }
    }

    fn sample() -> Vec<JobListing> {
        vec![
            listing(1, "Frontend Developer", "React and Tailwind", "Full-time"),
            listing(2, "Data Analyst", "SQL dashboards", "Contract"),
            listing(3, "QA Intern", "Manual testing of react apps", "Internship"),
        ]
    }

    fn ids(list: &[JobListing]) -> Vec<i64> {
        list.iter().map(|l| l.job.id).collect()
    }

    #[test]
    fn test_no_filters_returns_everything() {
        assert_eq!(ids(&BoardQuery::default().apply(sample())), vec![1, 2, 3]);
    }

    #[test]
    fn test_search_title_or_description() {
        let query = BoardQuery {
            search: Some("React".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(sample())), vec![1, 3]);
    }

    #[test]
    fn test_employment_type_filter() {
        let query = BoardQuery {
            employment_type: Some("Contract".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(sample())), vec![2]);
    }

    #[test]
    fn test_combined_filters() {
        let query = BoardQuery {
            search: Some("react".to_string()),
            employment_type: Some("Internship".to_string()),
        };
        assert_eq!(ids(&query.apply(sample())), vec![3]);
    }
}
