//! Component checks behind the health endpoint.

use std::sync::Arc;

use crate::domain::repositories::HrUserRepository;
use crate::domain::storage::ObjectStorage;

/// Result of probing one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentHealth {
    pub ok: bool,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct HealthReport {
    pub database: ComponentHealth,
    pub storage: ComponentHealth,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.database.ok && self.storage.ok
    }
}

pub struct HealthService {
    hr_users: Arc<dyn HrUserRepository>,
    storage: Arc<dyn ObjectStorage>,
}

impl HealthService {
    pub fn new(hr_users: Arc<dyn HrUserRepository>, storage: Arc<dyn ObjectStorage>) -> Self {
        Self { hr_users, storage }
    }

    /// Runs a cheap query against the database and probes the object store.
    pub async fn check(&self) -> HealthReport {
        let database = match self.hr_users.count().await {
            Ok(count) => ComponentHealth {
                ok: true,
                message: format!("Connected, {count} HR users"),
            },
            Err(e) => ComponentHealth {
                ok: false,
                message: format!("Database error: {e}"),
            },
        };

        let storage = if self.storage.health_check().await {
            ComponentHealth {
                ok: true,
                message: "Storage available".to_string(),
            }
        } else {
            ComponentHealth {
                ok: false,
                message: "Storage directory unavailable".to_string(),
            }
        };

        HealthReport { database, storage }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockHrUserRepository;
    use crate::domain::storage::MockObjectStorage;
    use crate::error::AppError;
    use serde_json::json;

    #[tokio::test]
    async fn test_healthy() {
        let mut hr_users = MockHrUserRepository::new();
        let mut storage = MockObjectStorage::new();
        hr_users.expect_count().returning(|| Ok(3));
        storage.expect_health_check().returning(|| true);

        let report = HealthService::new(Arc::new(hr_users), Arc::new(storage))
            .check()
            .await;

        assert!(report.is_healthy());
        assert_eq!(report.database.message, "Connected, 3 HR users");
    }

    #[tokio::test]
    async fn test_database_down() {
        let mut hr_users = MockHrUserRepository::new();
        let mut storage = MockObjectStorage::new();
        hr_users
            .expect_count()
            .returning(|| Err(AppError::internal("Database error", json!({}))));
        storage.expect_health_check().returning(|| true);

        let report = HealthService::new(Arc::new(hr_users), Arc::new(storage))
            .check()
            .await;

        assert!(!report.is_healthy());
        assert!(!report.database.ok);
        assert!(report.storage.ok);
    }
}
