//! JSON body of `GET /health`.

use serde::Serialize;

use crate::application::services::{ComponentHealth, HealthReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: OverallStatus,
    pub version: &'static str,
    pub checks: Checks,
}

#[derive(Debug, Serialize)]
pub struct Checks {
    pub database: ComponentCheck,
    pub storage: ComponentCheck,
}

#[derive(Debug, Serialize)]
pub struct ComponentCheck {
    pub status: ComponentStatus,
    pub message: String,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == OverallStatus::Healthy
    }
}

impl From<ComponentHealth> for ComponentCheck {
    fn from(component: ComponentHealth) -> Self {
        let status = if component.ok {
            ComponentStatus::Ok
        } else {
            ComponentStatus::Error
        };

        Self {
            status,
            message: component.message,
        }
    }
}

impl From<HealthReport> for HealthResponse {
    fn from(report: HealthReport) -> Self {
        let status = if report.is_healthy() {
            OverallStatus::Healthy
        } else {
            OverallStatus::Degraded
        };

        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
            checks: Checks {
                database: report.database.into(),
                storage: report.storage.into(),
            },
        }
    }
}
