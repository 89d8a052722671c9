use serde::{Deserialize, Serialize};

use super::HealthCheckKind;

/// Current service status; serializes uppercase ("UP", "DOWN", "UNKNOWN").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServiceStatus {
    Up,
    Down,
    #[serde(other)]
    Unknown,
}

impl ServiceStatus {
    /// Status from the most recent probe; no probe yet means Unknown.
    pub fn from_latest(latest: Option<HealthCheckKind>) -> Self {
        match latest {
            Some(HealthCheckKind::ServiceUp) => ServiceStatus::Up,
            Some(HealthCheckKind::ServiceDown) => ServiceStatus::Down,
            None => ServiceStatus::Unknown,
        }
    }

    /// Badge background color (hex).
    pub fn badge_color(self) -> &'static str {
        match self {
            ServiceStatus::Up => "#22c55e",
            ServiceStatus::Down => "#ef4444",
            ServiceStatus::Unknown => "#888888",
        }
    }
}

/// Status payload for the badge: status label plus its color.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBadge {
    pub service_id: u64,
    pub status: ServiceStatus,
    pub color: String,
}

impl StatusBadge {
    pub fn new(service_id: u64, status: ServiceStatus) -> Self {
        Self {
            service_id,
            status,
            color: status.badge_color().to_string(),
        }
    }
}
