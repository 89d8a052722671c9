// Health-check probe outcomes as published by the checker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Probe result; serializes as "ServiceUp" / "ServiceDown".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthCheckKind {
    ServiceUp,
    ServiceDown,
}

impl HealthCheckKind {
    pub fn as_str(self) -> &'static str {
        match self {
            HealthCheckKind::ServiceUp => "ServiceUp",
            HealthCheckKind::ServiceDown => "ServiceDown",
        }
    }

    /// Parse a stored kind column. Unknown strings yield None.
    pub fn from_stored(s: &str) -> Option<Self> {
        match s {
            "ServiceUp" => Some(HealthCheckKind::ServiceUp),
            "ServiceDown" => Some(HealthCheckKind::ServiceDown),
            _ => None,
        }
    }

    pub fn is_up(self) -> bool {
        matches!(self, HealthCheckKind::ServiceUp)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckEvent {
    pub service_id: u64,
    pub timestamp: DateTime<Utc>,
    pub kind: HealthCheckKind,
}
