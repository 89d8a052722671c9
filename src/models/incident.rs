// Incident log entries and the grouped incident view used by the timeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stored incident event (e.g. "INCIDENT_START", "ONCALLER_NOTIFIED").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentLog {
    pub incident_id: String,
    pub service_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oncaller: Option<String>,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentEvent {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oncaller: Option<String>,
}

/// All events of one incident, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: String,
    pub service_id: u64,
    pub start_time: DateTime<Utc>,
    pub events: Vec<IncidentEvent>,
}
