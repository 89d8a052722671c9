// Row -> model mapping for the event tables.

use crate::models::{HealthCheckEvent, HealthCheckKind, IncidentLog};
use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

fn millis_to_utc(ms: i64) -> anyhow::Result<DateTime<Utc>> {
    DateTime::from_timestamp_millis(ms)
        .ok_or_else(|| anyhow::anyhow!("created_at out of range: {}", ms))
}

/// Unknown kinds (written by a newer checker) are skipped, not fatal.
pub(super) fn parse_health_check_row(row: &SqliteRow) -> anyhow::Result<Option<HealthCheckEvent>> {
    let service_id: i64 = row.try_get("service_id")?;
    let created_at: i64 = row.try_get("created_at")?;
    let kind: String = row.try_get("kind")?;

    let Some(kind) = HealthCheckKind::from_stored(&kind) else {
        tracing::debug!(kind = %kind, "unknown health check kind, skipping row");
        return Ok(None);
    };

    Ok(Some(HealthCheckEvent {
        service_id: service_id as u64,
        timestamp: millis_to_utc(created_at)?,
        kind,
    }))
}

pub(super) fn parse_incident_row(row: &SqliteRow) -> anyhow::Result<IncidentLog> {
    let incident_id: String = row.try_get("incident_id")?;
    let service_id: i64 = row.try_get("service_id")?;
    let oncaller: Option<String> = row.try_get("oncaller")?;
    let created_at: i64 = row.try_get("created_at")?;
    let type_: String = row.try_get("type")?;

    Ok(IncidentLog {
        incident_id,
        service_id: service_id as u64,
        oncaller,
        timestamp: millis_to_utc(created_at)?,
        type_,
    })
}
