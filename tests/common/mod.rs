// Shared test helpers

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use statusboard::event_repo::EventRepo;
use statusboard::models::*;
use tempfile::TempDir;

pub fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid RFC 3339")
        .with_timezone(&Utc)
}

pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

pub fn sample(timestamp: &str, success: u64, total: u64) -> RawSample {
    RawSample::new(ts(timestamp), success, total)
}

pub fn check(service_id: u64, timestamp: DateTime<Utc>, up: bool) -> HealthCheckEvent {
    HealthCheckEvent {
        service_id,
        timestamp,
        kind: if up {
            HealthCheckKind::ServiceUp
        } else {
            HealthCheckKind::ServiceDown
        },
    }
}

pub fn incident_log(incident_id: &str, service_id: u64, timestamp: &str, type_: &str) -> IncidentLog {
    IncidentLog {
        incident_id: incident_id.into(),
        service_id,
        oncaller: None,
        timestamp: ts(timestamp),
        type_: type_.into(),
    }
}

/// Hourly series shaped like the dashboard's sample data.
pub fn hourly_series() -> MetricsSeries {
    MetricsSeries {
        granularity: Granularity::Hour,
        data: vec![
            sample("2024-10-01T00:00:00Z", 95, 105),
            sample("2024-10-01T01:00:00Z", 98, 100),
            sample("2024-10-01T02:00:00Z", 97, 120),
            sample("2024-10-01T03:00:00Z", 0, 0),
            sample("2024-10-01T04:00:00Z", 96, 100),
            sample("2024-10-01T05:00:00Z", 100, 100),
        ],
    }
}

/// Fresh initialized repo in a temp dir; keep the TempDir alive for the test's duration.
pub async fn temp_repo(retention_days: u32) -> (TempDir, EventRepo) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("events.db");
    let repo = EventRepo::connect(path.to_str().unwrap(), 2, retention_days)
        .await
        .unwrap();
    repo.init().await.unwrap();
    (dir, repo)
}
