// HTTP handlers: version, chart views, status badge, incidents, event ingestion

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::AppState;
use crate::error::AppError;
use crate::incidents::group_incidents;
use crate::metrics::ChartView;
use crate::models::{
    Granularity, HealthCheckEvent, HealthCheckKind, Incident, IncidentLog, MetricsSeries,
    ServiceStatus, StatusBadge,
};
use crate::version::VersionInfo;

/// GET /version: returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> Json<VersionInfo> {
    Json(VersionInfo::current())
}

#[derive(Debug, Deserialize)]
pub(super) struct MetricsQuery {
    #[serde(default)]
    granularity: Granularity,
}

/// POST /api/metrics/render: chart view for a series supplied by the caller.
pub(super) async fn render_handler(
    State(state): State<AppState>,
    body: Result<Json<MetricsSeries>, JsonRejection>,
) -> Result<Json<ChartView>, AppError> {
    let Json(series) = body?;
    if let Some(bad) = series.data.iter().find(|s| !s.is_consistent()) {
        return Err(AppError::BadRequest(format!(
            "sample at {} has success {} > total {}",
            bad.timestamp.to_rfc3339(),
            bad.success,
            bad.total
        )));
    }
    let view = state
        .config
        .display
        .timezone
        .build_chart_view(&series, &state.chart_config);
    Ok(Json(view))
}

/// GET /api/services/{id}/metrics?granularity=hour: chart view from stored probes.
pub(super) async fn service_metrics_handler(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    query: Result<Query<MetricsQuery>, QueryRejection>,
) -> Result<Json<ChartView>, AppError> {
    let Path(service_id) = path?;
    let Query(query) = query?;
    let tz = state.config.display.timezone;
    let now = Utc::now();
    let (start, _) = tz.window_bounds(query.granularity, now);
    let events = state.repo.health_checks_since(service_id, start).await?;
    let series = tz.bucket_health_checks(&events, query.granularity, now);
    tracing::debug!(
        service_id,
        granularity = %query.granularity,
        events = events.len(),
        buckets = series.data.len(),
        "built metrics series"
    );
    Ok(Json(tz.build_chart_view(&series, &state.chart_config)))
}

/// GET /api/services/{id}/status: status label and badge color from the latest probe.
pub(super) async fn service_status_handler(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<StatusBadge>, AppError> {
    let Path(service_id) = path?;
    let latest = state.repo.latest_health_check(service_id).await?;
    let status = ServiceStatus::from_latest(latest);
    Ok(Json(StatusBadge::new(service_id, status)))
}

/// GET /api/services/{id}/incidents: incidents newest first, events oldest first.
pub(super) async fn incidents_handler(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Vec<Incident>>, AppError> {
    let Path(service_id) = path?;
    let logs = state.repo.incident_logs(service_id).await?;
    Ok(Json(group_incidents(logs)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RecordCheckRequest {
    #[serde(default)]
    timestamp: Option<DateTime<Utc>>,
    kind: HealthCheckKind,
}

/// POST /api/services/{id}/checks: store one probe outcome (timestamp defaults to now).
pub(super) async fn record_check_handler(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<RecordCheckRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<HealthCheckEvent>), AppError> {
    let Path(service_id) = path?;
    let Json(req) = body?;
    let event = HealthCheckEvent {
        service_id,
        timestamp: req.timestamp.unwrap_or_else(Utc::now),
        kind: req.kind,
    };
    state.repo.record_health_check(&event).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RecordIncidentLogRequest {
    incident_id: String,
    #[serde(default)]
    oncaller: Option<String>,
    #[serde(default)]
    timestamp: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    type_: String,
}

/// POST /api/services/{id}/incident-logs: store one incident event.
pub(super) async fn record_incident_log_handler(
    State(state): State<AppState>,
    path: Result<Path<u64>, PathRejection>,
    body: Result<Json<RecordIncidentLogRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<IncidentLog>), AppError> {
    let Path(service_id) = path?;
    let Json(req) = body?;
    if req.incident_id.trim().is_empty() {
        return Err(AppError::BadRequest("incidentId must be non-empty".into()));
    }
    let log = IncidentLog {
        incident_id: req.incident_id,
        service_id,
        oncaller: req.oncaller,
        timestamp: req.timestamp.unwrap_or_else(Utc::now),
        type_: req.type_,
    };
    state.repo.record_incident_log(&log).await?;
    Ok((StatusCode::CREATED, Json(log)))
}
