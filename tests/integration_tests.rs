// Integration tests: HTTP endpoints over a temp SQLite store

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::{Duration, Utc};
use serde_json::{Value, json};
use statusboard::config::AppConfig;
use statusboard::routes;
use std::sync::Arc;
use tempfile::TempDir;

const TEST_CONFIG: &str = r#"
[server]
port = 8080
host = "0.0.0.0"

[database]
path = "data/test.db"
max_pool_size = 2

[display]
timezone = "utc"
"#;

async fn test_server() -> (TempDir, TestServer) {
    let config = AppConfig::load_from_str(TEST_CONFIG).unwrap();
    let (dir, repo) = common::temp_repo(config.database.retention_days).await;
    let app = routes::app(Arc::new(repo), config);
    (dir, TestServer::try_new(app).unwrap())
}

#[tokio::test]
async fn test_version_endpoint() {
    let (_dir, server) = test_server().await;
    let response = server.get("/version").await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(
        json.get("name").and_then(|v| v.as_str()),
        Some("statusboard")
    );
    assert!(json.get("version").and_then(|v| v.as_str()).is_some());
}

#[tokio::test]
async fn test_render_returns_colored_points() {
    let (_dir, server) = test_server().await;
    let body = json!({
        "granularity": "week",
        "data": [
            { "timestamp": "2024-10-01T00:00:00Z", "success": 75, "total": 100 },
            { "timestamp": "2024-10-02T00:00:00Z", "success": 100, "total": 100 },
            { "timestamp": "2024-10-03T00:00:00Z", "success": 0, "total": 0 }
        ]
    });
    let response = server.post("/api/metrics/render").json(&body).await;
    response.assert_status_ok();
    let json: Value = response.json();
    assert_eq!(json["granularity"], "week");
    let points = json["points"].as_array().unwrap();
    assert_eq!(points.len(), 3);
    assert_eq!(points[0]["color"], "hsl(0, 85%, 45%)");
    assert_eq!(points[0]["error"], 25);
    assert_eq!(points[0]["tick"], "01 Oct");
    assert_eq!(points[1]["color"], "hsl(120, 85%, 45%)");
    assert_eq!(points[2]["uptime"], 0.0);
    assert_eq!(json["config"]["uptime"]["label"], "Uptime (%)");
}

#[tokio::test]
async fn test_render_rejects_success_above_total() {
    let (_dir, server) = test_server().await;
    let body = json!({
        "granularity": "hour",
        "data": [{ "timestamp": "2024-10-01T00:00:00Z", "success": 5, "total": 4 }]
    });
    let response = server.post("/api/metrics/render").json(&body).await;
    response.assert_status_bad_request();
    let json: Value = response.json();
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_render_rejects_unknown_granularity() {
    let (_dir, server) = test_server().await;
    let body = json!({ "granularity": "year", "data": [] });
    let response = server.post("/api/metrics/render").json(&body).await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json: Value = response.json();
    assert_eq!(json["code"], "UNPROCESSABLE_ENTITY");
    assert!(json["message"].as_str().unwrap().contains("granularity"));
}

#[tokio::test]
async fn test_render_rejects_malformed_json_with_error_body() {
    let (_dir, server) = test_server().await;
    let response = server
        .post("/api/metrics/render")
        .text("{\"granularity\": ")
        .content_type("application/json")
        .await;
    response.assert_status_bad_request();
    let json: Value = response.json();
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_metrics_rejects_unknown_granularity_query() {
    let (_dir, server) = test_server().await;
    let response = server
        .get("/api/services/1/metrics")
        .add_query_param("granularity", "decade")
        .await;
    response.assert_status_bad_request();
    let json: Value = response.json();
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_non_numeric_service_id_gets_error_body() {
    let (_dir, server) = test_server().await;
    let response = server.get("/api/services/abc/status").await;
    response.assert_status_bad_request();
    let json: Value = response.json();
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_recorded_checks_show_up_in_metrics_and_status() {
    let (_dir, server) = test_server().await;

    let status: Value = server.get("/api/services/3/status").await.json();
    assert_eq!(status["status"], "UNKNOWN");
    assert_eq!(status["color"], "#888888");

    let now = Utc::now();
    for (offset_secs, kind) in [(30, "ServiceUp"), (20, "ServiceUp"), (10, "ServiceDown")] {
        let response = server
            .post("/api/services/3/checks")
            .json(&json!({
                "timestamp": (now - Duration::seconds(offset_secs)).to_rfc3339(),
                "kind": kind,
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
    }

    let response = server
        .get("/api/services/3/metrics")
        .add_query_param("granularity", "day")
        .await;
    response.assert_status_ok();
    let json: Value = response.json();
    let points = json["points"].as_array().unwrap();
    assert_eq!(points.len(), 24);
    let total: u64 = points.iter().map(|p| p["total"].as_u64().unwrap()).sum();
    let success: u64 = points.iter().map(|p| p["success"].as_u64().unwrap()).sum();
    assert_eq!((success, total), (2, 3));

    let status: Value = server.get("/api/services/3/status").await.json();
    assert_eq!(status["status"], "DOWN");
    assert_eq!(status["color"], "#ef4444");
}

#[tokio::test]
async fn test_metrics_defaults_to_hour() {
    let (_dir, server) = test_server().await;
    let json: Value = server.get("/api/services/9/metrics").await.json();
    assert_eq!(json["granularity"], "hour");
    assert_eq!(json["points"].as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn test_incidents_endpoint_groups_and_orders() {
    let (_dir, server) = test_server().await;
    let logs = [
        ("inc-old", "2024-10-01T10:00:00Z", "INCIDENT_START", None),
        ("inc-old", "2024-10-01T10:05:00Z", "ONCALLER_NOTIFIED", Some("a@example.com")),
        ("inc-new", "2024-10-05T08:00:00Z", "INCIDENT_START", None),
    ];
    for (id, ts, type_, oncaller) in logs {
        let response = server
            .post("/api/services/4/incident-logs")
            .json(&json!({
                "incidentId": id,
                "timestamp": ts,
                "type": type_,
                "oncaller": oncaller,
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
    }

    let response = server.get("/api/services/4/incidents").await;
    response.assert_status_ok();
    let json: Value = response.json();
    let incidents = json.as_array().unwrap();
    assert_eq!(incidents.len(), 2);
    assert_eq!(incidents[0]["id"], "inc-new");
    assert_eq!(incidents[1]["id"], "inc-old");
    assert_eq!(incidents[1]["events"].as_array().unwrap().len(), 2);
    assert_eq!(incidents[1]["events"][1]["oncaller"], "a@example.com");
}

#[tokio::test]
async fn test_incident_log_requires_incident_id() {
    let (_dir, server) = test_server().await;
    let response = server
        .post("/api/services/4/incident-logs")
        .json(&json!({ "incidentId": "  ", "type": "INCIDENT_START" }))
        .await;
    response.assert_status_bad_request();
}
