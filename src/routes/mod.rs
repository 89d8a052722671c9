// HTTP routes

mod http;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::event_repo::EventRepo;
use crate::metrics::ChartConfig;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) repo: Arc<EventRepo>,
    pub(crate) chart_config: Arc<ChartConfig>,
    pub(crate) config: AppConfig,
}

pub fn app(repo: Arc<EventRepo>, config: AppConfig) -> Router {
    let state = AppState {
        repo,
        chart_config: Arc::new(ChartConfig::default()),
        config,
    };
    Router::new()
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/metrics/render", post(http::render_handler)) // POST /api/metrics/render
        .route("/api/services/{id}/metrics", get(http::service_metrics_handler)) // GET /api/services/:id/metrics
        .route("/api/services/{id}/status", get(http::service_status_handler)) // GET /api/services/:id/status
        .route("/api/services/{id}/incidents", get(http::incidents_handler)) // GET /api/services/:id/incidents
        .route("/api/services/{id}/checks", post(http::record_check_handler)) // POST /api/services/:id/checks
        .route(
            "/api/services/{id}/incident-logs",
            post(http::record_incident_log_handler),
        ) // POST /api/services/:id/incident-logs
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
