// SQLite event store: health-check probe outcomes and incident log entries.
// Timestamps are stored as epoch milliseconds.

mod mapping;

use crate::models::{HealthCheckEvent, HealthCheckKind, IncidentLog};
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use tracing::instrument;

pub struct EventRepo {
    pool: SqlitePool,
    retention_ms: i64,
}

impl EventRepo {
    pub async fn connect(
        path: &str,
        max_pool_size: u32,
        retention_days: u32,
    ) -> anyhow::Result<Self> {
        if let Some(parent) = Path::new(path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(std::time::Duration::from_secs(5))
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_pool_size)
            .connect_with(opts)
            .await?;
        let retention_ms = (retention_days as i64) * 24 * 60 * 60 * 1000;
        Ok(Self { pool, retention_ms })
    }

    pub async fn init(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS health_checks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                service_id INTEGER NOT NULL,
                created_at INTEGER NOT NULL,
                kind TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_health_checks_service_created_at ON health_checks(service_id, created_at)",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS incident_logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                incident_id TEXT NOT NULL,
                service_id INTEGER NOT NULL,
                oncaller TEXT,
                created_at INTEGER NOT NULL,
                type TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_incident_logs_service ON incident_logs(service_id, created_at)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[instrument(skip(self, event), fields(repo = "events", operation = "record_health_check", service_id = event.service_id))]
    pub async fn record_health_check(&self, event: &HealthCheckEvent) -> anyhow::Result<()> {
        sqlx::query("INSERT INTO health_checks (service_id, created_at, kind) VALUES ($1, $2, $3)")
            .bind(event.service_id as i64)
            .bind(event.timestamp.timestamp_millis())
            .bind(event.kind.as_str())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Probes for one service with created_at >= after. Order: ascending by created_at.
    #[instrument(skip(self), fields(repo = "events", operation = "health_checks_since"))]
    pub async fn health_checks_since(
        &self,
        service_id: u64,
        after: DateTime<Utc>,
    ) -> anyhow::Result<Vec<HealthCheckEvent>> {
        let rows = sqlx::query(
            "SELECT service_id, created_at, kind FROM health_checks
             WHERE service_id = $1 AND created_at >= $2 ORDER BY created_at ASC",
        )
        .bind(service_id as i64)
        .bind(after.timestamp_millis())
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            if let Some(event) = mapping::parse_health_check_row(&row)? {
                out.push(event);
            }
        }
        Ok(out)
    }

    /// Kind of the most recent probe for a service, if any.
    pub async fn latest_health_check(
        &self,
        service_id: u64,
    ) -> anyhow::Result<Option<HealthCheckKind>> {
        let kind = sqlx::query_scalar::<_, String>(
            "SELECT kind FROM health_checks WHERE service_id = $1 ORDER BY created_at DESC, id DESC LIMIT 1",
        )
        .bind(service_id as i64)
        .fetch_optional(&self.pool)
        .await?;
        Ok(kind.as_deref().and_then(HealthCheckKind::from_stored))
    }

    #[instrument(skip(self, log), fields(repo = "events", operation = "record_incident_log", incident_id = %log.incident_id))]
    pub async fn record_incident_log(&self, log: &IncidentLog) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO incident_logs (incident_id, service_id, oncaller, created_at, type) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&log.incident_id)
        .bind(log.service_id as i64)
        .bind(log.oncaller.as_deref())
        .bind(log.timestamp.timestamp_millis())
        .bind(&log.type_)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// All incident log entries for a service. Order: ascending by created_at.
    #[instrument(skip(self), fields(repo = "events", operation = "incident_logs"))]
    pub async fn incident_logs(&self, service_id: u64) -> anyhow::Result<Vec<IncidentLog>> {
        let rows = sqlx::query(
            "SELECT incident_id, service_id, oncaller, created_at, type FROM incident_logs
             WHERE service_id = $1 ORDER BY created_at ASC",
        )
        .bind(service_id as i64)
        .fetch_all(&self.pool)
        .await?;

        let mut out = Vec::with_capacity(rows.len());
        for row in rows {
            out.push(mapping::parse_incident_row(&row)?);
        }
        Ok(out)
    }

    /// Delete probes older than retention_days, and whole incidents whose newest
    /// log is older than that. Returns rows removed.
    #[instrument(skip(self), fields(repo = "events", operation = "prune_old_data"))]
    pub async fn prune_old_data(&self) -> anyhow::Result<u64> {
        let cutoff = Utc::now().timestamp_millis() - self.retention_ms;
        let checks = sqlx::query("DELETE FROM health_checks WHERE created_at < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await?;
        // An incident straddling the cutoff keeps its INCIDENT_START.
        let logs = sqlx::query(
            r#"
            DELETE FROM incident_logs
            WHERE (service_id, incident_id) IN (
                SELECT service_id, incident_id FROM incident_logs
                GROUP BY service_id, incident_id
                HAVING MAX(created_at) < $1
            )
            "#,
        )
        .bind(cutoff)
        .execute(&self.pool)
        .await?;
        Ok(checks.rows_affected() + logs.rows_affected())
    }

    /// Reclaim space after deletes (run periodically after pruning).
    #[instrument(skip(self), fields(repo = "events", operation = "vacuum"))]
    pub async fn vacuum(&self) -> anyhow::Result<()> {
        sqlx::query("VACUUM").execute(&self.pool).await?;
        Ok(())
    }
}
