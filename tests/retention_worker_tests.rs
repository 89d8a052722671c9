// Retention worker tests: first tick prunes, shutdown stops the loop

mod common;

use chrono::{Duration, Utc};
use common::{check, temp_repo};
use statusboard::config::RetentionConfig;
use statusboard::retention_worker;
use std::sync::Arc;

#[tokio::test]
async fn worker_prunes_on_first_tick_and_stops_on_shutdown() {
    let (_dir, repo) = temp_repo(1).await;
    let now = Utc::now();
    repo.record_health_check(&check(1, now - Duration::days(5), false))
        .await
        .unwrap();
    repo.record_health_check(&check(1, now - Duration::seconds(5), true))
        .await
        .unwrap();
    let repo = Arc::new(repo);

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
    let handle = retention_worker::spawn(repo.clone(), RetentionConfig::default(), shutdown_rx);

    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    shutdown_tx.send(()).unwrap();
    tokio::time::timeout(std::time::Duration::from_secs(3), handle)
        .await
        .expect("worker stopped")
        .unwrap();

    let remaining = repo
        .health_checks_since(1, now - Duration::days(30))
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert!(remaining[0].kind.is_up());
}

#[tokio::test]
async fn run_one_tick_is_a_no_op_on_empty_store() {
    let (_dir, repo) = temp_repo(30).await;
    retention_worker::run_one_tick(&repo).await;
    let remaining = repo
        .health_checks_since(1, Utc::now() - Duration::days(30))
        .await
        .unwrap();
    assert!(remaining.is_empty());
}
