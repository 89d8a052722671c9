// Library for tests to access modules

pub mod config;
pub mod error;
pub mod event_repo;
pub mod incidents;
pub mod metrics;
pub mod models;
pub mod retention_worker;
pub mod routes;
pub mod version;
