// Domain models shared by the aggregator, the event store and the HTTP layer

mod health;
mod incident;
mod metrics;
mod service;

pub use health::{HealthCheckEvent, HealthCheckKind};
pub use incident::{Incident, IncidentEvent, IncidentLog};
pub use metrics::{DerivedSample, Granularity, MetricsSeries, RawSample};
pub use service::{ServiceStatus, StatusBadge};
