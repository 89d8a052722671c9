// Status metrics: raw success/total buckets as delivered by the metrics source,
// and the derived uptime/error view computed from them.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Time-bucket width used both to request samples and to pick a tick format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Hour,
    Day,
    Week,
    Month,
}

impl Granularity {
    pub const ALL: [Granularity; 4] = [
        Granularity::Hour,
        Granularity::Day,
        Granularity::Week,
        Granularity::Month,
    ];

    /// Look-back window covered by one series ("last hour", "last 24 hours", ...).
    pub fn window(self) -> Duration {
        match self {
            Granularity::Hour => Duration::hours(1),
            Granularity::Day => Duration::hours(24),
            Granularity::Week => Duration::days(7),
            Granularity::Month => Duration::days(30),
        }
    }

    /// Width of a single bucket inside the window.
    pub fn bucket_width(self) -> Duration {
        match self {
            Granularity::Hour => Duration::minutes(5),
            Granularity::Day => Duration::hours(1),
            Granularity::Week | Granularity::Month => Duration::days(1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Hour => "hour",
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One time bucket of probe outcomes. Invariant: `success <= total`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSample {
    pub timestamp: DateTime<Utc>,
    pub success: u64,
    pub total: u64,
}

impl RawSample {
    pub fn new(timestamp: DateTime<Utc>, success: u64, total: u64) -> Self {
        Self {
            timestamp,
            success,
            total,
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.success <= self.total
    }
}

/// RawSample plus computed uptime percentage and error count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedSample {
    pub timestamp: DateTime<Utc>,
    pub success: u64,
    pub total: u64,
    /// 0..=100; 0 when `total == 0`.
    pub uptime: f64,
    /// `total - success`, signed so inconsistent input stays visible.
    pub error: i64,
}

/// Ordered series for one service at one granularity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSeries {
    pub granularity: Granularity,
    pub data: Vec<RawSample>,
}
