// Status-metrics pipeline: raw success/total buckets -> uptime/error series,
// tick and tooltip labels, and the red-to-green color scale.
// Everything here is pure; storage and HTTP live elsewhere.

pub mod bucket;
pub mod chart;
mod color;
mod tick;

pub use bucket::bucket_health_checks;
pub use chart::{ChartConfig, ChartPoint, ChartView, SeriesStyle, build_chart_view};
pub use color::{Hsl, uptime_to_color};
pub use tick::{DisplayTimezone, format_tick, format_tick_in, format_tooltip_in};

use crate::models::{DerivedSample, MetricsSeries, RawSample};

/// Uptime percentage for one bucket; 0 when the bucket saw no probes.
pub fn uptime_percent(success: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (success as f64 / total as f64) * 100.0
}

pub fn derive_sample(sample: &RawSample) -> DerivedSample {
    DerivedSample {
        timestamp: sample.timestamp,
        success: sample.success,
        total: sample.total,
        uptime: uptime_percent(sample.success, sample.total),
        error: sample.total as i64 - sample.success as i64,
    }
}

/// Derives uptime and error for every sample. Same length and order as the input.
pub fn derive_series(series: &MetricsSeries) -> Vec<DerivedSample> {
    series.data.iter().map(derive_sample).collect()
}
