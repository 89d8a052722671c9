// Chart view model: the derived series plus per-point color, tick and tooltip,
// and the label/color config shared by the uptime and volume projections.

use std::fmt::Display;

use chrono::{Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::{DisplayTimezone, Hsl, derive_series, format_tick_in, format_tooltip_in, uptime_to_color};
use crate::models::{DerivedSample, Granularity, MetricsSeries};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub label: String,
    pub color: String,
}

impl SeriesStyle {
    fn new(label: &str, color: &str) -> Self {
        Self {
            label: label.to_string(),
            color: color.to_string(),
        }
    }
}

/// Legend/tooltip config keyed by the three plotted fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub uptime: SeriesStyle,
    pub success: SeriesStyle,
    pub error: SeriesStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            uptime: SeriesStyle::new("Uptime (%)", "var(--color-green-500)"),
            success: SeriesStyle::new("Success", "var(--color-green-500)"),
            error: SeriesStyle::new("Errors", "var(--color-red-500)"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    #[serde(flatten)]
    pub sample: DerivedSample,
    /// Bar fill for the uptime view.
    pub color: Hsl,
    pub tick: String,
    pub tooltip: String,
}

/// Everything the client needs to draw both the uptime bars and the stacked volume bars.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView {
    pub granularity: Granularity,
    pub config: ChartConfig,
    pub points: Vec<ChartPoint>,
}

/// Builds the view with labels rendered in `tz`.
pub fn build_chart_view<Tz>(series: &MetricsSeries, config: &ChartConfig, tz: &Tz) -> ChartView
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let points = derive_series(series)
        .into_iter()
        .map(|sample| ChartPoint {
            color: uptime_to_color(sample.uptime),
            tick: format_tick_in(&sample.timestamp, series.granularity, tz),
            tooltip: format_tooltip_in(&sample.timestamp, tz),
            sample,
        })
        .collect();

    ChartView {
        granularity: series.granularity,
        config: config.clone(),
        points,
    }
}

impl DisplayTimezone {
    pub fn build_chart_view(self, series: &MetricsSeries, config: &ChartConfig) -> ChartView {
        match self {
            DisplayTimezone::Local => build_chart_view(series, config, &Local),
            DisplayTimezone::Utc => build_chart_view(series, config, &Utc),
        }
    }
}
