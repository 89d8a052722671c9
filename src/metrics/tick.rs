// Axis tick and tooltip labels.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Granularity;

/// Zone used to render labels; "local" follows the host timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayTimezone {
    #[default]
    Local,
    Utc,
}

/// Tick label in `tz`: `HH:mm` for hour/day, `dd MMM` for week/month.
pub fn format_tick_in<Tz>(timestamp: &DateTime<Utc>, granularity: Granularity, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = timestamp.with_timezone(tz);
    match granularity {
        Granularity::Hour | Granularity::Day => local.format("%H:%M").to_string(),
        Granularity::Week | Granularity::Month => local.format("%d %b").to_string(),
    }
}

/// Tick label in the host timezone.
pub fn format_tick(timestamp: &DateTime<Utc>, granularity: Granularity) -> String {
    format_tick_in(timestamp, granularity, &Local)
}

/// Full date-time label for a sample tooltip, e.g. `01 Oct 2024, 05:00:00`.
pub fn format_tooltip_in<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp
        .with_timezone(tz)
        .format("%d %b %Y, %H:%M:%S")
        .to_string()
}
