// Bucketing: health-check events -> success/total buckets covering one window.
// Sub-day buckets are epoch-aligned to the granularity's width. Day-wide
// buckets start at midnight in the display zone, so each bar matches its tick.
// The last bucket is the one containing `now`.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone, Utc};

use super::DisplayTimezone;
use crate::models::{Granularity, HealthCheckEvent, MetricsSeries, RawSample};

/// Start of `date` in `tz`, as a UTC instant.
fn local_midnight<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&midnight)
        .earliest()
        // midnight skipped by a DST jump
        .or_else(|| tz.from_local_datetime(&(midnight + Duration::hours(1))).earliest())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| midnight.and_utc())
}

/// Bucket edges in ascending order: `count + 1` instants, the last one exclusive.
fn bucket_edges<Tz: TimeZone>(
    granularity: Granularity,
    now: DateTime<Utc>,
    tz: &Tz,
) -> Vec<DateTime<Utc>> {
    let width = granularity.bucket_width();
    let count = (granularity.window().num_milliseconds() / width.num_milliseconds()) as i64;

    if width >= Duration::days(1) {
        let step = width.num_days();
        let today = now.with_timezone(tz).date_naive();
        return (0..=count)
            .map(|i| local_midnight(today + Duration::days((i - count + 1) * step), tz))
            .collect();
    }

    let width_ms = width.num_milliseconds();
    let now_ms = now.timestamp_millis();
    let end_ms = now_ms.div_euclid(width_ms) * width_ms + width_ms;
    let end = now + Duration::milliseconds(end_ms - now_ms);
    (0..=count).map(|i| end - width * (count - i) as i32).collect()
}

/// Start (inclusive) and end (exclusive) of the window ending with the bucket that contains `now`.
pub fn window_bounds<Tz: TimeZone>(
    granularity: Granularity,
    now: DateTime<Utc>,
    tz: &Tz,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let edges = bucket_edges(granularity, now, tz);
    (edges[0], edges[edges.len() - 1])
}

/// Counts probes per bucket. Every bucket in the window is emitted, empty ones with 0/0.
pub fn bucket_health_checks<Tz: TimeZone>(
    events: &[HealthCheckEvent],
    granularity: Granularity,
    now: DateTime<Utc>,
    tz: &Tz,
) -> MetricsSeries {
    let edges = bucket_edges(granularity, now, tz);
    let (start, end) = (edges[0], edges[edges.len() - 1]);

    let mut data: Vec<RawSample> = edges[..edges.len() - 1]
        .iter()
        .map(|&edge| RawSample::new(edge, 0, 0))
        .collect();

    for event in events {
        if event.timestamp < start || event.timestamp >= end {
            continue;
        }
        let idx = edges.partition_point(|edge| *edge <= event.timestamp) - 1;
        let Some(bucket) = data.get_mut(idx) else {
            continue;
        };
        bucket.total += 1;
        if event.kind.is_up() {
            bucket.success += 1;
        }
    }

    MetricsSeries { granularity, data }
}

impl DisplayTimezone {
    pub fn window_bounds(
        self,
        granularity: Granularity,
        now: DateTime<Utc>,
    ) -> (DateTime<Utc>, DateTime<Utc>) {
        match self {
            DisplayTimezone::Local => window_bounds(granularity, now, &Local),
            DisplayTimezone::Utc => window_bounds(granularity, now, &Utc),
        }
    }

    pub fn bucket_health_checks(
        self,
        events: &[HealthCheckEvent],
        granularity: Granularity,
        now: DateTime<Utc>,
    ) -> MetricsSeries {
        match self {
            DisplayTimezone::Local => bucket_health_checks(events, granularity, now, &Local),
            DisplayTimezone::Utc => bucket_health_checks(events, granularity, now, &Utc),
        }
    }
}
