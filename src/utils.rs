// Time helpers for building dated query parameters.

use chrono::{DateTime, Duration, TimeZone, Utc};

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Unix timestamp of the start of the UTC day `days_back` days before `now`.
/// Daily subgraph snapshots are keyed by these values.
pub fn utc_day_start(now: DateTime<Utc>, days_back: i64) -> i64 {
    let day = (now - Duration::days(days_back)).date_naive();
    day.and_hms_opt(0, 0, 0)
        .map(|t| Utc.from_utc_datetime(&t).timestamp())
        .unwrap_or_else(|| now.timestamp() - days_back * SECONDS_PER_DAY)
}

/// Floors a unix timestamp to its UTC day start.
pub fn floor_to_day(timestamp: i64) -> i64 {
    timestamp - timestamp.rem_euclid(SECONDS_PER_DAY)
}
