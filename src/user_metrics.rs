//! User liquidity-value series for charting.
//!
//! Each position day snapshot carries the user's liquidity-token balance, the
//! pool's token supply and the pool's USD reserves at that time. The per-day
//! value is the sum over pools of ownership x reserveUSD; days where every
//! pool is degenerate contribute nothing.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use crate::position_metrics::pool_ownership;
use crate::types::subgraph_data::PositionDaySnapshot;
use crate::types::ChartPoint;
use crate::utils::floor_to_day;

/// Chart window selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timeframe {
    Week,
    #[default]
    Month,
    AllTime,
}

impl Timeframe {
    /// Earliest timestamp included in the window, or `None` for all time.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<i64> {
        match self {
            Timeframe::Week => Some((now - Duration::weeks(1)).timestamp()),
            Timeframe::Month => Some((now - Duration::days(30)).timestamp()),
            Timeframe::AllTime => None,
        }
    }
}

/// Builds the daily USD value series for a set of position snapshots.
///
/// Snapshots are grouped by UTC day; within one day the latest snapshot per
/// pair wins. The output is ordered by date ascending.
pub fn liquidity_value_series(snapshots: &[PositionDaySnapshot]) -> Vec<ChartPoint> {
    // day -> pair id -> (timestamp, value)
    let mut days: BTreeMap<i64, BTreeMap<&str, (u64, f64)>> = BTreeMap::new();

    for snapshot in snapshots {
        let Some(ownership) = pool_ownership(
            snapshot.liquidity_token_balance,
            snapshot.liquidity_token_total_supply,
        ) else {
            continue;
        };
        let value = ownership * snapshot.reserve_usd;
        if !value.is_finite() {
            continue;
        }

        let day = floor_to_day(snapshot.timestamp as i64);
        let per_pair = days.entry(day).or_default();
        match per_pair.get(snapshot.pair.id.as_str()) {
            Some((existing_ts, _)) if *existing_ts >= snapshot.timestamp => {}
            _ => {
                per_pair.insert(snapshot.pair.id.as_str(), (snapshot.timestamp, value));
            }
        }
    }

    days.into_iter()
        .map(|(date, per_pair)| ChartPoint {
            date,
            value_usd: per_pair.values().map(|(_, v)| v).sum(),
        })
        .collect()
}

/// Restricts a series to the requested timeframe.
pub fn window_series(points: &[ChartPoint], timeframe: Timeframe, now: DateTime<Utc>) -> Vec<ChartPoint> {
    match timeframe.cutoff(now) {
        Some(cutoff) => points.iter().filter(|p| p.date >= cutoff).copied().collect(),
        None => points.to_vec(),
    }
}
