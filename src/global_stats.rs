//! Global dashboard stats: fetch plus derivation.
//!
//! The fetch side pulls the current factory aggregate and the one- and
//! two-day-back daily snapshots concurrently, then hands the three samples to
//! the pure derivation. A missing historical snapshot degrades the affected
//! change fields to `None`; it does not fail the fetch.

use chrono::Utc;
use log::info;

use crate::percent_change::{percent_change, two_day_window_change};
use crate::subgraph_client::{SubgraphClient, SubgraphError};
use crate::types::subgraph_data::GlobalSnapshot;
use crate::types::GlobalStats;
use crate::utils::utc_day_start;

/// Protocol fee rate applied to swap volume (0.3%).
pub const FEE_RATE: f64 = 0.003;

/// Derives the header stats from the three snapshot samples.
pub fn derive_global_stats(
    current: &GlobalSnapshot,
    one_day: Option<&GlobalSnapshot>,
    two_day: Option<&GlobalSnapshot>,
) -> GlobalStats {
    let volume = two_day_window_change(
        current.total_volume_usd,
        one_day.map(|d| d.total_volume_usd),
        two_day.map(|d| d.total_volume_usd),
    );
    let txns = two_day_window_change(
        current.tx_count as f64,
        one_day.map(|d| d.tx_count as f64),
        two_day.map(|d| d.tx_count as f64),
    );
    let liquidity_change = percent_change(
        current.total_liquidity_usd,
        one_day.map(|d| d.total_liquidity_usd),
    );

    GlobalStats {
        total_liquidity_usd: current.total_liquidity_usd,
        liquidity_change,
        one_day_volume_usd: volume.map(|w| w.delta),
        volume_change: volume.and_then(|w| w.change),
        one_day_txns: txns.map(|w| w.delta),
        txn_change: txns.and_then(|w| w.change),
        one_day_fees_usd: volume.map(|w| w.delta * FEE_RATE),
    }
}

/// Fetches all snapshots required for the header stats and derives them.
///
/// The three fetches are independent and run concurrently; derivation only
/// starts once every required sample has arrived.
pub async fn fetch_global_stats(client: &SubgraphClient) -> Result<GlobalStats, SubgraphError> {
    let now = Utc::now();
    let one_day_back = utc_day_start(now, 1);
    let two_days_back = utc_day_start(now, 2);

    let (current, one_day, two_day) = futures::try_join!(
        client.global_snapshot(),
        client.global_day_snapshot(one_day_back),
        client.global_day_snapshot(two_days_back),
    )?;

    let current = current.ok_or(SubgraphError::MissingData)?;
    if one_day.is_none() {
        info!("No one-day-back snapshot; change fields will be unavailable");
    }

    Ok(derive_global_stats(
        &current,
        one_day.as_ref(),
        two_day.as_ref(),
    ))
}
