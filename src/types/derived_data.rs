//! Derived records produced by the metrics layer and consumed by the
//! rendering layer. All fields are plain computed values; nothing here is
//! mutated after construction.

use serde::Serialize;

/// Normalized transaction classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    Add,
    Remove,
    Swap,
}

/// One UI-ready transaction row.
///
/// For swaps, `token0_*` is the sold side and `token1_*` the bought side,
/// regardless of the pair's on-chain token ordering. Adds and removes keep the
/// pair's own ordering.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionEvent {
    pub hash: String,
    pub timestamp: u64,
    pub kind: EventKind,
    pub token0_symbol: String,
    pub token1_symbol: String,
    pub token0_amount: f64,
    pub token1_amount: f64,
    pub amount_usd: f64,
    pub account: String,
}

impl TransactionEvent {
    /// Human label in the dashboard's "Swap X for Y" style. Long symbols are
    /// shortened to keep table cells stable.
    pub fn label(&self) -> String {
        let s0 = shorten_symbol(&self.token0_symbol);
        let s1 = shorten_symbol(&self.token1_symbol);
        match self.kind {
            EventKind::Add => format!("Add {s0} and {s1}"),
            EventKind::Remove => format!("Remove {s0} and {s1}"),
            EventKind::Swap => format!("Swap {s0} for {s1}"),
        }
    }
}

fn shorten_symbol(symbol: &str) -> String {
    if symbol.chars().count() > 8 {
        let head: String = symbol.chars().take(7).collect();
        format!("{head}...")
    } else {
        symbol.to_string()
    }
}

/// Global dashboard header numbers for one fetch cycle.
///
/// Change fields are `None` when the historical comparison snapshot was
/// missing or degenerate, never NaN or infinite.
#[derive(Debug, Clone, Serialize)]
pub struct GlobalStats {
    pub total_liquidity_usd: f64,
    /// Fractional single-day change of total liquidity.
    pub liquidity_change: Option<f64>,
    /// Volume over the last 24h (delta of cumulative volume).
    pub one_day_volume_usd: Option<f64>,
    /// Fractional change of 24h volume against the previous 24h window.
    pub volume_change: Option<f64>,
    /// Transactions over the last 24h.
    pub one_day_txns: Option<f64>,
    pub txn_change: Option<f64>,
    /// Fees accrued over the last 24h (volume x protocol fee rate).
    pub one_day_fees_usd: Option<f64>,
}

/// A user position with its computed ownership breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct PositionSummary {
    pub pair_id: String,
    pub pair_label: String,
    /// Fraction of the pool's liquidity tokens held by the user, when the
    /// pool supply allows computing one.
    pub ownership: Option<f64>,
    pub value_usd: Option<f64>,
    pub token0_amount: Option<f64>,
    pub token1_amount: Option<f64>,
    pub fees_usd: f64,
    /// Accrued fees expressed in each pool token, unavailable when the token
    /// has no derived base-asset price.
    pub fees_token0: Option<f64>,
    pub fees_token1: Option<f64>,
}

/// One point of the user liquidity-value chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Start-of-day unix timestamp (UTC).
    pub date: i64,
    pub value_usd: f64,
}
