//! Wire model for subgraph query responses.
//!
//! These structs mirror the GraphQL response shapes one-to-one. Numeric fields
//! that the subgraph encodes as BigDecimal/BigInt strings are validated and
//! converted at deserialization time via the adapters in [`super::conversions`],
//! so a malformed response is an explicit decode failure rather than a NaN
//! propagating into the metrics layer.

use serde::Deserialize;

use super::conversions::{decimal_str, int_str, opt_decimal_str};

/// Token side of a pair, as referenced by transactions and positions.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRef {
    pub id: String,
    pub symbol: String,
    /// Token price expressed in the base asset (ETH). Missing or zero when the
    /// subgraph has no pricing path for the token.
    #[serde(rename = "derivedETH", default, with = "opt_decimal_str")]
    pub derived_eth: Option<f64>,
}

/// Minimal pair reference carried by transaction records.
#[derive(Debug, Clone, Deserialize)]
pub struct PairRef {
    pub id: String,
    pub token0: TokenRef,
    pub token1: TokenRef,
}

/// Pair with reserve state, used by position queries.
#[derive(Debug, Clone, Deserialize)]
pub struct PairSnapshot {
    pub id: String,
    pub token0: TokenRef,
    pub token1: TokenRef,
    #[serde(rename = "reserve0", with = "decimal_str")]
    pub reserve0: f64,
    #[serde(rename = "reserve1", with = "decimal_str")]
    pub reserve1: f64,
    #[serde(rename = "reserveUSD", with = "decimal_str")]
    pub reserve_usd: f64,
    #[serde(rename = "totalSupply", with = "decimal_str")]
    pub total_supply: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TxnRef {
    pub id: String,
    #[serde(with = "int_str")]
    pub timestamp: u64,
}

/// Raw liquidity-add record (subgraph `Mint`).
#[derive(Debug, Clone, Deserialize)]
pub struct RawMint {
    pub transaction: TxnRef,
    pub pair: PairRef,
    pub to: String,
    #[serde(with = "decimal_str")]
    pub amount0: f64,
    #[serde(with = "decimal_str")]
    pub amount1: f64,
    #[serde(rename = "amountUSD", with = "decimal_str")]
    pub amount_usd: f64,
}

/// Raw liquidity-remove record (subgraph `Burn`).
#[derive(Debug, Clone, Deserialize)]
pub struct RawBurn {
    pub transaction: TxnRef,
    pub pair: PairRef,
    pub sender: String,
    #[serde(with = "decimal_str")]
    pub amount0: f64,
    #[serde(with = "decimal_str")]
    pub amount1: f64,
    #[serde(rename = "amountUSD", with = "decimal_str")]
    pub amount_usd: f64,
}

/// Raw swap record. In/out amounts are gross per token side; the classifier
/// nets them to decide which token was sold.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSwap {
    pub transaction: TxnRef,
    pub pair: PairRef,
    pub to: String,
    #[serde(rename = "amount0In", with = "decimal_str")]
    pub amount0_in: f64,
    #[serde(rename = "amount0Out", with = "decimal_str")]
    pub amount0_out: f64,
    #[serde(rename = "amount1In", with = "decimal_str")]
    pub amount1_in: f64,
    #[serde(rename = "amount1Out", with = "decimal_str")]
    pub amount1_out: f64,
    #[serde(rename = "amountUSD", with = "decimal_str")]
    pub amount_usd: f64,
}

/// One transactions query response: the three event collections together.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionBundle {
    #[serde(default)]
    pub mints: Vec<RawMint>,
    #[serde(default)]
    pub burns: Vec<RawBurn>,
    #[serde(default)]
    pub swaps: Vec<RawSwap>,
}

impl TransactionBundle {
    pub fn is_empty(&self) -> bool {
        self.mints.is_empty() && self.burns.is_empty() && self.swaps.is_empty()
    }
}

/// Point-in-time global aggregate. The same shape serves the factory-level
/// "current" snapshot and the dated daily snapshots; daily rows carry `date`.
#[derive(Debug, Clone, Deserialize)]
pub struct GlobalSnapshot {
    /// Start-of-day unix timestamp, present on daily snapshots only.
    #[serde(default)]
    pub date: Option<i64>,
    #[serde(rename = "totalVolumeUSD", with = "decimal_str")]
    pub total_volume_usd: f64,
    #[serde(rename = "totalLiquidityUSD", with = "decimal_str")]
    pub total_liquidity_usd: f64,
    #[serde(rename = "txCount", with = "int_str")]
    pub tx_count: u64,
}

/// A user's share of one pool, as returned by the positions query.
#[derive(Debug, Clone, Deserialize)]
pub struct LiquidityPosition {
    pub pair: PairSnapshot,
    #[serde(rename = "liquidityTokenBalance", with = "decimal_str")]
    pub liquidity_token_balance: f64,
}

/// Historical position state for one (user, pair) at one timestamp. Input for
/// the user liquidity-value chart.
#[derive(Debug, Clone, Deserialize)]
pub struct PositionDaySnapshot {
    #[serde(with = "int_str")]
    pub timestamp: u64,
    pub pair: PairId,
    #[serde(rename = "liquidityTokenBalance", with = "decimal_str")]
    pub liquidity_token_balance: f64,
    #[serde(rename = "liquidityTokenTotalSupply", with = "decimal_str")]
    pub liquidity_token_total_supply: f64,
    #[serde(rename = "reserveUSD", with = "decimal_str")]
    pub reserve_usd: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PairId {
    pub id: String,
}

/// Base-asset (ETH) price bundle.
#[derive(Debug, Clone, Deserialize)]
pub struct Bundle {
    #[serde(rename = "ethPrice", with = "decimal_str")]
    pub eth_price: f64,
}

// Response envelopes for the named queries.

#[derive(Debug, Deserialize)]
pub struct GlobalDataResponse {
    #[serde(rename = "uniswapFactories", default)]
    pub factories: Vec<GlobalSnapshot>,
}

#[derive(Debug, Deserialize)]
pub struct DayDataResponse {
    #[serde(rename = "uniswapDayDatas", default)]
    pub day_datas: Vec<GlobalSnapshot>,
}

#[derive(Debug, Deserialize)]
pub struct BundleResponse {
    #[serde(default)]
    pub bundles: Vec<Bundle>,
}

#[derive(Debug, Deserialize)]
pub struct PositionsResponse {
    #[serde(rename = "liquidityPositions", default)]
    pub positions: Vec<LiquidityPosition>,
}

#[derive(Debug, Deserialize)]
pub struct PositionSnapshotsResponse {
    #[serde(rename = "liquidityPositionSnapshots", default)]
    pub snapshots: Vec<PositionDaySnapshot>,
}
