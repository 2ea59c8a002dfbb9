//! Pool ownership and fee-share arithmetic for user positions.
//!
//! A position's ownership fraction is its liquidity-token balance over the
//! pool's total supply; everything else (USD value, underlying token amounts,
//! fee shares) is derived from that fraction and the pool's current reserves.
//! Degenerate pools (zero supply, missing derived prices) surface as `None`
//! fields rather than infinities.

use crate::types::subgraph_data::LiquidityPosition;
use crate::types::PositionSummary;

/// Fraction of the pool owned by a holder of `liquidity_token_balance` tokens.
///
/// Returns `None` when the pool's total supply is zero or non-finite.
pub fn pool_ownership(liquidity_token_balance: f64, total_supply: f64) -> Option<f64> {
    if total_supply <= 0.0 || !total_supply.is_finite() || !liquidity_token_balance.is_finite() {
        return None;
    }
    let ownership = liquidity_token_balance / total_supply;
    ownership.is_finite().then_some(ownership)
}

/// Accrued fees expressed in one of the pool's tokens.
///
/// `fees_usd` is converted through the token's base-asset price
/// (`derived_eth * eth_price`) and halved, since fees accrue evenly across
/// both sides of the pool. Unavailable when the token has no derived price.
pub fn fee_share_in_token(
    fees_usd: f64,
    derived_eth: Option<f64>,
    eth_price: f64,
) -> Option<f64> {
    let derived_eth = derived_eth?;
    if derived_eth <= 0.0 || eth_price <= 0.0 {
        return None;
    }
    let token_price_usd = derived_eth * eth_price;
    let share = fees_usd / token_price_usd / 2.0;
    share.is_finite().then_some(share)
}

/// Builds the UI-ready summary for one position.
pub fn summarize_position(
    position: &LiquidityPosition,
    fees_usd: f64,
    eth_price: f64,
) -> PositionSummary {
    let pair = &position.pair;
    let ownership = pool_ownership(position.liquidity_token_balance, pair.total_supply);

    PositionSummary {
        pair_id: pair.id.clone(),
        pair_label: format!("{}-{}", pair.token0.symbol, pair.token1.symbol),
        ownership,
        value_usd: ownership.map(|o| o * pair.reserve_usd),
        token0_amount: ownership.map(|o| o * pair.reserve0),
        token1_amount: ownership.map(|o| o * pair.reserve1),
        fees_usd,
        fees_token0: fee_share_in_token(fees_usd, pair.token0.derived_eth, eth_price),
        fees_token1: fee_share_in_token(fees_usd, pair.token1.derived_eth, eth_price),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::subgraph_data::{PairSnapshot, TokenRef};

    fn position(balance: f64, total_supply: f64) -> LiquidityPosition {
        LiquidityPosition {
            pair: PairSnapshot {
                id: "0xpair".into(),
                token0: TokenRef {
                    id: "0xaaa".into(),
                    symbol: "WETH".into(),
                    derived_eth: Some(1.0),
                },
                token1: TokenRef {
                    id: "0xbbb".into(),
                    symbol: "USDC".into(),
                    derived_eth: Some(0.0005),
                },
                reserve0: 100.0,
                reserve1: 200_000.0,
                reserve_usd: 400_000.0,
                total_supply,
            },
            liquidity_token_balance: balance,
        }
    }

    #[test]
    fn ownership_fraction() {
        assert_eq!(pool_ownership(10.0, 100.0), Some(0.1));
        assert_eq!(pool_ownership(0.0, 100.0), Some(0.0));
    }

    #[test]
    fn zero_supply_is_unavailable() {
        assert_eq!(pool_ownership(10.0, 0.0), None);
        assert_eq!(pool_ownership(10.0, f64::NAN), None);
    }

    #[test]
    fn summary_scales_reserves_by_ownership() {
        let summary = summarize_position(&position(10.0, 100.0), 50.0, 2000.0);
        assert_eq!(summary.ownership, Some(0.1));
        assert_eq!(summary.value_usd, Some(40_000.0));
        assert_eq!(summary.token0_amount, Some(10.0));
        assert_eq!(summary.token1_amount, Some(20_000.0));
    }

    #[test]
    fn fee_shares_convert_through_derived_price() {
        // token0: 1.0 ETH * $2000 = $2000 per token; $50 fees / 2000 / 2 = 0.0125
        let summary = summarize_position(&position(10.0, 100.0), 50.0, 2000.0);
        assert_eq!(summary.fees_token0, Some(0.0125));
        // token1: 0.0005 * 2000 = $1 per token; 50 / 1 / 2 = 25
        assert_eq!(summary.fees_token1, Some(25.0));
    }

    #[test]
    fn missing_derived_price_means_no_fee_share() {
        let mut p = position(10.0, 100.0);
        p.pair.token0.derived_eth = None;
        let summary = summarize_position(&p, 50.0, 2000.0);
        assert_eq!(summary.fees_token0, None);
        assert!(summary.fees_token1.is_some());
    }

    #[test]
    fn degenerate_pool_yields_no_value() {
        let summary = summarize_position(&position(10.0, 0.0), 0.0, 2000.0);
        assert_eq!(summary.ownership, None);
        assert_eq!(summary.value_usd, None);
        assert_eq!(summary.token0_amount, None);
    }
}
