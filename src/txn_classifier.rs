//! Transaction classification.
//!
//! Turns raw mint/burn/swap records into normalized [`TransactionEvent`]s.
//! Adds and removes carry both token amounts directly. Swaps are classified by
//! net flow per token (in minus out): the side with negative net flow was sold
//! and the event amounts are the absolute nets. A swap whose nets are both
//! zero has no defined direction and is rejected as malformed instead of
//! guessing a side.

use log::warn;

use crate::types::conversions::normalize_id;
use crate::types::subgraph_data::{PairRef, RawBurn, RawMint, RawSwap, TransactionBundle};
use crate::types::{EventKind, TransactionEvent};

/// Display overrides for tokens whose on-chain metadata is wrong or stale.
const TOKEN_SYMBOL_OVERRIDES: &[(&str, &str)] = &[
    // Wrapped ether renders as plain ETH
    ("0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2", "ETH"),
    // Single-collateral DAI kept its old symbol after the MCD migration
    ("0x89d24a6b4ccb1b6faa2625fe562bdd9a23260359", "SAI"),
];

fn display_symbol(token_id: &str, symbol: &str) -> String {
    let id = normalize_id(token_id);
    for (address, replacement) in TOKEN_SYMBOL_OVERRIDES {
        if id == *address {
            return (*replacement).to_string();
        }
    }
    symbol.to_string()
}

fn pair_symbols(pair: &PairRef) -> (String, String) {
    (
        display_symbol(&pair.token0.id, &pair.token0.symbol),
        display_symbol(&pair.token1.id, &pair.token1.symbol),
    )
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifyError {
    /// Both net flows are zero: the record carries no direction.
    #[error("swap {tx} has zero net flow on both tokens")]
    ZeroNetFlow { tx: String },
    #[error("swap {tx} has non-finite net flow (net0={net0}, net1={net1})")]
    NonFiniteNet { tx: String, net0: f64, net1: f64 },
}

impl From<&RawMint> for TransactionEvent {
    fn from(mint: &RawMint) -> Self {
        let (symbol0, symbol1) = pair_symbols(&mint.pair);
        TransactionEvent {
            hash: mint.transaction.id.clone(),
            timestamp: mint.transaction.timestamp,
            kind: EventKind::Add,
            token0_symbol: symbol0,
            token1_symbol: symbol1,
            token0_amount: mint.amount0,
            token1_amount: mint.amount1,
            amount_usd: mint.amount_usd,
            account: mint.to.clone(),
        }
    }
}

impl From<&RawBurn> for TransactionEvent {
    fn from(burn: &RawBurn) -> Self {
        let (symbol0, symbol1) = pair_symbols(&burn.pair);
        TransactionEvent {
            hash: burn.transaction.id.clone(),
            timestamp: burn.transaction.timestamp,
            kind: EventKind::Remove,
            token0_symbol: symbol0,
            token1_symbol: symbol1,
            token0_amount: burn.amount0,
            token1_amount: burn.amount1,
            amount_usd: burn.amount_usd,
            account: burn.sender.clone(),
        }
    }
}

/// Classifies a single swap by netting per-token flows.
///
/// The sold token (negative net) maps to the event's `token0_*` slot and the
/// bought token to `token1_*`, so the row reads "Swap sold for bought".
pub fn classify_swap(swap: &RawSwap) -> Result<TransactionEvent, ClassifyError> {
    let net0 = swap.amount0_in - swap.amount0_out;
    let net1 = swap.amount1_in - swap.amount1_out;

    if !net0.is_finite() || !net1.is_finite() {
        return Err(ClassifyError::NonFiniteNet {
            tx: swap.transaction.id.clone(),
            net0,
            net1,
        });
    }
    if net0 == 0.0 && net1 == 0.0 {
        return Err(ClassifyError::ZeroNetFlow {
            tx: swap.transaction.id.clone(),
        });
    }

    let (symbol0, symbol1) = pair_symbols(&swap.pair);
    let (sold_symbol, bought_symbol, sold_amount, bought_amount) = if net0 < 0.0 {
        (symbol0, symbol1, net0.abs(), net1.abs())
    } else {
        (symbol1, symbol0, net1.abs(), net0.abs())
    };

    Ok(TransactionEvent {
        hash: swap.transaction.id.clone(),
        timestamp: swap.transaction.timestamp,
        kind: EventKind::Swap,
        token0_symbol: sold_symbol,
        token1_symbol: bought_symbol,
        token0_amount: sold_amount,
        token1_amount: bought_amount,
        amount_usd: swap.amount_usd,
        account: swap.to.clone(),
    })
}

/// Flattens a transaction bundle into normalized events.
///
/// Malformed swaps are logged and skipped so the output only contains
/// well-formed rows; an empty bundle yields an empty list.
pub fn classify_bundle(bundle: &TransactionBundle) -> Vec<TransactionEvent> {
    let mut events =
        Vec::with_capacity(bundle.mints.len() + bundle.burns.len() + bundle.swaps.len());

    events.extend(bundle.mints.iter().map(TransactionEvent::from));
    events.extend(bundle.burns.iter().map(TransactionEvent::from));

    for swap in &bundle.swaps {
        match classify_swap(swap) {
            Ok(event) => events.push(event),
            Err(e) => warn!("Skipping malformed swap record: {}", e),
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::subgraph_data::{TokenRef, TxnRef};

    fn pair() -> PairRef {
        PairRef {
            id: "0xpair".into(),
            token0: TokenRef {
                id: "0xaaa".into(),
                symbol: "TOK0".into(),
                derived_eth: None,
            },
            token1: TokenRef {
                id: "0xbbb".into(),
                symbol: "TOK1".into(),
                derived_eth: None,
            },
        }
    }

    fn swap(in0: f64, out0: f64, in1: f64, out1: f64) -> RawSwap {
        RawSwap {
            transaction: TxnRef {
                id: "0xswap".into(),
                timestamp: 1_620_000_000,
            },
            pair: pair(),
            to: "0xuser".into(),
            amount0_in: in0,
            amount0_out: out0,
            amount1_in: in1,
            amount1_out: out1,
            amount_usd: 42.0,
        }
    }

    #[test]
    fn swap_with_negative_net0_sells_token0() {
        // amount0In=0, amount0Out=10, amount1In=5 -> net0=-10, net1=5
        let event = classify_swap(&swap(0.0, 10.0, 5.0, 0.0)).unwrap();
        assert_eq!(event.kind, EventKind::Swap);
        assert_eq!(event.token0_symbol, "TOK0");
        assert_eq!(event.token1_symbol, "TOK1");
        assert_eq!(event.token0_amount, 10.0);
        assert_eq!(event.token1_amount, 5.0);
    }

    #[test]
    fn swap_with_negative_net1_sells_token1() {
        let event = classify_swap(&swap(8.0, 0.0, 0.0, 3.0)).unwrap();
        assert_eq!(event.token0_symbol, "TOK1");
        assert_eq!(event.token1_symbol, "TOK0");
        assert_eq!(event.token0_amount, 3.0);
        assert_eq!(event.token1_amount, 8.0);
    }

    #[test]
    fn zero_net_swap_is_rejected() {
        let err = classify_swap(&swap(5.0, 5.0, 2.0, 2.0)).unwrap_err();
        assert!(matches!(err, ClassifyError::ZeroNetFlow { .. }));
    }

    #[test]
    fn bundle_skips_malformed_swaps() {
        let bundle = TransactionBundle {
            mints: vec![],
            burns: vec![],
            swaps: vec![swap(0.0, 10.0, 5.0, 0.0), swap(1.0, 1.0, 2.0, 2.0)],
        };
        let events = classify_bundle(&bundle);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn empty_bundle_yields_empty_list() {
        assert!(classify_bundle(&TransactionBundle::default()).is_empty());
    }

    #[test]
    fn weth_symbol_is_overridden() {
        let mut s = swap(0.0, 10.0, 5.0, 0.0);
        s.pair.token0.id = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2".into();
        s.pair.token0.symbol = "WETH".into();
        let event = classify_swap(&s).unwrap();
        assert_eq!(event.token0_symbol, "ETH");
    }

    #[test]
    fn long_symbols_shorten_in_labels() {
        let mut s = swap(0.0, 10.0, 5.0, 0.0);
        s.pair.token0.symbol = "VERYLONGSYMBOL".into();
        let event = classify_swap(&s).unwrap();
        assert_eq!(event.label(), "Swap VERYLON... for TOK1");
    }
}
