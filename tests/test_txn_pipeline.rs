//! End-to-end tests for the transaction pipeline: decode a subgraph response
//! fixture, classify it, then filter/sort/page the result.

use dexboard_sdk::pagination::{
    page_count, transaction_page, PageRequest, SortDirection, TxnFilter, TxnSortField,
};
use dexboard_sdk::txn_classifier::classify_bundle;
use dexboard_sdk::types::subgraph_data::TransactionBundle;
use dexboard_sdk::types::EventKind;
use itertools::Itertools;

fn pair_json() -> serde_json::Value {
    serde_json::json!({
        "id": "0xpair",
        "token0": { "id": "0xaaa", "symbol": "WETH" },
        "token1": { "id": "0xbbb", "symbol": "USDC" }
    })
}

fn fixture_bundle() -> TransactionBundle {
    let raw = serde_json::json!({
        "mints": [
            {
                "transaction": { "id": "0xmint1", "timestamp": "1620000100" },
                "pair": pair_json(),
                "to": "0xalice",
                "amount0": "1.5",
                "amount1": "3000",
                "amountUSD": "6000"
            }
        ],
        "burns": [
            {
                "transaction": { "id": "0xburn1", "timestamp": "1620000200" },
                "pair": pair_json(),
                "sender": "0xbob",
                "amount0": "0.5",
                "amount1": "1000",
                "amountUSD": "2000"
            }
        ],
        "swaps": [
            {
                "transaction": { "id": "0xswap1", "timestamp": "1620000300" },
                "pair": pair_json(),
                "to": "0xcarol",
                "amount0In": "0",
                "amount0Out": "10",
                "amount1In": "5",
                "amount1Out": "0",
                "amountUSD": "150"
            },
            {
                "transaction": { "id": "0xswap2", "timestamp": "1620000400" },
                "pair": pair_json(),
                "to": "0xdave",
                "amount0In": "2",
                "amount0Out": "0",
                "amount1In": "0",
                "amount1Out": "4000",
                "amountUSD": "4000"
            }
        ]
    });
    serde_json::from_value(raw).expect("fixture should decode")
}

#[test]
fn decodes_and_classifies_fixture() {
    let bundle = fixture_bundle();
    let events = classify_bundle(&bundle);
    assert_eq!(events.len(), 4);

    let by_kind = events.iter().counts_by(|e| e.kind);
    assert_eq!(by_kind[&EventKind::Add], 1);
    assert_eq!(by_kind[&EventKind::Remove], 1);
    assert_eq!(by_kind[&EventKind::Swap], 2);
}

#[test]
fn swap_direction_follows_negative_net() {
    let events = classify_bundle(&fixture_bundle());

    // swap1: net0 = -10, net1 = 5 -> sold 10 WETH for 5 USDC
    let swap1 = events.iter().find(|e| e.hash == "0xswap1").unwrap();
    assert_eq!(swap1.token0_symbol, "WETH");
    assert_eq!(swap1.token1_symbol, "USDC");
    assert_eq!(swap1.token0_amount, 10.0);
    assert_eq!(swap1.token1_amount, 5.0);
    assert_eq!(swap1.label(), "Swap WETH for USDC");

    // swap2: net0 = 2, net1 = -4000 -> sold 4000 USDC for 2 WETH
    let swap2 = events.iter().find(|e| e.hash == "0xswap2").unwrap();
    assert_eq!(swap2.token0_symbol, "USDC");
    assert_eq!(swap2.token0_amount, 4000.0);
    assert_eq!(swap2.token1_amount, 2.0);
}

#[test]
fn filtered_sorted_page_is_stable() {
    let events = classify_bundle(&fixture_bundle());

    let swaps_by_value = transaction_page(
        &events,
        TxnFilter::Swaps,
        TxnSortField::ValueUsd,
        SortDirection::Descending,
        PageRequest::default(),
    );
    let hashes: Vec<&str> = swaps_by_value.iter().map(|e| e.hash.as_str()).collect();
    assert_eq!(hashes, vec!["0xswap2", "0xswap1"]);

    // identical request twice yields identical output
    let again = transaction_page(
        &events,
        TxnFilter::Swaps,
        TxnSortField::ValueUsd,
        SortDirection::Descending,
        PageRequest::default(),
    );
    let hashes_again: Vec<&str> = again.iter().map(|e| e.hash.as_str()).collect();
    assert_eq!(hashes, hashes_again);
}

#[test]
fn page_count_covers_filtered_list() {
    let events = classify_bundle(&fixture_bundle());
    assert_eq!(page_count(events.len(), 10), 1);
    assert_eq!(page_count(events.len(), 3), 2);
}
