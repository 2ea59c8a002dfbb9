//! # Dexboard SDK
//!
//! A Rust client library for DEX subgraph analytics. The SDK queries a
//! GraphQL indexing endpoint for snapshots, transactions and positions,
//! decodes the responses into typed records at the fetch boundary, and
//! computes the derived metrics a dashboard renders: percent changes, volume
//! deltas, transaction classification, pool ownership and fee shares, and
//! paginated/sorted views.
//!
//! ## Architecture
//!
//! The SDK is organized into three layers:
//!
//! ### Query Layer
//! [`subgraph_client`] issues named, parameterized GraphQL queries with a
//! cache-first fetch policy; [`queries`] holds the documents and [`cache`]
//! the TTL response cache.
//!
//! ### Data Model
//! [`types`] mirrors the wire shapes (string-encoded numerics validated at
//! decode time) and defines the derived, UI-ready records.
//!
//! ### Derived Metrics
//! Pure calculation modules over already-fetched data: [`percent_change`],
//! [`txn_classifier`], [`position_metrics`], [`pagination`],
//! [`global_stats`] and [`user_metrics`]. All derived values are recomputed
//! from immutable inputs; nothing is mutated in place.

// Query Layer
/// Cache-first GraphQL client and the transport seam
pub mod subgraph_client;
/// Named GraphQL query documents
pub mod queries;
/// TTL response cache backing the cache-first policy
pub mod cache;

// Data Model
/// Wire types, derived records and conversion helpers
pub mod types;

// Derived Metrics
/// Single-day and two-day-window percent-change calculators
pub mod percent_change;
/// Mint/burn/swap classification with net-flow direction
pub mod txn_classifier;
/// Pool ownership and fee-share arithmetic
pub mod position_metrics;
/// Stable sorting and fixed-size paging over derived lists
pub mod pagination;
/// Global header stats: concurrent snapshot fetch plus derivation
pub mod global_stats;
/// User liquidity-value chart series
pub mod user_metrics;

// Settings & Utilities
/// Configuration management
pub mod settings;
/// Time helpers for dated query parameters
pub mod utils;
