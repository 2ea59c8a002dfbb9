/// String-to-number conversion helpers and serde adapters for subgraph fields
pub mod conversions;
/// Derived, UI-ready record types
pub mod derived_data;
/// Raw wire types mirroring subgraph response shapes
pub mod subgraph_data;

pub use conversions::ConversionError;
pub use derived_data::{ChartPoint, EventKind, GlobalStats, PositionSummary, TransactionEvent};
pub use subgraph_data::{
    Bundle, GlobalSnapshot, LiquidityPosition, PairRef, PairSnapshot, PositionDaySnapshot,
    RawBurn, RawMint, RawSwap, TokenRef, TransactionBundle, TxnRef,
};
