//! Named GraphQL query documents.
//!
//! Each document is parameterized by date or identifier variables; the client
//! pairs a document with its variables and decodes into the matching response
//! envelope from [`crate::types::subgraph_data`].

/// Current factory-level aggregate (cumulative volume, liquidity, tx count).
pub const GLOBAL_DATA: &str = r#"
query globalData {
  uniswapFactories(first: 1) {
    totalVolumeUSD
    totalLiquidityUSD
    txCount
  }
}
"#;

/// Daily aggregate snapshot for one UTC day start (`$date`, unix seconds).
pub const GLOBAL_DAY_DATA: &str = r#"
query globalDayData($date: Int!) {
  uniswapDayDatas(first: 1, where: { date: $date }) {
    date
    totalVolumeUSD
    totalLiquidityUSD
    txCount
  }
}
"#;

/// Recent mints, burns and swaps for a set of pairs (`$pairs`).
pub const PAIR_TRANSACTIONS: &str = r#"
query pairTransactions($pairs: [String!]) {
  mints(first: 100, orderBy: timestamp, orderDirection: desc, where: { pair_in: $pairs }) {
    transaction { id timestamp }
    pair {
      id
      token0 { id symbol }
      token1 { id symbol }
    }
    to
    amount0
    amount1
    amountUSD
  }
  burns(first: 100, orderBy: timestamp, orderDirection: desc, where: { pair_in: $pairs }) {
    transaction { id timestamp }
    pair {
      id
      token0 { id symbol }
      token1 { id symbol }
    }
    sender
    amount0
    amount1
    amountUSD
  }
  swaps(first: 100, orderBy: timestamp, orderDirection: desc, where: { pair_in: $pairs }) {
    transaction { id timestamp }
    pair {
      id
      token0 { id symbol }
      token1 { id symbol }
    }
    to
    amount0In
    amount0Out
    amount1In
    amount1Out
    amountUSD
  }
}
"#;

/// Open liquidity positions for one account (`$user`).
pub const USER_POSITIONS: &str = r#"
query userPositions($user: String!) {
  liquidityPositions(where: { user: $user }) {
    pair {
      id
      token0 { id symbol derivedETH }
      token1 { id symbol derivedETH }
      reserve0
      reserve1
      reserveUSD
      totalSupply
    }
    liquidityTokenBalance
  }
}
"#;

/// Historical position snapshots for one account (`$user`, `$skip`).
pub const USER_POSITION_SNAPSHOTS: &str = r#"
query userPositionSnapshots($user: String!, $skip: Int!) {
  liquidityPositionSnapshots(first: 1000, skip: $skip, where: { user: $user }) {
    timestamp
    reserveUSD
    liquidityTokenBalance
    liquidityTokenTotalSupply
    pair { id }
  }
}
"#;

/// Base-asset (ETH) USD price.
pub const ETH_PRICE: &str = r#"
query ethPrice {
  bundles(where: { id: "1" }) {
    ethPrice
  }
}
"#;
