//! # Dashboard CLI
//!
//! Fetches the global header stats (and optionally one account's positions
//! and liquidity-value series, or a pair's transaction table) from the
//! configured subgraph endpoint and prints them.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin dashboard -- --account 0xabc... --pair 0xdef... --timeframe week
//! ```

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, ValueEnum};

use dexboard_sdk::global_stats::fetch_global_stats;
use dexboard_sdk::pagination::{PageRequest, SortDirection, TxnFilter, TxnSortField};
use dexboard_sdk::position_metrics::summarize_position;
use dexboard_sdk::settings::Settings;
use dexboard_sdk::subgraph_client::SubgraphClient;
use dexboard_sdk::txn_classifier::classify_bundle;
use dexboard_sdk::user_metrics::{liquidity_value_series, window_series, Timeframe};
use dexboard_sdk::pagination;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TimeframeArg {
    Week,
    Month,
    All,
}

impl From<TimeframeArg> for Timeframe {
    fn from(value: TimeframeArg) -> Self {
        match value {
            TimeframeArg::Week => Timeframe::Week,
            TimeframeArg::Month => Timeframe::Month,
            TimeframeArg::All => Timeframe::AllTime,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "dashboard", about = "Print DEX subgraph analytics")]
struct Args {
    /// Subgraph endpoint override
    #[arg(long)]
    endpoint: Option<String>,

    /// Account to summarize positions and liquidity history for
    #[arg(long)]
    account: Option<String>,

    /// Pair id to list transactions for (repeatable)
    #[arg(long = "pair")]
    pairs: Vec<String>,

    /// Chart window for the liquidity series
    #[arg(long, value_enum, default_value_t = TimeframeArg::Month)]
    timeframe: TimeframeArg,

    /// Transaction table page (1-based)
    #[arg(long, default_value_t = 1)]
    page: usize,
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.4}"),
        None => "-".to_string(),
    }
}

fn fmt_pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:+.2}%", v * 100.0),
        None => "-".to_string(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    let mut settings = Settings::new().context("failed to load settings")?;
    if let Some(endpoint) = args.endpoint {
        settings.subgraph.endpoint = endpoint;
    }

    let client =
        SubgraphClient::from_settings(&settings).context("failed to build subgraph client")?;

    let stats = fetch_global_stats(&client)
        .await
        .context("failed to fetch global stats")?;
    println!("== Global ==");
    println!(
        "Liquidity: ${:.0} ({})",
        stats.total_liquidity_usd,
        fmt_pct(stats.liquidity_change)
    );
    println!(
        "Volume (24H): {} ({})",
        fmt_opt(stats.one_day_volume_usd),
        fmt_pct(stats.volume_change)
    );
    println!(
        "Transactions (24H): {} ({})",
        fmt_opt(stats.one_day_txns),
        fmt_pct(stats.txn_change)
    );
    println!("Fees (24H): {}", fmt_opt(stats.one_day_fees_usd));

    if !args.pairs.is_empty() {
        let bundle = client
            .pair_transactions(&args.pairs)
            .await
            .context("failed to fetch transactions")?;
        let events = classify_bundle(&bundle);
        let page = pagination::transaction_page(
            &events,
            TxnFilter::All,
            TxnSortField::Timestamp,
            SortDirection::Descending,
            PageRequest::new(args.page, settings.display.items_per_page),
        );
        println!(
            "\n== Transactions (page {}/{}) ==",
            args.page,
            pagination::page_count(events.len(), settings.display.items_per_page)
        );
        for event in &page {
            println!(
                "{:<30} ${:<12.2} {:>10.4} {:>10.4} {}",
                event.label(),
                event.amount_usd,
                event.token0_amount,
                event.token1_amount,
                event.timestamp
            );
        }
    }

    if let Some(account) = args.account {
        let (positions, eth_price) =
            futures::try_join!(client.user_positions(&account), client.eth_price())
                .context("failed to fetch account data")?;
        let eth_price = eth_price.unwrap_or(0.0);

        println!("\n== Positions for {account} ==");
        for position in &positions {
            // Accrued fees come from a separate returns computation; the CLI
            // reports the position value breakdown only.
            let summary = summarize_position(position, 0.0, eth_price);
            println!(
                "{:<20} value {} ({} {} / {} {})",
                summary.pair_label,
                fmt_opt(summary.value_usd),
                fmt_opt(summary.token0_amount),
                position.pair.token0.symbol,
                fmt_opt(summary.token1_amount),
                position.pair.token1.symbol
            );
        }

        let snapshots = client
            .user_position_snapshots(&account)
            .await
            .context("failed to fetch position history")?;
        let series = liquidity_value_series(&snapshots);
        let windowed = window_series(&series, args.timeframe.into(), Utc::now());
        println!("\n== Liquidity value ({:?}) ==", args.timeframe);
        for point in &windowed {
            println!("{}: ${:.2}", point.date, point.value_usd);
        }
    }

    Ok(())
}
