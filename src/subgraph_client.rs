//! # Subgraph Client
//!
//! Cache-first client for the GraphQL indexing endpoint. One request is a
//! named query document plus variables; responses come back in the standard
//! `{ data, errors }` envelope and are decoded into the typed wire model at
//! the boundary.
//!
//! ## Fetch policy
//!
//! Responses are cached in-process with a TTL keyed by (document, variables).
//! There is no retry loop: a failed fetch surfaces as an error, is logged, and
//! the caller simply re-fetches on its next trigger. Independent fetches may
//! run concurrently; aggregation happens only once all required snapshots for
//! a computation have arrived (see [`crate::global_stats`]).

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use url::Url;

use crate::cache::QueryCache;
use crate::queries;
use crate::settings::Settings;
use crate::types::conversions::normalize_id;
use crate::types::subgraph_data::{
    BundleResponse, DayDataResponse, GlobalDataResponse, GlobalSnapshot, LiquidityPosition,
    PositionDaySnapshot, PositionSnapshotsResponse, PositionsResponse, TransactionBundle,
};

/// Page size the endpoint allows per collection query.
const SNAPSHOT_PAGE_SIZE: usize = 1000;
/// Upper bound on snapshot pages fetched for one account.
const SNAPSHOT_MAX_PAGES: usize = 10;

#[derive(Debug, thiserror::Error)]
pub enum SubgraphError {
    #[error("invalid endpoint url: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("endpoint returned status {0}")]
    Status(StatusCode),
    #[error("graphql errors: {0}")]
    GraphQl(String),
    #[error("response decode failed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response carried no data")]
    MissingData,
}

#[derive(Debug, Deserialize)]
struct GraphQlEnvelope {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<GraphQlMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphQlMessage {
    message: String,
}

/// Transport seam for the GraphQL endpoint.
///
/// Production uses [`HttpTransport`]; tests substitute an in-memory
/// implementation to exercise the client without a network.
#[async_trait]
pub trait QueryTransport: Send + Sync {
    /// Executes one request and returns the response `data` value.
    async fn execute(&self, query: &str, variables: Value) -> Result<Value, SubgraphError>;
}

/// reqwest-backed transport.
pub struct HttpTransport {
    http: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, SubgraphError> {
        let endpoint = Url::parse(endpoint)?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint })
    }
}

#[async_trait]
impl QueryTransport for HttpTransport {
    async fn execute(&self, query: &str, variables: Value) -> Result<Value, SubgraphError> {
        let body = json!({ "query": query, "variables": variables });
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SubgraphError::Status(status));
        }

        let envelope: GraphQlEnvelope = response.json().await?;
        if !envelope.errors.is_empty() {
            let joined = envelope
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(SubgraphError::GraphQl(joined));
        }
        envelope.data.ok_or(SubgraphError::MissingData)
    }
}

/// Cache-first typed client over a [`QueryTransport`].
pub struct SubgraphClient {
    transport: Arc<dyn QueryTransport>,
    cache: QueryCache,
}

impl SubgraphClient {
    pub fn from_settings(settings: &Settings) -> Result<Self, SubgraphError> {
        let transport = HttpTransport::new(
            &settings.subgraph.endpoint,
            Duration::from_millis(settings.subgraph.request_timeout_ms),
        )?;
        Ok(Self::with_transport(
            Arc::new(transport),
            Duration::from_secs(settings.cache.ttl_seconds),
            settings.cache.max_entries,
        ))
    }

    pub fn with_transport(
        transport: Arc<dyn QueryTransport>,
        cache_ttl: Duration,
        cache_max_entries: usize,
    ) -> Self {
        Self {
            transport,
            cache: QueryCache::with_capacity(cache_ttl, cache_max_entries),
        }
    }

    /// Executes a named query, cache-first, and decodes `data` into `T`.
    pub async fn query<T: DeserializeOwned>(
        &self,
        document: &str,
        variables: Value,
    ) -> Result<T, SubgraphError> {
        let key = QueryCache::cache_key(document, &variables);
        if let Some(data) = self.cache.get(&key) {
            debug!("Subgraph cache hit");
            return Ok(serde_json::from_value(data)?);
        }

        let data = match self.transport.execute(document, variables).await {
            Ok(data) => data,
            Err(e) => {
                warn!("Subgraph query failed: {}", e);
                return Err(e);
            }
        };
        self.cache.put(key, data.clone());
        Ok(serde_json::from_value(data)?)
    }

    /// Current factory-level aggregate, or `None` when the subgraph has no
    /// factory row yet.
    pub async fn global_snapshot(&self) -> Result<Option<GlobalSnapshot>, SubgraphError> {
        let response: GlobalDataResponse = self.query(queries::GLOBAL_DATA, json!({})).await?;
        Ok(response.factories.into_iter().next())
    }

    /// Daily aggregate for one UTC day start, `None` when that day has no
    /// snapshot (absence of data, not an error).
    pub async fn global_day_snapshot(
        &self,
        day_start: i64,
    ) -> Result<Option<GlobalSnapshot>, SubgraphError> {
        let response: DayDataResponse = self
            .query(queries::GLOBAL_DAY_DATA, json!({ "date": day_start }))
            .await?;
        Ok(response.day_datas.into_iter().next())
    }

    /// Recent mints/burns/swaps for a set of pairs.
    pub async fn pair_transactions(
        &self,
        pairs: &[String],
    ) -> Result<TransactionBundle, SubgraphError> {
        let pairs: Vec<String> = pairs.iter().map(|p| normalize_id(p)).collect();
        self.query(queries::PAIR_TRANSACTIONS, json!({ "pairs": pairs }))
            .await
    }

    /// Open positions for one account.
    pub async fn user_positions(
        &self,
        account: &str,
    ) -> Result<Vec<LiquidityPosition>, SubgraphError> {
        let response: PositionsResponse = self
            .query(
                queries::USER_POSITIONS,
                json!({ "user": normalize_id(account) }),
            )
            .await?;
        Ok(response.positions)
    }

    /// All position day snapshots for one account, paging through the
    /// endpoint's collection limit.
    pub async fn user_position_snapshots(
        &self,
        account: &str,
    ) -> Result<Vec<PositionDaySnapshot>, SubgraphError> {
        let account = normalize_id(account);
        let mut all = Vec::new();
        for page in 0..SNAPSHOT_MAX_PAGES {
            let skip = page * SNAPSHOT_PAGE_SIZE;
            let response: PositionSnapshotsResponse = self
                .query(
                    queries::USER_POSITION_SNAPSHOTS,
                    json!({ "user": account, "skip": skip }),
                )
                .await?;
            let fetched = response.snapshots.len();
            all.extend(response.snapshots);
            if fetched < SNAPSHOT_PAGE_SIZE {
                break;
            }
        }
        Ok(all)
    }

    /// Base-asset USD price, `None` when the bundle is missing.
    pub async fn eth_price(&self) -> Result<Option<f64>, SubgraphError> {
        let response: BundleResponse = self.query(queries::ETH_PRICE, json!({})).await?;
        Ok(response.bundles.into_iter().next().map(|b| b.eth_price))
    }
}
