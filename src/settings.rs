use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct SubgraphSettings {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_endpoint() -> String {
    "https://api.thegraph.com/subgraphs/name/uniswap/uniswap-v2".to_string()
}
fn default_request_timeout_ms() -> u64 {
    10_000
}

impl Default for SubgraphSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheSettings {
    #[serde(default = "default_cache_ttl_seconds")]
    pub ttl_seconds: u64,
    #[serde(default = "default_cache_max_entries")]
    pub max_entries: usize,
}

fn default_cache_ttl_seconds() -> u64 {
    60
}
fn default_cache_max_entries() -> usize {
    512
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_seconds: default_cache_ttl_seconds(),
            max_entries: default_cache_max_entries(),
        }
    }
}

/// The currency amounts are rendered in. The original dashboard persisted
/// this as a browser-local preference; here it is explicit configuration.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DisplayCurrency {
    #[default]
    Usd,
    Eth,
}

impl DisplayCurrency {
    pub fn toggled(self) -> Self {
        match self {
            DisplayCurrency::Usd => DisplayCurrency::Eth,
            DisplayCurrency::Eth => DisplayCurrency::Usd,
        }
    }

    /// Converts a USD amount into this display currency. `None` when the
    /// base-asset price needed for the conversion is unavailable.
    pub fn from_usd(self, amount_usd: f64, eth_price: Option<f64>) -> Option<f64> {
        match self {
            DisplayCurrency::Usd => Some(amount_usd),
            DisplayCurrency::Eth => match eth_price {
                Some(price) if price > 0.0 => Some(amount_usd / price),
                _ => None,
            },
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplaySettings {
    #[serde(default)]
    pub currency: DisplayCurrency,
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

fn default_items_per_page() -> usize {
    10
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency: DisplayCurrency::default(),
            items_per_page: default_items_per_page(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub subgraph: SubgraphSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub display: DisplaySettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(File::with_name("Config.toml").required(false))
            .build()?;

        let mut settings: Self = s.try_deserialize()?;

        // Environment variable overrides
        if let Ok(endpoint) = env::var("DEXBOARD_SUBGRAPH_URL") {
            let trimmed = endpoint.trim();
            if !trimmed.is_empty() {
                settings.subgraph.endpoint = trimmed.to_string();
            }
        }
        if let Ok(currency) = env::var("DEXBOARD_DISPLAY_CURRENCY") {
            match currency.trim().to_lowercase().as_str() {
                "usd" => settings.display.currency = DisplayCurrency::Usd,
                "eth" => settings.display.currency = DisplayCurrency::Eth,
                "" => {}
                other => {
                    eprintln!("Unknown DEXBOARD_DISPLAY_CURRENCY value: {other}");
                }
            }
        }

        Ok(settings)
    }
}
