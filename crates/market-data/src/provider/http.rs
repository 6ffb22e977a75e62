//! HTTP price feed.
//!
//! Performs a single GET against the configured endpoint, which answers with
//! a JSON array of `{ currency, price?, date? }` objects.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

use crate::config::FeedConfig;
use crate::errors::MarketDataError;
use crate::models::{PriceObservation, RawPriceEntry};
use crate::provider::PriceFeed;

/// Provider ID constant
const PROVIDER_ID: &str = "SWITCHEO_PRICES";

/// Price feed backed by the public JSON price list.
///
/// # Example
///
/// ```ignore
/// use tokenswap_market_data::{FeedConfig, HttpPriceFeed};
///
/// let feed = HttpPriceFeed::new(&FeedConfig::default());
/// ```
pub struct HttpPriceFeed {
    client: Client,
    prices_url: String,
}

impl HttpPriceFeed {
    /// Create a new feed from configuration.
    pub fn new(config: &FeedConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            prices_url: config.prices_url.clone(),
        }
    }

    fn map_send_error(e: reqwest::Error) -> MarketDataError {
        if e.is_timeout() {
            MarketDataError::Timeout {
                provider: PROVIDER_ID.to_string(),
            }
        } else {
            MarketDataError::Network(e)
        }
    }
}

#[async_trait]
impl PriceFeed for HttpPriceFeed {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_observations(&self) -> Result<Vec<PriceObservation>, MarketDataError> {
        debug!("Fetching prices from {}", self.prices_url);

        let response = self
            .client
            .get(&self.prices_url)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Price feed answered with HTTP {}", status.as_u16());
            return Err(MarketDataError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(Self::map_send_error)?;
        let entries: Vec<RawPriceEntry> = serde_json::from_str(&body)?;

        debug!("Price feed returned {} entries", entries.len());

        Ok(entries
            .into_iter()
            .map(RawPriceEntry::into_observation)
            .collect())
    }
}
