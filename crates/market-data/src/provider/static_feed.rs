use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{PriceObservation, RawPriceEntry};
use crate::provider::PriceFeed;

const PROVIDER_ID: &str = "STATIC";

/// A feed serving a fixed list of observations.
///
/// Used by tests and by offline runs that load a price file from disk.
#[derive(Clone, Debug, Default)]
pub struct StaticPriceFeed {
    observations: Vec<PriceObservation>,
}

impl StaticPriceFeed {
    pub fn new(observations: Vec<PriceObservation>) -> Self {
        Self { observations }
    }

    /// Build a feed from a JSON document in the wire format of the HTTP feed.
    pub fn from_json(json: &str) -> Result<Self, MarketDataError> {
        let entries: Vec<RawPriceEntry> = serde_json::from_str(json)?;
        Ok(Self::new(
            entries
                .into_iter()
                .map(RawPriceEntry::into_observation)
                .collect(),
        ))
    }
}

#[async_trait]
impl PriceFeed for StaticPriceFeed {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_observations(&self) -> Result<Vec<PriceObservation>, MarketDataError> {
        Ok(self.observations.clone())
    }
}
