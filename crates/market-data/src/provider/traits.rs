//! Price feed trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::PriceObservation;

/// Trait for price feeds.
///
/// Implement this trait to add a new source of price observations.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use tokenswap_market_data::{MarketDataError, PriceFeed, PriceObservation};
///
/// struct MyFeed;
///
/// #[async_trait]
/// impl PriceFeed for MyFeed {
///     fn id(&self) -> &'static str {
///         "MY_FEED"
///     }
///
///     async fn fetch_observations(&self) -> Result<Vec<PriceObservation>, MarketDataError> {
///         Ok(vec![PriceObservation::new("ETH", Some(1645.93), None)])
///     }
/// }
/// ```
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Unique identifier for this feed, used in logs and error messages.
    fn id(&self) -> &'static str;

    /// Fetch every observation the feed currently carries.
    ///
    /// The result may hold several observations per symbol and observations
    /// without a price. A failure means no observations at all: feeds never
    /// return a partial list.
    async fn fetch_observations(&self) -> Result<Vec<PriceObservation>, MarketDataError>;
}
