//! Price feed configuration.

use std::time::Duration;

/// Public price list consumed by [`HttpPriceFeed`](crate::HttpPriceFeed).
pub const DEFAULT_PRICES_URL: &str = "https://interview.switcheo.com/prices.json";

/// Base location of per-symbol SVG icons.
pub const DEFAULT_ICONS_BASE_URL: &str =
    "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens";

/// Default HTTP request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Where prices come from and how token icons are located.
#[derive(Clone, Debug)]
pub struct FeedConfig {
    pub prices_url: String,
    pub icons_base_url: String,
    pub request_timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            prices_url: DEFAULT_PRICES_URL.to_string(),
            icons_base_url: DEFAULT_ICONS_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl FeedConfig {
    /// Icon location for a symbol. Used for display only.
    pub fn icon_url(&self, symbol: &str) -> String {
        format!("{}/{}.svg", self.icons_base_url.trim_end_matches('/'), symbol)
    }
}
