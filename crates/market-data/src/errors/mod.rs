//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching price observations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The feed answered with a non-success HTTP status.
    #[error("Failed to fetch prices: HTTP {status}")]
    HttpStatus {
        /// The status code returned by the feed
        status: u16,
    },

    /// The feed body could not be decoded as a price list.
    #[error("Failed to parse prices: {0}")]
    Parse(String),

    /// The request to the feed timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The feed that timed out
        provider: String,
    },

    /// A feed-specific error occurred.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The feed that returned the error
        provider: String,
        /// The error message from the feed
        message: String,
    },

    /// A network error occurred while communicating with the feed.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl From<serde_json::Error> for MarketDataError {
    fn from(err: serde_json::Error) -> Self {
        MarketDataError::Parse(err.to_string())
    }
}
