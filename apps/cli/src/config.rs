use std::time::Duration;

use anyhow::Context;
use tokenswap_market_data::FeedConfig;

pub struct Config {
    pub feed: FeedConfig,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = FeedConfig::default();
        let prices_url = lookup("SWAP_PRICES_URL").unwrap_or(defaults.prices_url);
        let icons_base_url = lookup("SWAP_ICONS_BASE_URL").unwrap_or(defaults.icons_base_url);
        let request_timeout = match lookup("SWAP_REQUEST_TIMEOUT_MS") {
            Some(raw) => Duration::from_millis(
                raw.parse()
                    .with_context(|| format!("Invalid SWAP_REQUEST_TIMEOUT_MS: {}", raw))?,
            ),
            None => defaults.request_timeout,
        };
        let log_format = lookup("SWAP_LOG_FORMAT").unwrap_or_else(|| "text".to_string());

        Ok(Self {
            feed: FeedConfig {
                prices_url,
                icons_base_url,
                request_timeout,
            },
            log_format,
        })
    }
}
