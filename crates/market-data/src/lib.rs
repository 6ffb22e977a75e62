//! Token Swap Market Data Crate
//!
//! This crate provides the price feed side of the token swap application:
//! fetching raw price observations and describing the tokens they refer to.
//!
//! # Overview
//!
//! The market data crate supports:
//! - A provider-agnostic [`PriceFeed`] trait
//! - An HTTP feed reading the public JSON price list ([`HttpPriceFeed`])
//! - An in-memory feed for tests and offline use ([`StaticPriceFeed`])
//! - Display names and icon URLs for known token symbols
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |   FeedConfig     |  (endpoint, icon base, timeout)
//! +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! |    PriceFeed     | --> |  RawPriceEntry   |  (wire format)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          | PriceObservation |  (untrusted, per symbol/time)
//!                          +------------------+
//! ```
//!
//! Observations are normalized into one price per symbol by the core crate.

pub mod config;
pub mod errors;
pub mod models;
pub mod provider;
pub mod tokens;

pub use config::FeedConfig;
pub use errors::MarketDataError;
pub use models::{PriceObservation, RawPriceEntry, Symbol};
pub use provider::{HttpPriceFeed, PriceFeed, StaticPriceFeed};
pub use tokens::display_name;
