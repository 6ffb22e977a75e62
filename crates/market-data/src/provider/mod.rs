//! Price feed abstractions and implementations.
//!
//! This module contains:
//! - The `PriceFeed` trait that all feeds implement
//! - `HttpPriceFeed`, reading the public JSON price list
//! - `StaticPriceFeed`, serving a fixed list of observations
//!
//! Feeds return raw observations only. Deduplication and the choice of one
//! authoritative price per symbol happen downstream, in the price registry.

mod http;
mod static_feed;
mod traits;

pub use http::HttpPriceFeed;
pub use static_feed::StaticPriceFeed;
pub use traits::PriceFeed;
