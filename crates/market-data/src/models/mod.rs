//! Market data models
//!
//! This module contains the core data types for price feed operations:
//! - `types` - Type aliases for common identifiers (Symbol)
//! - `observation` - Wire entries from the feed and the observations derived from them

mod observation;
mod types;

pub use observation::{PriceObservation, RawPriceEntry};
pub use types::Symbol;
