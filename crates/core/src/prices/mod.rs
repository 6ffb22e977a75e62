//! Prices module - normalized price registry and its refresh lifecycle.

mod registry;
mod service;

pub use registry::{NormalizedToken, PriceRegistry};
pub use service::{PriceService, RefreshOutcome};
