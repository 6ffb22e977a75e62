//! Exchange module - cross rates and amount conversion over a price registry.

mod calculator;
mod format;

pub use calculator::ExchangeCalculator;
pub use format::{format_amount, format_price};
