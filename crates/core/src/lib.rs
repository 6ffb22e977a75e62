//! Token Swap Core - price normalization and swap quoting.
//!
//! This crate turns raw price observations into one authoritative price per
//! token and derives swap quotes from them:
//!
//! - [`prices`]: the price registry and the service that refreshes it
//! - [`exchange`]: rate and amount conversion over a registry
//! - [`swap`]: form state, validation, recalculation and the form control surface
//! - [`events`]: submission events and the sink they are emitted through
//!
//! Nothing here performs I/O except through a
//! [`PriceFeed`](tokenswap_market_data::PriceFeed) handed to the price service.

pub mod constants;
pub mod events;
pub mod exchange;
pub mod prices;
pub mod sequence;
pub mod swap;

pub use exchange::{format_amount, format_price, ExchangeCalculator};
pub use prices::{NormalizedToken, PriceRegistry, PriceService, RefreshOutcome};
pub use sequence::{Generation, Sequencer};
pub use swap::{
    validate, CalculationPhase, FieldErrors, RecalculationController, SubmitOutcome, SwapField,
    SwapForm, SwapState, SwapSubmission,
};
