//! Swap form control surface.
//!
//! The presentation layer feeds user input events in and reads the observable
//! outputs back: tokens, loading, fetch error, derived amount, calculating
//! flag and field errors. The derived amount is re-derived after every input
//! change.

use std::sync::Arc;

use log::{debug, info};

use super::controller::{CalculationPhase, RecalculationController};
use super::model::{SwapField, SwapState, SwapSubmission};
use super::validator::{validate, FieldErrors};
use crate::constants::MSG_INVALID_AMOUNT;
use crate::events::{SwapEvent, SwapEventSink};
use crate::exchange::ExchangeCalculator;
use crate::prices::{NormalizedToken, PriceRegistry, PriceService};

/// Result of a submit request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The swap was emitted and the form reset.
    Submitted(SwapSubmission),
    /// Validation failed; the errors are also published on the form.
    Rejected(FieldErrors),
    /// Prices are loading or failed to load; nothing was done.
    Disabled,
}

pub struct SwapForm {
    prices: Arc<PriceService>,
    sink: Arc<dyn SwapEventSink>,
    state: SwapState,
    controller: RecalculationController,
    field_errors: FieldErrors,
}

impl SwapForm {
    pub fn new(prices: Arc<PriceService>, sink: Arc<dyn SwapEventSink>) -> Self {
        Self {
            prices,
            sink,
            state: SwapState::default(),
            controller: RecalculationController::new(),
            field_errors: FieldErrors::default(),
        }
    }

    // ------------------------------------------------------------------
    // Observable outputs
    // ------------------------------------------------------------------

    pub fn registry(&self) -> Arc<PriceRegistry> {
        self.prices.registry()
    }

    /// Tokens ordered for populating selectors.
    pub fn tokens(&self) -> Vec<NormalizedToken> {
        self.prices.registry().tokens().to_vec()
    }

    pub fn loading(&self) -> bool {
        self.prices.loading()
    }

    pub fn fetch_error(&self) -> Option<String> {
        self.prices.fetch_error()
    }

    /// False while prices are loading or after the price fetch failed.
    pub fn is_enabled(&self) -> bool {
        !self.loading() && self.fetch_error().is_none()
    }

    pub fn state(&self) -> &SwapState {
        &self.state
    }

    pub fn to_amount(&self) -> &str {
        self.state.to_amount()
    }

    pub fn calculating(&self) -> bool {
        self.controller.is_calculating()
    }

    pub fn phase(&self) -> CalculationPhase {
        self.controller.phase()
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// Rate for the selected pair, when both sides are selected.
    pub fn exchange_rate(&self) -> Option<f64> {
        if self.state.from_symbol.is_empty() || self.state.to_symbol.is_empty() {
            return None;
        }
        let registry = self.prices.registry();
        Some(ExchangeCalculator::new(&registry).rate(&self.state.from_symbol, &self.state.to_symbol))
    }

    // ------------------------------------------------------------------
    // Input events
    // ------------------------------------------------------------------

    pub fn on_amount_change(&mut self, amount: impl Into<String>) {
        self.state.from_amount = amount.into();
        self.field_errors.clear(SwapField::FromAmount);
        self.recalculate();
    }

    pub fn on_select_from(&mut self, symbol: impl Into<String>) {
        self.state.from_symbol = symbol.into();
        self.field_errors.clear(SwapField::FromSymbol);
        self.recalculate();
    }

    pub fn on_select_to(&mut self, symbol: impl Into<String>) {
        self.state.to_symbol = symbol.into();
        self.field_errors.clear(SwapField::ToSymbol);
        self.recalculate();
    }

    /// Exchange the from/to pairs. The previous derived amount becomes the input.
    ///
    /// Symbol errors follow their symbols; the amount error is dropped along
    /// with the amount it described.
    pub fn on_swap_direction(&mut self) {
        self.state = self.state.reversed();
        self.field_errors.swap_symbols();
        self.field_errors.clear(SwapField::FromAmount);
        self.recalculate();
    }

    /// Re-derive the amount after the price service published new prices.
    pub fn on_prices_refreshed(&mut self) {
        self.recalculate();
    }

    pub fn on_submit(&mut self) -> SubmitOutcome {
        if !self.is_enabled() {
            debug!("Ignoring submit while prices are unavailable");
            return SubmitOutcome::Disabled;
        }

        let errors = validate(&self.state);
        if !errors.is_empty() {
            self.field_errors = errors.clone();
            return SubmitOutcome::Rejected(errors);
        }

        let submission = SwapSubmission::from(&self.state);
        info!(
            "Swap submitted: {} {} -> {} {}",
            submission.from_amount,
            submission.from_symbol,
            submission.to_amount,
            submission.to_symbol
        );
        self.sink.emit(SwapEvent::submitted(submission.clone()));
        self.reset();
        SubmitOutcome::Submitted(submission)
    }

    /// Clear every input, the derived amount and all errors.
    pub fn reset(&mut self) {
        self.state = SwapState::default();
        self.controller.reset();
        self.field_errors = FieldErrors::default();
    }

    fn recalculate(&mut self) {
        let registry = self.prices.registry();
        let phase = self.controller.recalculate(&self.state, &registry);
        self.state.to_amount = self.controller.to_amount().to_string();

        match phase {
            CalculationPhase::Invalid => {
                if let Some(message) = self.controller.error() {
                    self.field_errors.set(SwapField::FromAmount, message);
                }
            }
            CalculationPhase::Settled => self.field_errors.clear(SwapField::FromAmount),
            CalculationPhase::Idle => {
                // Only the controller's own message; submit-time messages stay.
                if self.field_errors.get(SwapField::FromAmount) == Some(MSG_INVALID_AMOUNT) {
                    self.field_errors.clear(SwapField::FromAmount);
                }
            }
            CalculationPhase::Calculating => {}
        }
    }
}
