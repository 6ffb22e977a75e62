//! Reactive recalculation of the derived `to` amount.
//!
//! ```text
//!   Idle --(all inputs set)--> Calculating --> Settled
//!    ^                              |      \-> Invalid
//!    +------(any input empty)-------+
//! ```
//!
//! Each recalculation is issued a [`Generation`]. A result is published only
//! if its generation is still the latest one issued, so a slower computation
//! for an older input can never overwrite the result for a newer one.

use log::debug;
use serde::Serialize;

use super::model::SwapState;
use super::validator::parse_amount;
use crate::constants::MSG_INVALID_AMOUNT;
use crate::exchange::{format_amount, ExchangeCalculator};
use crate::prices::PriceRegistry;
use crate::sequence::{Generation, Sequencer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CalculationPhase {
    Idle,
    Calculating,
    Settled,
    Invalid,
}

/// Result of evaluating one set of inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CalculationOutcome {
    /// At least one input is empty.
    Cleared,
    /// The amount does not parse or is not strictly positive.
    InvalidAmount,
    /// Derived amount at full precision.
    Computed(f64),
}

impl CalculationOutcome {
    /// Evaluate the inputs of `state` against a calculator. Never fails.
    pub fn evaluate(state: &SwapState, calculator: &ExchangeCalculator<'_>) -> Self {
        if !state.has_quote_inputs() {
            return Self::Cleared;
        }

        match parse_amount(&state.from_amount) {
            Some(amount) => {
                Self::Computed(calculator.amount(&state.from_symbol, &state.to_symbol, amount))
            }
            None => Self::InvalidAmount,
        }
    }
}

#[derive(Debug)]
pub struct RecalculationController {
    sequencer: Sequencer,
    phase: CalculationPhase,
    amount: Option<f64>,
    to_amount: String,
    error: Option<String>,
}

impl Default for RecalculationController {
    fn default() -> Self {
        Self::new()
    }
}

impl RecalculationController {
    pub fn new() -> Self {
        Self {
            sequencer: Sequencer::new(),
            phase: CalculationPhase::Idle,
            amount: None,
            to_amount: String::new(),
            error: None,
        }
    }

    /// Start a recalculation for a changed input.
    ///
    /// The returned generation must be passed back to [`settle`](Self::settle).
    pub fn begin(&mut self) -> Generation {
        self.phase = CalculationPhase::Calculating;
        self.sequencer.issue()
    }

    /// Publish the outcome of a recalculation if it is still the latest.
    ///
    /// Returns `false` when the outcome was discarded as stale.
    pub fn settle(&mut self, generation: Generation, outcome: CalculationOutcome) -> bool {
        if !self.sequencer.is_current(generation) {
            debug!(
                "Discarding recalculation {}: superseded by {}",
                generation,
                self.sequencer.latest()
            );
            return false;
        }

        match outcome {
            CalculationOutcome::Cleared => {
                self.phase = CalculationPhase::Idle;
                self.amount = None;
                self.to_amount.clear();
                self.error = None;
            }
            CalculationOutcome::InvalidAmount => {
                self.phase = CalculationPhase::Invalid;
                self.amount = None;
                self.to_amount.clear();
                self.error = Some(MSG_INVALID_AMOUNT.to_string());
            }
            CalculationOutcome::Computed(amount) => {
                self.phase = CalculationPhase::Settled;
                self.amount = Some(amount);
                self.to_amount = format_amount(amount);
                self.error = None;
            }
        }
        true
    }

    /// Recalculate synchronously against `registry` and publish the result.
    pub fn recalculate(&mut self, state: &SwapState, registry: &PriceRegistry) -> CalculationPhase {
        let generation = self.begin();
        let outcome = CalculationOutcome::evaluate(state, &ExchangeCalculator::new(registry));
        self.settle(generation, outcome);
        self.phase
    }

    /// Return to idle and discard any recalculation still in flight.
    pub fn reset(&mut self) {
        self.sequencer.invalidate();
        self.phase = CalculationPhase::Idle;
        self.amount = None;
        self.to_amount.clear();
        self.error = None;
    }

    pub fn phase(&self) -> CalculationPhase {
        self.phase
    }

    pub fn is_calculating(&self) -> bool {
        self.phase == CalculationPhase::Calculating
    }

    /// Derived amount, formatted for display. Empty unless settled.
    pub fn to_amount(&self) -> &str {
        &self.to_amount
    }

    /// Derived amount at full precision.
    pub fn amount(&self) -> Option<f64> {
        self.amount
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
