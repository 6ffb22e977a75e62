//! Submission-time validation of a swap form.
//!
//! Every rule is evaluated independently so several fields can report an
//! error at once. Each field holds at most one message; when two rules hit
//! the same field, the one evaluated last wins.

use serde::Serialize;

use super::model::{SwapField, SwapState};
use crate::constants::{
    MSG_ENTER_AMOUNT, MSG_INVALID_AMOUNT, MSG_SAME_TOKEN, MSG_SELECT_FROM_TOKEN,
    MSG_SELECT_TO_TOKEN,
};

/// Per-field error messages. `None` means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_amount: Option<String>,
}

impl FieldErrors {
    /// True when no field carries an error, i.e. the form may be submitted.
    pub fn is_empty(&self) -> bool {
        self.from_symbol.is_none() && self.to_symbol.is_none() && self.from_amount.is_none()
    }

    pub fn get(&self, field: SwapField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: SwapField, message: impl Into<String>) {
        *self.slot_mut(field) = Some(message.into());
    }

    pub fn clear(&mut self, field: SwapField) {
        *self.slot_mut(field) = None;
    }

    /// Exchange the from/to symbol errors, as when the pair is reversed.
    pub fn swap_symbols(&mut self) {
        std::mem::swap(&mut self.from_symbol, &mut self.to_symbol);
    }

    fn slot(&self, field: SwapField) -> &Option<String> {
        match field {
            SwapField::FromSymbol => &self.from_symbol,
            SwapField::ToSymbol => &self.to_symbol,
            SwapField::FromAmount => &self.from_amount,
        }
    }

    fn slot_mut(&mut self, field: SwapField) -> &mut Option<String> {
        match field {
            SwapField::FromSymbol => &mut self.from_symbol,
            SwapField::ToSymbol => &mut self.to_symbol,
            SwapField::FromAmount => &mut self.from_amount,
        }
    }
}

/// Parse a user-entered amount.
///
/// Accepts a plain decimal number, ignoring surrounding whitespace. Returns
/// `None` unless the value is finite and strictly positive.
pub fn parse_amount(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

/// Validate a full form snapshot.
pub fn validate(state: &SwapState) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if state.from_symbol.is_empty() {
        errors.set(SwapField::FromSymbol, MSG_SELECT_FROM_TOKEN);
    }
    if state.to_symbol.is_empty() {
        errors.set(SwapField::ToSymbol, MSG_SELECT_TO_TOKEN);
    }
    if !state.from_symbol.is_empty() && state.from_symbol == state.to_symbol {
        errors.set(SwapField::ToSymbol, MSG_SAME_TOKEN);
    }

    if state.from_amount.is_empty() {
        errors.set(SwapField::FromAmount, MSG_ENTER_AMOUNT);
    } else if parse_amount(&state.from_amount).is_none() {
        errors.set(SwapField::FromAmount, MSG_INVALID_AMOUNT);
    }

    errors
}
