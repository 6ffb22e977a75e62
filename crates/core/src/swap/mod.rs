//! Swap module - form state, validation, recalculation and the form control surface.

mod controller;
mod form;
mod model;
mod validator;

#[cfg(test)]
mod form_tests;

pub use controller::{CalculationOutcome, CalculationPhase, RecalculationController};
pub use form::{SubmitOutcome, SwapForm};
pub use model::{SwapField, SwapState, SwapSubmission};
pub use validator::{parse_amount, validate, FieldErrors};
