//! Swap event types.

use serde::{Deserialize, Serialize};

use crate::swap::SwapSubmission;

/// Events emitted by the swap form after a successful action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SwapEvent {
    /// A swap passed validation and was submitted. The form has been reset.
    Submitted(SwapSubmission),
}

impl SwapEvent {
    pub fn submitted(submission: SwapSubmission) -> Self {
        SwapEvent::Submitted(submission)
    }
}
