use serde::{Deserialize, Serialize};

/// The editable fields of a swap form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SwapField {
    FromSymbol,
    ToSymbol,
    FromAmount,
}

/// Snapshot of a swap form.
///
/// `to_amount` is derived: it is only ever written by recalculation, never
/// by a user edit, so it has no public setter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapState {
    pub from_symbol: String,
    pub to_symbol: String,
    pub from_amount: String,
    pub(crate) to_amount: String,
}

impl SwapState {
    pub fn new(
        from_symbol: impl Into<String>,
        to_symbol: impl Into<String>,
        from_amount: impl Into<String>,
    ) -> Self {
        Self {
            from_symbol: from_symbol.into(),
            to_symbol: to_symbol.into(),
            from_amount: from_amount.into(),
            to_amount: String::new(),
        }
    }

    pub fn to_amount(&self) -> &str {
        &self.to_amount
    }

    /// The state with both directions exchanged.
    ///
    /// The previous derived amount becomes the new input amount and the
    /// derived amount is cleared until it is recalculated.
    pub fn reversed(&self) -> Self {
        Self {
            from_symbol: self.to_symbol.clone(),
            to_symbol: self.from_symbol.clone(),
            from_amount: self.to_amount.clone(),
            to_amount: String::new(),
        }
    }

    /// Whether every input needed for a quote has been provided.
    pub fn has_quote_inputs(&self) -> bool {
        !self.from_symbol.is_empty() && !self.to_symbol.is_empty() && !self.from_amount.is_empty()
    }
}

/// A validated swap handed to whoever executes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapSubmission {
    pub from_symbol: String,
    pub to_symbol: String,
    pub from_amount: String,
    pub to_amount: String,
}

impl From<&SwapState> for SwapSubmission {
    fn from(state: &SwapState) -> Self {
        Self {
            from_symbol: state.from_symbol.clone(),
            to_symbol: state.to_symbol.clone(),
            from_amount: state.from_amount.clone(),
            to_amount: state.to_amount.clone(),
        }
    }
}
