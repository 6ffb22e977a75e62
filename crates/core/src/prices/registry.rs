use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::debug;
use serde::Serialize;
use tokenswap_market_data::{display_name, PriceObservation, Symbol};

/// The single trusted price record kept per symbol.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedToken {
    pub symbol: Symbol,
    pub display_name: String,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<DateTime<Utc>>,
}

/// One current price per token symbol, built from raw observations.
///
/// For every symbol present, the price comes from the observation with the
/// latest timestamp among those carrying a price. Observations without a
/// price are ignored. An observation with a timestamp always wins over one
/// without; on equal timestamps (or when both lack one) the first observation
/// ingested is kept.
///
/// Tokens are kept ordered by display name, case-insensitive.
#[derive(Clone, Debug, Default)]
pub struct PriceRegistry {
    tokens: Vec<NormalizedToken>,
    index: HashMap<Symbol, usize>,
}

impl PriceRegistry {
    /// Normalize a batch of observations into a registry.
    ///
    /// Never fails: malformed or unpriced observations are dropped.
    pub fn ingest<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = PriceObservation>,
    {
        let mut latest: HashMap<Symbol, NormalizedToken> = HashMap::new();
        let mut unpriced = 0usize;

        for observation in observations {
            let Some(price) = observation.usable_price() else {
                unpriced += 1;
                continue;
            };

            match latest.entry(observation.symbol) {
                Entry::Occupied(mut slot) => {
                    if supersedes(observation.observed_at, slot.get().observed_at) {
                        let token = slot.get_mut();
                        token.price = price;
                        token.observed_at = observation.observed_at;
                    }
                }
                Entry::Vacant(slot) => {
                    let symbol = slot.key().clone();
                    slot.insert(NormalizedToken {
                        display_name: display_name(&symbol),
                        symbol,
                        price,
                        observed_at: observation.observed_at,
                    });
                }
            }
        }

        if unpriced > 0 {
            debug!("Ignored {} observations without a price", unpriced);
        }

        let mut tokens: Vec<NormalizedToken> = latest.into_values().collect();
        tokens.sort_by(by_display_name);

        let index = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| (token.symbol.clone(), i))
            .collect();

        Self { tokens, index }
    }

    /// Normalized price for `symbol`, or `0.0` if the symbol is unknown.
    ///
    /// Zero is a sentinel meaning "no usable price"; callers must not divide by it.
    pub fn get_price(&self, symbol: &str) -> f64 {
        self.get(symbol).map(|token| token.price).unwrap_or(0.0)
    }

    pub fn get(&self, symbol: &str) -> Option<&NormalizedToken> {
        self.index.get(symbol).map(|&i| &self.tokens[i])
    }

    /// Tokens ordered by display name for populating selectors.
    pub fn tokens(&self) -> &[NormalizedToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Whether a candidate observation time replaces the one already held.
fn supersedes(candidate: Option<DateTime<Utc>>, held: Option<DateTime<Utc>>) -> bool {
    match (candidate, held) {
        (Some(candidate), Some(held)) => candidate > held,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

fn by_display_name(a: &NormalizedToken, b: &NormalizedToken) -> Ordering {
    a.display_name
        .to_lowercase()
        .cmp(&b.display_name.to_lowercase())
        .then_with(|| a.symbol.cmp(&b.symbol))
}
