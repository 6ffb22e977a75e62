use crate::prices::PriceRegistry;

/// Converts between tokens using their normalized prices.
///
/// Stateless over the registry it borrows. Whenever either side resolves to
/// the zero sentinel, results are `0.0` rather than an error, infinity or NaN.
/// Values keep full `f64` precision; rounding belongs to presentation.
pub struct ExchangeCalculator<'a> {
    registry: &'a PriceRegistry,
}

impl<'a> ExchangeCalculator<'a> {
    pub fn new(registry: &'a PriceRegistry) -> Self {
        Self { registry }
    }

    pub fn price(&self, symbol: &str) -> f64 {
        self.registry.get_price(symbol)
    }

    /// Units of `to_symbol` received per unit of `from_symbol`.
    pub fn rate(&self, from_symbol: &str, to_symbol: &str) -> f64 {
        match self.prices(from_symbol, to_symbol) {
            Some((from_price, to_price)) => from_price / to_price,
            None => 0.0,
        }
    }

    /// Amount of `to_symbol` received for `input_amount` of `from_symbol`.
    ///
    /// `input_amount` is expected to be validated already.
    pub fn amount(&self, from_symbol: &str, to_symbol: &str, input_amount: f64) -> f64 {
        match self.prices(from_symbol, to_symbol) {
            Some((from_price, to_price)) => input_amount * from_price / to_price,
            None => 0.0,
        }
    }

    fn prices(&self, from_symbol: &str, to_symbol: &str) -> Option<(f64, f64)> {
        let from_price = self.price(from_symbol);
        let to_price = self.price(to_symbol);

        if from_price == 0.0 || to_price == 0.0 {
            return None;
        }
        Some((from_price, to_price))
    }
}
