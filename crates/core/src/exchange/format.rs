//! Presentation formatting. Internal values are never rounded.

use crate::constants::{AMOUNT_DISPLAY_DECIMALS, PRICE_DISPLAY_DECIMALS};

/// Format a swap amount or rate with six decimal places.
pub fn format_amount(value: f64) -> String {
    format!("{:.*}", AMOUNT_DISPLAY_DECIMALS, value)
}

/// Format a token price with four decimal places.
pub fn format_price(value: f64) -> String {
    format!("{:.*}", PRICE_DISPLAY_DECIMALS, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(20.0), "20.000000");
        assert_eq!(format_amount(0.0), "0.000000");
        assert_eq!(format_amount(1.0 / 3.0), "0.333333");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1645.9337373737374), "1645.9337");
        assert_eq!(format_price(0.0), "0.0000");
    }
}
