/// Decimal places used when presenting swap amounts and rates
pub const AMOUNT_DISPLAY_DECIMALS: usize = 6;

/// Decimal places used when presenting token prices
pub const PRICE_DISPLAY_DECIMALS: usize = 4;

/// Validation messages
pub const MSG_SELECT_FROM_TOKEN: &str = "select a token to swap from";
pub const MSG_SELECT_TO_TOKEN: &str = "select a token to swap to";
pub const MSG_SAME_TOKEN: &str = "cannot swap to the same token";
pub const MSG_ENTER_AMOUNT: &str = "enter an amount";
pub const MSG_INVALID_AMOUNT: &str = "enter a valid amount greater than 0";
