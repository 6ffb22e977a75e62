/// Token symbol as reported by the feed (e.g. "ETH", "bNEO")
pub type Symbol = String;
