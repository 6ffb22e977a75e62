//! Human-readable names for the token symbols the feed is known to carry.

use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    static ref TOKEN_NAMES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("BLUR", "Blur");
        m.insert("bNEO", "Binance-Peg NEO");
        m.insert("BUSD", "Binance USD");
        m.insert("USD", "US Dollar");
        m.insert("ETH", "Ethereum");
        m.insert("GMX", "GMX");
        m.insert("STEVMOS", "Stride Evmos");
        m.insert("LUNA", "Terra Luna");
        m.insert("RATOM", "Reward Atom");
        m.insert("STRD", "Stride");
        m.insert("EVMOS", "Evmos");
        m.insert("IBCX", "IBC Index");
        m.insert("IRIS", "IRISnet");
        m.insert("ampLUNA", "Ampleforth Luna");
        m.insert("KUJI", "Kujira");
        m.insert("STOSMO", "Stride Osmosis");
        m.insert("USDC", "USD Coin");
        m.insert("axlUSDC", "Axelar USDC");
        m.insert("ATOM", "Cosmos");
        m.insert("STATOM", "Stride Atom");
        m.insert("OSMO", "Osmosis");
        m.insert("rSWTH", "Reward Switcheo");
        m.insert("STLUNA", "Stride Luna");
        m.insert("LSI", "Liquid Staking Index");
        m.insert("OKB", "OKB");
        m.insert("OKT", "OKExChain Token");
        m.insert("SWTH", "Switcheo");
        m.insert("USC", "USC");
        m.insert("WBTC", "Wrapped Bitcoin");
        m.insert("wstETH", "Wrapped Staked Ether");
        m.insert("YieldUSD", "Yield USD");
        m.insert("ZIL", "Zilliqa");
        m
    };
}

/// Display name for a symbol, falling back to the symbol itself.
///
/// Lookup is case-sensitive: `bNEO` and `BNEO` are different tokens.
pub fn display_name(symbol: &str) -> String {
    TOKEN_NAMES
        .get(symbol)
        .map(|name| name.to_string())
        .unwrap_or_else(|| symbol.to_string())
}
