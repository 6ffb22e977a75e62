//! Command-line arguments.
//!
//! ```bash
//! # List every token with a known price
//! tokenswap tokens
//!
//! # Quote 1.5 ETH in ATOM, as JSON
//! tokenswap quote --from ETH --to ATOM --amount 1.5 --json
//!
//! # Quote and submit, using a local price file
//! tokenswap --prices-file prices.json quote --from ETH --to ATOM --amount 1.5 --submit
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "tokenswap", version, about = "Quote token swaps from the latest known prices")]
pub struct Cli {
    /// Read price observations from a local JSON file instead of the price feed.
    #[arg(long, global = true, value_name = "PATH")]
    pub prices_file: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List tokens with their normalized prices.
    Tokens,
    /// Quote a swap, optionally submitting it.
    Quote(QuoteArgs),
}

#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Symbol to swap from.
    #[arg(long, default_value = "")]
    pub from: String,

    /// Symbol to swap to.
    #[arg(long, default_value = "")]
    pub to: String,

    /// Amount of the `from` token.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub amount: String,

    /// Swap the direction before quoting.
    #[arg(long)]
    pub reverse: bool,

    /// Validate and submit the swap.
    #[arg(long)]
    pub submit: bool,
}
