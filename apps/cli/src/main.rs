mod cli;
mod config;
mod main_lib;

use std::sync::Arc;

use clap::Parser;
use tokenswap_core::SwapForm;

use cli::{Cli, Command};
use config::Config;
use main_lib::{
    build_feed, init_tracing, load_prices, print_quote, print_tokens, run_quote, token_rows,
    TracingSwapEventSink,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing(&config.log_format);

    let feed = build_feed(cli.prices_file.as_deref(), &config.feed).await?;
    let prices = load_prices(feed.as_ref()).await?;

    match &cli.command {
        Command::Tokens => print_tokens(&token_rows(&prices, &config.feed), cli.json)?,
        Command::Quote(args) => {
            let mut form = SwapForm::new(prices, Arc::new(TracingSwapEventSink));
            let report = run_quote(&mut form, args);
            print_quote(&report, cli.json)?;
        }
    }
    Ok(())
}
