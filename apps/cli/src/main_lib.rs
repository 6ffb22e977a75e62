use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;
use tokenswap_core::events::{SwapEvent, SwapEventSink};
use tokenswap_core::{
    format_amount, format_price, CalculationPhase, FieldErrors, PriceService, RefreshOutcome,
    SubmitOutcome, SwapForm, SwapSubmission,
};
use tokenswap_market_data::{FeedConfig, HttpPriceFeed, PriceFeed, StaticPriceFeed};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::QuoteArgs;

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

/// The feed to load prices from: a local file when given, the HTTP feed otherwise.
pub async fn build_feed(
    prices_file: Option<&Path>,
    feed_config: &FeedConfig,
) -> anyhow::Result<Box<dyn PriceFeed>> {
    match prices_file {
        Some(path) => {
            let json = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let feed = StaticPriceFeed::from_json(&json)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            Ok(Box::new(feed))
        }
        None => Ok(Box::new(HttpPriceFeed::new(feed_config))),
    }
}

/// Load prices once; a failed fetch is fatal for the command.
pub async fn load_prices(feed: &dyn PriceFeed) -> anyhow::Result<Arc<PriceService>> {
    let prices = Arc::new(PriceService::new());
    match prices.refresh(feed).await {
        RefreshOutcome::Published { tokens } => {
            tracing::info!("Loaded {} tokens from {}", tokens, feed.id());
            Ok(prices)
        }
        RefreshOutcome::Failed { message } => anyhow::bail!(message),
        RefreshOutcome::Discarded => anyhow::bail!("Price fetch was superseded"),
    }
}

/// Logs submitted swaps. Nothing is executed.
pub struct TracingSwapEventSink;

impl SwapEventSink for TracingSwapEventSink {
    fn emit(&self, event: SwapEvent) {
        match event {
            SwapEvent::Submitted(submission) => tracing::info!(
                from_symbol = %submission.from_symbol,
                to_symbol = %submission.to_symbol,
                from_amount = %submission.from_amount,
                to_amount = %submission.to_amount,
                "swap submitted"
            ),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRow {
    pub symbol: String,
    pub name: String,
    pub price: String,
    pub icon_url: String,
}

pub fn token_rows(prices: &PriceService, feed_config: &FeedConfig) -> Vec<TokenRow> {
    prices
        .registry()
        .tokens()
        .iter()
        .map(|token| TokenRow {
            symbol: token.symbol.clone(),
            name: token.display_name.clone(),
            price: format_price(token.price),
            icon_url: feed_config.icon_url(&token.symbol),
        })
        .collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteReport {
    pub from_symbol: String,
    pub to_symbol: String,
    pub from_amount: String,
    pub to_amount: String,
    pub phase: CalculationPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
    #[serde(skip_serializing_if = "FieldErrors::is_empty")]
    pub errors: FieldErrors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted: Option<SwapSubmission>,
}

/// Drive a form through the quote arguments the way a user would.
pub fn run_quote(form: &mut SwapForm, args: &QuoteArgs) -> QuoteReport {
    form.on_select_from(args.from.as_str());
    form.on_select_to(args.to.as_str());
    form.on_amount_change(args.amount.as_str());
    if args.reverse {
        form.on_swap_direction();
    }

    let state = form.state().clone();
    let mut report = QuoteReport {
        from_symbol: state.from_symbol.clone(),
        to_symbol: state.to_symbol.clone(),
        from_amount: state.from_amount.clone(),
        to_amount: state.to_amount().to_string(),
        phase: form.phase(),
        rate: form.exchange_rate().map(format_amount),
        errors: form.field_errors().clone(),
        submitted: None,
    };

    if args.submit {
        match form.on_submit() {
            SubmitOutcome::Submitted(submission) => report.submitted = Some(submission),
            SubmitOutcome::Rejected(errors) => report.errors = errors,
            SubmitOutcome::Disabled => {
                tracing::warn!("Prices unavailable, swap not submitted");
            }
        }
    }

    report
}

pub fn print_tokens(rows: &[TokenRow], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(rows)?);
        return Ok(());
    }
    for row in rows {
        println!("{:<10} {:<24} ${:>14}", row.symbol, row.name, row.price);
    }
    Ok(())
}

pub fn print_quote(report: &QuoteReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    if !report.to_amount.is_empty() {
        println!(
            "{} {} -> {} {}",
            report.from_amount, report.from_symbol, report.to_amount, report.to_symbol
        );
    }
    if let Some(rate) = &report.rate {
        println!(
            "Exchange rate: 1 {} = {} {}",
            report.from_symbol, rate, report.to_symbol
        );
    }
    for (field, message) in [
        ("from", &report.errors.from_symbol),
        ("to", &report.errors.to_symbol),
        ("amount", &report.errors.from_amount),
    ] {
        if let Some(message) = message {
            println!("{}: {}", field, message);
        }
    }
    if report.submitted.is_some() {
        println!("Swap submitted");
    }
    Ok(())
}
