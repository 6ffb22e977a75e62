//! Tests for the SwapForm control surface.
//!
//! These exercise the form the way a presentation layer drives it: input
//! events in, observable outputs and submission events out.

use std::sync::Arc;

use async_trait::async_trait;
use tokenswap_market_data::{MarketDataError, PriceFeed, PriceObservation, StaticPriceFeed};

use super::{CalculationPhase, SubmitOutcome, SwapForm, SwapSubmission};
use crate::constants::{
    MSG_ENTER_AMOUNT, MSG_INVALID_AMOUNT, MSG_SAME_TOKEN, MSG_SELECT_FROM_TOKEN,
    MSG_SELECT_TO_TOKEN,
};
use crate::events::{MockSwapEventSink, SwapEvent};
use crate::prices::{PriceRegistry, PriceService};

fn observations(pairs: &[(&str, f64)]) -> Vec<PriceObservation> {
    pairs
        .iter()
        .map(|(symbol, price)| PriceObservation::new(*symbol, Some(*price), None))
        .collect()
}

fn ready_form(pairs: &[(&str, f64)]) -> (SwapForm, MockSwapEventSink) {
    let prices = Arc::new(PriceService::with_registry(PriceRegistry::ingest(
        observations(pairs),
    )));
    let sink = MockSwapEventSink::new();
    (SwapForm::new(prices, Arc::new(sink.clone())), sink)
}

struct DownFeed;

#[async_trait]
impl PriceFeed for DownFeed {
    fn id(&self) -> &'static str {
        "DOWN"
    }

    async fn fetch_observations(&self) -> Result<Vec<PriceObservation>, MarketDataError> {
        Err(MarketDataError::HttpStatus { status: 503 })
    }
}

#[test]
fn test_amount_is_derived_once_all_inputs_present() {
    let (mut form, _) = ready_form(&[("A", 10.0), ("B", 2.5)]);

    form.on_select_from("A");
    assert_eq!(form.to_amount(), "");
    assert_eq!(form.phase(), CalculationPhase::Idle);

    form.on_select_to("B");
    form.on_amount_change("5");

    assert_eq!(form.phase(), CalculationPhase::Settled);
    assert_eq!(form.to_amount(), "20.000000");
    assert!(!form.calculating());
    assert_eq!(form.exchange_rate(), Some(4.0));
}

#[test]
fn test_each_edit_re_derives_amount() {
    let (mut form, _) = ready_form(&[("A", 10.0), ("B", 2.5), ("C", 5.0)]);
    form.on_select_from("A");
    form.on_select_to("B");
    form.on_amount_change("5");

    form.on_amount_change("1");
    assert_eq!(form.to_amount(), "4.000000");

    form.on_select_to("C");
    assert_eq!(form.to_amount(), "2.000000");
}

#[test]
fn test_negative_amount_marks_field_invalid() {
    let (mut form, _) = ready_form(&[("A", 10.0), ("B", 2.5)]);
    form.on_select_from("A");
    form.on_select_to("B");
    form.on_amount_change("-3");

    assert_eq!(form.phase(), CalculationPhase::Invalid);
    assert_eq!(form.to_amount(), "");
    assert_eq!(
        form.field_errors().from_amount.as_deref(),
        Some(MSG_INVALID_AMOUNT)
    );

    form.on_amount_change("3");
    assert_eq!(form.field_errors().from_amount, None);
    assert_eq!(form.to_amount(), "12.000000");
}

#[test]
fn test_unknown_symbol_quotes_zero_without_error() {
    let (mut form, _) = ready_form(&[("B", 2.5)]);
    form.on_select_from("X");
    form.on_select_to("B");
    form.on_amount_change("5");

    assert_eq!(form.phase(), CalculationPhase::Settled);
    assert_eq!(form.to_amount(), "0.000000");
    assert!(form.field_errors().is_empty());
    assert_eq!(form.exchange_rate(), Some(0.0));
}

#[test]
fn test_clearing_an_input_returns_to_idle() {
    let (mut form, _) = ready_form(&[("A", 10.0), ("B", 2.5)]);
    form.on_select_from("A");
    form.on_select_to("B");
    form.on_amount_change("5");

    form.on_amount_change("");

    assert_eq!(form.phase(), CalculationPhase::Idle);
    assert_eq!(form.to_amount(), "");
}

#[test]
fn test_deselecting_a_token_clears_invalid_amount_error() {
    let (mut form, _) = ready_form(&[("A", 10.0), ("B", 2.5)]);
    form.on_select_from("A");
    form.on_select_to("B");
    form.on_amount_change("-3");
    assert_eq!(form.phase(), CalculationPhase::Invalid);

    form.on_select_to("");

    assert_eq!(form.phase(), CalculationPhase::Idle);
    assert_eq!(form.to_amount(), "");
    assert_eq!(form.field_errors().from_amount, None);
}

#[test]
fn test_idle_keeps_submit_time_amount_error() {
    let (mut form, _) = ready_form(&[("A", 10.0), ("B", 2.5)]);
    form.on_select_from("A");
    form.on_select_to("B");
    form.on_submit();
    assert_eq!(
        form.field_errors().from_amount.as_deref(),
        Some(MSG_ENTER_AMOUNT)
    );

    form.on_select_to("A");

    assert_eq!(form.phase(), CalculationPhase::Idle);
    assert_eq!(
        form.field_errors().from_amount.as_deref(),
        Some(MSG_ENTER_AMOUNT)
    );
}

#[test]
fn test_swap_direction_after_invalid_amount_clears_amount_error() {
    let (mut form, _) = ready_form(&[("A", 10.0), ("B", 2.5)]);
    form.on_select_from("A");
    form.on_select_to("B");
    form.on_amount_change("-3");

    form.on_swap_direction();

    assert_eq!(form.state().from_symbol, "B");
    assert_eq!(form.state().to_symbol, "A");
    assert_eq!(form.state().from_amount, "");
    assert_eq!(form.phase(), CalculationPhase::Idle);
    assert_eq!(form.field_errors().from_amount, None);
}

#[test]
fn test_swap_direction_moves_symbol_errors_with_symbols() {
    let (mut form, _) = ready_form(&[("A", 10.0), ("B", 2.5)]);
    form.on_select_to("B");
    form.on_submit();
    assert_eq!(
        form.field_errors().from_symbol.as_deref(),
        Some(MSG_SELECT_FROM_TOKEN)
    );
    assert_eq!(form.field_errors().to_symbol, None);

    form.on_swap_direction();

    assert_eq!(form.state().from_symbol, "B");
    assert_eq!(form.state().to_symbol, "");
    assert_eq!(form.field_errors().from_symbol, None);
    assert_eq!(
        form.field_errors().to_symbol.as_deref(),
        Some(MSG_SELECT_FROM_TOKEN)
    );
    assert_eq!(form.field_errors().from_amount, None);
}

#[test]
fn test_swap_direction_uses_derived_amount() {
    let (mut form, _) = ready_form(&[("A", 10.0), ("B", 2.5)]);
    form.on_select_from("A");
    form.on_select_to("B");
    form.on_amount_change("5");

    form.on_swap_direction();

    assert_eq!(form.state().from_symbol, "B");
    assert_eq!(form.state().to_symbol, "A");
    assert_eq!(form.state().from_amount, "20.000000");
    assert_eq!(form.to_amount(), "5.000000");
}

#[test]
fn test_swap_direction_before_any_quote_leaves_amount_empty() {
    let (mut form, _) = ready_form(&[("A", 10.0), ("B", 2.5)]);
    form.on_select_from("A");
    form.on_select_to("B");

    form.on_swap_direction();

    assert_eq!(form.state().from_amount, "");
    assert_eq!(form.phase(), CalculationPhase::Idle);
}

#[test]
fn test_submit_emits_event_and_resets() {
    let (mut form, sink) = ready_form(&[("A", 10.0), ("B", 2.5)]);
    form.on_select_from("A");
    form.on_select_to("B");
    form.on_amount_change("5");

    let outcome = form.on_submit();

    let expected = SwapSubmission {
        from_symbol: "A".to_string(),
        to_symbol: "B".to_string(),
        from_amount: "5".to_string(),
        to_amount: "20.000000".to_string(),
    };
    assert_eq!(outcome, SubmitOutcome::Submitted(expected.clone()));
    assert_eq!(sink.events(), vec![SwapEvent::Submitted(expected)]);
    assert_eq!(form.state().from_symbol, "");
    assert_eq!(form.to_amount(), "");
    assert_eq!(form.phase(), CalculationPhase::Idle);
}

#[test]
fn test_rejected_submit_publishes_errors_and_keeps_state() {
    let (mut form, sink) = ready_form(&[("A", 10.0)]);

    let outcome = form.on_submit();

    let errors = match outcome {
        SubmitOutcome::Rejected(errors) => errors,
        other => panic!("expected rejection, got {:?}", other),
    };
    assert_eq!(errors.from_symbol.as_deref(), Some(MSG_SELECT_FROM_TOKEN));
    assert_eq!(errors.to_symbol.as_deref(), Some(MSG_SELECT_TO_TOKEN));
    assert_eq!(errors.from_amount.as_deref(), Some(MSG_ENTER_AMOUNT));
    assert_eq!(form.field_errors(), &errors);
    assert!(sink.is_empty());

    form.on_select_from("A");
    assert_eq!(form.field_errors().from_symbol, None);
    assert_eq!(
        form.field_errors().to_symbol.as_deref(),
        Some(MSG_SELECT_TO_TOKEN)
    );
}

#[test]
fn test_same_token_submit_is_rejected() {
    let (mut form, _) = ready_form(&[("A", 10.0)]);
    form.on_select_from("A");
    form.on_select_to("A");
    form.on_amount_change("1");

    let outcome = form.on_submit();

    let errors = match outcome {
        SubmitOutcome::Rejected(errors) => errors,
        other => panic!("expected rejection, got {:?}", other),
    };
    assert_eq!(errors.to_symbol.as_deref(), Some(MSG_SAME_TOKEN));
    assert_eq!(form.state().from_amount, "1");
}

#[tokio::test]
async fn test_form_is_disabled_until_prices_load() {
    let prices = Arc::new(PriceService::new());
    let sink = MockSwapEventSink::new();
    let mut form = SwapForm::new(Arc::clone(&prices), Arc::new(sink.clone()));

    assert!(form.loading());
    assert!(!form.is_enabled());
    assert_eq!(form.on_submit(), SubmitOutcome::Disabled);

    form.on_select_from("A");
    form.on_select_to("B");
    form.on_amount_change("5");
    assert_eq!(form.to_amount(), "0.000000");

    prices
        .refresh(&StaticPriceFeed::new(observations(&[("A", 10.0), ("B", 2.5)])))
        .await;
    form.on_prices_refreshed();

    assert!(form.is_enabled());
    assert_eq!(form.tokens().len(), 2);
    assert_eq!(form.to_amount(), "20.000000");
}

#[tokio::test]
async fn test_feed_failure_disables_form() {
    let prices = Arc::new(PriceService::new());
    let mut form = SwapForm::new(Arc::clone(&prices), Arc::new(MockSwapEventSink::new()));

    prices.refresh(&DownFeed).await;

    assert!(!form.loading());
    assert_eq!(
        form.fetch_error().as_deref(),
        Some("Failed to fetch prices: HTTP 503")
    );
    assert!(form.tokens().is_empty());
    assert_eq!(form.on_submit(), SubmitOutcome::Disabled);
}
