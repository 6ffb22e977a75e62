//! Where submitted swaps go.

use std::sync::{Arc, Mutex};

use super::SwapEvent;

/// Receives events from a [`SwapForm`](crate::swap::SwapForm).
///
/// Called synchronously from `on_submit`, before the form resets. A sink that
/// needs to do I/O should hand the event off rather than block.
pub trait SwapEventSink: Send + Sync {
    fn emit(&self, event: SwapEvent);
}

/// Collects submitted swaps in memory.
#[derive(Clone, Default)]
pub struct MockSwapEventSink {
    events: Arc<Mutex<Vec<SwapEvent>>>,
}

impl MockSwapEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<SwapEvent> {
        self.lock().clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<SwapEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SwapEventSink for MockSwapEventSink {
    fn emit(&self, event: SwapEvent) {
        self.lock().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swap::SwapSubmission;

    fn submission(amount: &str) -> SwapEvent {
        SwapEvent::submitted(SwapSubmission {
            from_symbol: "ETH".to_string(),
            to_symbol: "ATOM".to_string(),
            from_amount: amount.to_string(),
            to_amount: "229.157135".to_string(),
        })
    }

    #[test]
    fn test_mock_sink_collects_events() {
        let sink = MockSwapEventSink::new();
        assert!(sink.is_empty());

        sink.emit(submission("1"));
        assert_eq!(sink.len(), 1);

        sink.emit(submission("2"));
        sink.emit(submission("3"));
        assert_eq!(sink.len(), 3);
        assert_eq!(sink.events()[2], submission("3"));

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_event_serializes_with_type_tag() {
        let json = serde_json::to_value(submission("1")).unwrap();
        assert_eq!(json["type"], "submitted");
        assert_eq!(json["fromSymbol"], "ETH");
    }
}
