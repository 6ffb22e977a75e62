//! Price service - owns the current registry and refreshes it from a feed.
//!
//! The registry is replaced wholesale on every successful fetch and handed
//! out as an `Arc` snapshot, so readers never observe a half-built registry.
//! Each fetch carries a generation; a fetch that completes after a newer one
//! was started (or after [`PriceService::cancel`]) is discarded.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, info, warn};
use tokenswap_market_data::PriceFeed;

use super::PriceRegistry;
use crate::sequence::Sequencer;

/// What happened to a refresh once its fetch completed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// A new registry was published.
    Published { tokens: usize },
    /// The fetch failed; the failure is now the service's fetch error.
    Failed { message: String },
    /// A newer refresh (or a cancel) superseded this one.
    Discarded,
}

#[derive(Debug)]
struct PriceState {
    registry: Arc<PriceRegistry>,
    loading: bool,
    fetch_error: Option<String>,
}

/// Single writer of the shared price registry.
#[derive(Debug)]
pub struct PriceService {
    sequencer: Sequencer,
    state: RwLock<PriceState>,
}

impl Default for PriceService {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceService {
    /// A service awaiting its first fetch: empty registry, loading.
    pub fn new() -> Self {
        Self {
            sequencer: Sequencer::new(),
            state: RwLock::new(PriceState {
                registry: Arc::new(PriceRegistry::default()),
                loading: true,
                fetch_error: None,
            }),
        }
    }

    /// A service that already holds a registry.
    pub fn with_registry(registry: PriceRegistry) -> Self {
        Self {
            sequencer: Sequencer::new(),
            state: RwLock::new(PriceState {
                registry: Arc::new(registry),
                loading: false,
                fetch_error: None,
            }),
        }
    }

    fn read_state(&self) -> RwLockReadGuard<'_, PriceState> {
        self.state.read().unwrap_or_else(|poisoned| {
            warn!("Price state lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, PriceState> {
        self.state.write().unwrap_or_else(|poisoned| {
            warn!("Price state lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Current registry snapshot.
    pub fn registry(&self) -> Arc<PriceRegistry> {
        Arc::clone(&self.read_state().registry)
    }

    pub fn loading(&self) -> bool {
        self.read_state().loading
    }

    /// Message of the last failed fetch, cleared by the next successful one.
    pub fn fetch_error(&self) -> Option<String> {
        self.read_state().fetch_error.clone()
    }

    /// Fetch observations from `feed` and publish a new registry.
    ///
    /// There is no automatic retry. On failure no registry is published and
    /// the error message is kept until a later refresh succeeds.
    pub async fn refresh(&self, feed: &dyn PriceFeed) -> RefreshOutcome {
        let generation = self.sequencer.issue();
        self.write_state().loading = true;
        debug!("Refreshing prices from '{}' ({})", feed.id(), generation);

        let result = feed.fetch_observations().await;

        let mut state = self.write_state();
        if !self.sequencer.is_current(generation) {
            debug!(
                "Discarding price fetch {} from '{}': superseded by {}",
                generation,
                feed.id(),
                self.sequencer.latest()
            );
            return RefreshOutcome::Discarded;
        }

        state.loading = false;
        match result {
            Ok(observations) => {
                let registry = PriceRegistry::ingest(observations);
                let tokens = registry.len();
                state.registry = Arc::new(registry);
                state.fetch_error = None;
                info!("Published {} token prices from '{}'", tokens, feed.id());
                RefreshOutcome::Published { tokens }
            }
            Err(e) => {
                let message = e.to_string();
                warn!("Price fetch from '{}' failed: {}", feed.id(), message);
                state.fetch_error = Some(message.clone());
                RefreshOutcome::Failed { message }
            }
        }
    }

    /// Discard any outstanding fetch, e.g. when the consumer is torn down.
    pub fn cancel(&self) {
        self.sequencer.invalidate();
        self.write_state().loading = false;
    }
}
