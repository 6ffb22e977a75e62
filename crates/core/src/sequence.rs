//! Monotonic generations for discarding stale results.
//!
//! Every triggering change (an input edit, a price fetch) is issued a
//! [`Generation`]. When its result arrives, it may only be published if no
//! newer generation has been issued in the meantime.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one triggering change. Later changes compare greater.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues generations and answers whether one is still the latest.
#[derive(Debug, Default)]
pub struct Sequencer {
    latest: AtomicU64,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a generation newer than every one issued before.
    pub fn issue(&self) -> Generation {
        Generation(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// The most recently issued generation.
    pub fn latest(&self) -> Generation {
        Generation(self.latest.load(Ordering::SeqCst))
    }

    /// True if nothing newer than `generation` has been issued.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.latest.load(Ordering::SeqCst) == generation.0
    }

    /// Make every outstanding generation stale without issuing a new one
    /// to a caller. Used on teardown.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}
