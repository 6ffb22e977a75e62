//! Swap events module.
//!
//! Provides the events emitted by the swap form and the sink trait they are
//! emitted through. Presentation layers implement the sink to confirm,
//! display or forward submissions.

mod sink;
mod swap_event;

pub use sink::*;
pub use swap_event::*;
