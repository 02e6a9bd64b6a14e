//! Metrics sink boundary.
//!
//! Delivery of classified events to the metrics backend. The sink owns
//! transport, batching, and persistence; this crate only hands events
//! over, bounded and non-blocking, and treats refusal as a silent drop.

pub mod buffered;
pub mod emitter;
pub mod interface;

pub use buffered::*;
pub use emitter::*;
pub use interface::*;
