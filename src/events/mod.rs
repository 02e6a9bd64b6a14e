//! Metric event kinds.
//!
//! The named-events-with-typed-fields wire contract handed to the
//! metrics sink: one `MetricEvent` variant per reporting operation,
//! wrapped in an `EventEnvelope` that stamps the emission time.

pub mod event;

pub use event::*;
