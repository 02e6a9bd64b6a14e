//! Reporting-boundary input checks.
//!
//! Rejects malformed or out-of-range records before anything is
//! emitted. Rejection is diagnostics-only: callers log the reason and
//! drop the event, and no failure here ever surfaces to the update
//! pipeline.

pub mod rules;

pub use rules::*;
