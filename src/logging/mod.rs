//! Structured logging with reporter context.
//!
//! Every log line carries the reporter session id, and the attempt
//! number where one applies, so a campaign's reporting activity can be
//! correlated across process restarts.

pub mod structured;

pub use structured::*;

/// Initialize the process logger. Safe to call more than once; later
/// calls are no-ops.
pub fn init() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .try_init();
}
