//! otad-metrics - Update-attempt metrics reporting
//!
//! Reporting boundary between the otad update agent's attempt lifecycle
//! and the metrics backend. The update driver constructs value records
//! from its own state and calls the reporting surface; this crate
//! classifies, validates, and hands structured events to a sink. It is
//! best-effort telemetry throughout: no reporting failure is ever
//! allowed to stall or fault the update pipeline.
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `taxonomy` - Closed enumerant sets for every classification field
//! - `records` - Caller-owned attempt/download/campaign value records
//! - `validation` - Log-and-drop input checks at the call boundary
//! - `events` - Metric event kinds and the emission envelope
//! - `sink` - Sink boundary, bounded handoff queue, best-effort emitter
//! - `reporter` - The reporting interface, its implementations, and the
//!   process-wide selection
//! - `logging` - Structured logging with reporter context

pub mod events;
pub mod logging;
pub mod records;
pub mod reporter;
pub mod sink;
pub mod taxonomy;
pub mod validation;

pub use events::{EventEnvelope, MetricEvent};
pub use records::{
    download_overhead_percentage, download_speed_bps, AttemptRecord, CampaignSummary,
    DownloadRecord, SourceByteCounts,
};
pub use reporter::{
    install_reporter, reporter, InstallContext, MetricsReporter, NoopMetricsReporter,
    UpdateMetricsReporter,
};
pub use sink::{BufferedSink, Emitter, MetricsSink, NullSink};
pub use validation::{validate_attempt, validate_download, validate_summary, RecordError};
