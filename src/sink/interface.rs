//! Sink capability interface.

use crate::events::EventEnvelope;

/// Accepts classified metric events for delivery to the backend.
///
/// Implementations must return without unbounded blocking: update
/// progress is never allowed to stall on telemetry. Returning `false`
/// means the event was not accepted; callers drop it silently and never
/// retry.
pub trait MetricsSink: Send + Sync {
    fn submit(&self, envelope: EventEnvelope) -> bool;
}

/// Sink for environments without a metrics backend.
///
/// Discards every event and reports it as dropped. Wiring this sink is
/// the explicit, documented way to run without telemetry; the reporting
/// call sites stay identical.
#[derive(Debug, Default)]
pub struct NullSink;

impl NullSink {
    pub fn new() -> Self {
        Self
    }
}

impl MetricsSink for NullSink {
    fn submit(&self, _envelope: EventEnvelope) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::MetricEvent;

    #[test]
    fn test_null_sink_drops_everything() {
        let sink = NullSink::new();
        assert!(!sink.submit(EventEnvelope::new(
            MetricEvent::AbnormallyTerminatedUpdateAttempt
        )));
    }
}
