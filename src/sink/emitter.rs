//! Best-effort event emission.

use std::sync::Arc;

use crate::events::{EventEnvelope, MetricEvent};
use crate::logging::structured::ReportContext;
use crate::sink::interface::MetricsSink;

/// Hands classified events to the sink.
///
/// Holds no cross-call state: every emission is an independent wrap,
/// log, submit. A sink refusal is logged at debug and otherwise
/// invisible to the caller.
pub struct Emitter {
    sink: Arc<dyn MetricsSink>,
    ctx: ReportContext,
}

impl Emitter {
    pub fn new(sink: Arc<dyn MetricsSink>, ctx: ReportContext) -> Self {
        Self { sink, ctx }
    }

    /// Emit exactly one event. Never fails, never blocks on the sink.
    pub fn emit(&self, event: MetricEvent) {
        let name = event.name();
        let envelope = EventEnvelope::new(event);

        if log::log_enabled!(log::Level::Debug) {
            let payload =
                serde_json::to_value(&envelope).unwrap_or(serde_json::Value::Null);
            log::debug!("{} EVENT_EMIT name={} payload={}", self.ctx, name, payload);
        }

        if !self.sink.submit(envelope) {
            log::debug!("{} SINK_DROP name={}", self.ctx, name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::buffered::BufferedSink;
    use crate::sink::interface::NullSink;

    #[test]
    fn test_emit_forwards_to_sink() {
        let sink = Arc::new(BufferedSink::default());
        let emitter = Emitter::new(sink.clone(), ReportContext::new());

        emitter.emit(MetricEvent::TimeToReboot { minutes: 7 });

        let drained = sink.drain();
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].event, MetricEvent::TimeToReboot { minutes: 7 });
    }

    #[test]
    fn test_emit_survives_unavailable_sink() {
        let emitter = Emitter::new(Arc::new(NullSink::new()), ReportContext::new());
        // Nothing to assert beyond not panicking; the drop is silent.
        emitter.emit(MetricEvent::AbnormallyTerminatedUpdateAttempt);
    }
}
