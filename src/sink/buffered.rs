//! Bounded in-memory handoff queue.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

use crate::events::EventEnvelope;
use crate::sink::interface::MetricsSink;

const DEFAULT_CAPACITY: usize = 256;

/// Sink buffering events for an external transport to drain.
///
/// `submit` never blocks beyond a bounded queue push: when the buffer
/// is full the oldest event is discarded and counted, so the freshest
/// campaign outcome survives a stalled transport.
pub struct BufferedSink {
    queue: Mutex<VecDeque<EventEnvelope>>,
    capacity: usize,
    dropped: AtomicU64,
}

impl BufferedSink {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
            dropped: AtomicU64::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.queue.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().is_empty()
    }

    /// Events discarded to make room since construction.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Remove and return all queued events, oldest first.
    pub fn drain(&self) -> Vec<EventEnvelope> {
        self.queue.lock().drain(..).collect()
    }
}

impl Default for BufferedSink {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl MetricsSink for BufferedSink {
    fn submit(&self, envelope: EventEnvelope) -> bool {
        let mut queue = self.queue.lock();
        if queue.len() == self.capacity {
            queue.pop_front();
            self.dropped.fetch_add(1, Ordering::Relaxed);
        }
        queue.push_back(envelope);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::MetricEvent;

    fn event(minutes: i32) -> EventEnvelope {
        EventEnvelope::new(MetricEvent::TimeToReboot { minutes })
    }

    #[test]
    fn test_preserves_submission_order() {
        let sink = BufferedSink::new(8);
        sink.submit(event(1));
        sink.submit(event(2));
        sink.submit(event(3));

        let drained = sink.drain();
        assert_eq!(drained.len(), 3);
        assert_eq!(drained[0].event, MetricEvent::TimeToReboot { minutes: 1 });
        assert_eq!(drained[2].event, MetricEvent::TimeToReboot { minutes: 3 });
        assert!(sink.is_empty());
    }

    #[test]
    fn test_drops_oldest_when_full() {
        let sink = BufferedSink::new(2);
        sink.submit(event(1));
        sink.submit(event(2));
        sink.submit(event(3));

        assert_eq!(sink.dropped(), 1);
        let drained = sink.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].event, MetricEvent::TimeToReboot { minutes: 2 });
        assert_eq!(drained[1].event, MetricEvent::TimeToReboot { minutes: 3 });
    }

    #[test]
    fn test_submit_accepts_while_dropping() {
        // Acceptance is about the submitted event, which always lands.
        let sink = BufferedSink::new(1);
        assert!(sink.submit(event(1)));
        assert!(sink.submit(event(2)));
        assert_eq!(sink.len(), 1);
    }
}
