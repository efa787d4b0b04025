//! Result event stream.
//!
//! The core never stores results. Every pass/fail observation is converted
//! into a [`ResultEvent`] and handed to an [`EventSink`] the moment it is
//! known; ownership passes to the external reporter immediately. The uniform
//! failure contract means a failing unit (hook or test) always produces two
//! consecutive failing events: its display name, then the failure message.

use serde::Serialize;

/// One (name, passed) pair delivered to the external reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEvent {
    pub name: String,
    pub passed: bool,
}

impl ResultEvent {
    pub fn passed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
        }
    }

    pub fn failed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
        }
    }
}

/// Consumer of the ordered result stream. Implemented by reporters.
pub trait EventSink {
    fn emit(&mut self, event: ResultEvent);
}

/// A collecting sink that buffers events in order.
///
/// The simplest possible reporter; also what the crate's own tests observe.
#[derive(Debug, Default)]
pub struct EventBuffer {
    events: Vec<ResultEvent>,
}

impl EventBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[ResultEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<ResultEvent> {
        self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for EventBuffer {
    fn emit(&mut self, event: ResultEvent) {
        self.events.push(event);
    }
}

/// Pass/fail tally over an event stream, for end-of-run reporting.
///
/// Counts raw events as delivered. Failing units emit a name event and a
/// message event, so callers wanting per-unit counts should feed only the
/// first event of each unit.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn from_events(events: &[ResultEvent]) -> Self {
        let passed = events.iter().filter(|e| e.passed).count();
        Self {
            passed,
            failed: events.len() - passed,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    pub fn success_rate(&self) -> f64 {
        if self.total() == 0 {
            return 0.0;
        }
        (self.passed as f64 / self.total() as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_preserves_emission_order() {
        let mut buffer = EventBuffer::new();
        buffer.emit(ResultEvent::failed("my hook"));
        buffer.emit(ResultEvent::failed("BOOM!"));
        buffer.emit(ResultEvent::passed("my test suite my test"));

        let names: Vec<_> = buffer.events().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["my hook", "BOOM!", "my test suite my test"]);
    }

    #[test]
    fn summary_tallies_events() {
        let events = [
            ResultEvent::failed("my hook"),
            ResultEvent::failed("BOOM!"),
            ResultEvent::passed("my test suite my test"),
        ];
        let summary = RunSummary::from_events(&events);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 2);
        assert!(summary.has_failures());
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn empty_summary_has_zero_rate() {
        let summary = RunSummary::from_events(&[]);
        assert!(!summary.has_failures());
        assert_eq!(summary.success_rate(), 0.0);
    }
}
