//! Per-run trace accumulator and the clock that stamps it.

use chrono::{DateTime, Duration, Utc};
use condensate_core::{TraceEvent, TraceStatus};
use std::fmt::Debug;
use std::sync::atomic::{AtomicI32, Ordering};

pub const LABEL_INIT: &str = "Initializing Memory Tiers...";
pub const LABEL_SCAN: &str = "Scanning for Named Entities & Tech Specs...";
pub const LABEL_SCORE: &str = "Calculating Semantic Weight...";
pub const LABEL_COMPRESSED: &str = "Delta compression complete";

/// Source of trace timestamps.
pub trait Clock: Send + Sync + Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Starts at a fixed instant and advances by `step` on every reading.
///
/// Meant for tests and reproducible demos; production callers use `SystemClock`.
#[derive(Debug)]
pub struct SteppingClock {
    start: DateTime<Utc>,
    step: Duration,
    ticks: AtomicI32,
}

impl SteppingClock {
    pub fn new(start: DateTime<Utc>, step_ms: i64) -> Self {
        Self {
            start,
            step: Duration::milliseconds(step_ms),
            ticks: AtomicI32::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Utc> {
        let n = self.ticks.fetch_add(1, Ordering::Relaxed);
        self.start + self.step * n
    }
}

/// Append-only event list for a single `condense` call.
#[derive(Debug)]
pub struct TraceLog<'c> {
    clock: &'c dyn Clock,
    events: Vec<TraceEvent>,
}

impl<'c> TraceLog<'c> {
    pub fn new(clock: &'c dyn Clock) -> Self {
        Self { clock, events: Vec::with_capacity(6) }
    }

    pub fn record(&mut self, label: impl Into<String>, status: TraceStatus) {
        let event = TraceEvent::new(label, self.clock.now(), status);
        tracing::trace!(label = %event.label, status = ?event.status, "trace event");
        self.events.push(event);
    }

    pub fn info(&mut self, label: impl Into<String>) {
        self.record(label, TraceStatus::Info);
    }

    pub fn success(&mut self, label: impl Into<String>) {
        self.record(label, TraceStatus::Success);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}
