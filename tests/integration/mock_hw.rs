//! Mock hardware, clock and sink for integration tests.
//!
//! The clock and the sensor share one simulated timeline: every reading
//! costs `latency_us` of simulated time and every sleep advances it by the
//! requested amount, so window timing can be asserted exactly without
//! touching real time.

use observer::app::events::AppEvent;
use observer::app::ports::{ClockPort, DisplayPort, EventSink, SamplePort, WatchdogPort};
use observer::error::{DisplayError, SensorError};
use observer::pipeline::Rgb;
use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

// ── Simulated timeline ────────────────────────────────────────

pub type Timeline = Rc<Cell<u64>>;

pub fn timeline() -> Timeline {
    Rc::new(Cell::new(0))
}

// ── SimClock ──────────────────────────────────────────────────

pub struct SimClock {
    now: Timeline,
    pub sleeps: Vec<u64>,
}

impl SimClock {
    pub fn new(now: Timeline) -> Self {
        Self {
            now,
            sleeps: Vec::new(),
        }
    }
}

impl ClockPort for SimClock {
    fn now_us(&self) -> u64 {
        self.now.get()
    }

    fn sleep_us(&mut self, us: u64) {
        self.sleeps.push(us);
        self.now.set(self.now.get() + us);
    }
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    now: Timeline,
    /// Simulated conversion time per reading.
    pub latency_us: u64,
    /// Reading returned when no scripted value is queued.
    pub current_a: f32,
    /// Scripted readings, consumed one per call before `current_a`.
    pub script: VecDeque<Result<f32, SensorError>>,
    pub reads: usize,
    pub shown: Vec<Rgb>,
    pub fail_display: bool,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new(now: Timeline, current_a: f32) -> Self {
        Self {
            now,
            latency_us: 1_000,
            current_a,
            script: VecDeque::new(),
            reads: 0,
            shown: Vec::new(),
            fail_display: false,
        }
    }

    pub fn with_latency(mut self, latency_us: u64) -> Self {
        self.latency_us = latency_us;
        self
    }

    pub fn queue(&mut self, reading: Result<f32, SensorError>) {
        self.script.push_back(reading);
    }

    pub fn last_shown(&self) -> Option<Rgb> {
        self.shown.last().copied()
    }
}

impl SamplePort for MockHardware {
    fn read_current(&mut self) -> Result<f32, SensorError> {
        self.reads += 1;
        self.now.set(self.now.get() + self.latency_us);
        self.script.pop_front().unwrap_or(Ok(self.current_a))
    }
}

impl DisplayPort for MockHardware {
    fn show(&mut self, color: Rgb) -> Result<(), DisplayError> {
        if self.fail_display {
            return Err(DisplayError::TransmitFailed);
        }
        self.shown.push(color);
        Ok(())
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Every committed colour, in order.
    pub fn commits(&self) -> Vec<Rgb> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::ColorCommitted { color, .. } => Some(*color),
                _ => None,
            })
            .collect()
    }

    pub fn windows(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::WindowClosed(_)))
            .count()
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}

// ── CountingWatchdog ─────────────────────────────────────────

#[derive(Default)]
pub struct CountingWatchdog {
    pub feeds: Cell<u32>,
}

impl WatchdogPort for CountingWatchdog {
    fn feed(&self) {
        self.feeds.set(self.feeds.get() + 1);
    }
}
