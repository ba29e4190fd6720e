//! Observer service: the hexagonal core.
//!
//! [`ObserverService`] owns the in-progress sampling window and the
//! stabilization state, and drives one pass of the pipeline per window:
//!
//! ```text
//!  SamplePort ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                 │        ObserverService        │
//!   ClockPort ◀──▶│ Filter · Classifier · Debounce│
//!                 └──────────────────────────────┘ ──▶ DisplayPort
//! ```
//!
//! Windows are strictly sequential: window *n+1* does not start until the
//! median of window *n* has been classified.

use core::convert::Infallible;

use log::{info, warn};

use crate::config::ObserverConfig;
use crate::error::{Result, SensorError};
use crate::pipeline::Rgb;
use crate::pipeline::classifier::Classifier;
use crate::pipeline::filter::{OversamplingFilter, WindowStats};
use crate::pipeline::stabilizer::Stabilizer;
use crate::pipeline::window::WindowTiming;

use super::events::AppEvent;
use super::ports::{ClockPort, DisplayPort, EventSink, SamplePort, WatchdogPort};

// ───────────────────────────────────────────────────────────────
// ObserverService
// ───────────────────────────────────────────────────────────────

/// The observer loop and all of its mutable state.
pub struct ObserverService {
    timing: WindowTiming,
    filter: OversamplingFilter,
    classifier: Classifier,
    stabilizer: Stabilizer,
    window_count: u64,
    skipped_reads: u64,
}

impl ObserverService {
    /// Construct the service from a configuration that passed
    /// [`ObserverConfig::validate`].
    pub fn new(config: ObserverConfig) -> Self {
        debug_assert!(config.validate().is_ok());
        Self {
            timing: config.window_timing(),
            filter: OversamplingFilter::new(),
            classifier: Classifier::new(config.classifier),
            stabilizer: Stabilizer::new(config.confirm_runs),
            window_count: 0,
            skipped_reads: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Blank the LED so it agrees with the stabilizer's initial state.
    pub fn start(&mut self, hw: &mut impl DisplayPort, sink: &mut impl EventSink) -> Result<()> {
        let initial = self.stabilizer.committed();
        hw.show(initial)?;
        sink.emit(&AppEvent::Started(initial));
        info!("ObserverService started (LED {})", initial);
        Ok(())
    }

    /// Run windows back to back until a fatal error.
    pub fn run(
        &mut self,
        hw: &mut (impl SamplePort + DisplayPort),
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
        watchdog: &impl WatchdogPort,
    ) -> Result<Infallible> {
        loop {
            self.tick(hw, clock, sink)?;
            watchdog.feed();
        }
    }

    // ── Per-window orchestration ──────────────────────────────

    /// One full cycle: sample a window → classify its median → debounce →
    /// display on commit. Returns the newly committed colour, if any.
    ///
    /// The `hw` parameter satisfies **both** [`SamplePort`] and
    /// [`DisplayPort`], avoiding a double mutable borrow.
    pub fn tick(
        &mut self,
        hw: &mut (impl SamplePort + DisplayPort),
        clock: &mut impl ClockPort,
        sink: &mut impl EventSink,
    ) -> Result<Option<Rgb>> {
        let stats = self.sample_window(hw, clock)?;
        self.window_count += 1;
        sink.emit(&AppEvent::WindowClosed(stats));

        let color = self.classifier.predict(stats.median);
        let Some(committed) = self.stabilizer.update(color) else {
            return Ok(None);
        };

        hw.show(committed)?;
        sink.emit(&AppEvent::ColorCommitted {
            color: committed,
            current_a: stats.median,
        });
        Ok(Some(committed))
    }

    /// Accumulate readings until more than the window duration has elapsed,
    /// then reduce them to window statistics.
    ///
    /// Transient sensor failures cost one sample and are skipped. A window
    /// that ends with no readings at all is fatal.
    pub fn sample_window(
        &mut self,
        hw: &mut impl SamplePort,
        clock: &mut impl ClockPort,
    ) -> Result<WindowStats> {
        self.filter.reset();
        let opened = clock.now_us();

        loop {
            let iteration_start = clock.now_us();

            match hw.read_current() {
                Ok(reading) => self.filter.add_new_sample(reading)?,
                Err(e) if e.is_transient() => {
                    self.skipped_reads += 1;
                    warn!("Reading skipped: {}", e);
                }
                Err(e) => return Err(e.into()),
            }

            let now = clock.now_us();
            if self.timing.is_closed(now.saturating_sub(opened)) {
                break;
            }
            clock.sleep_us(self.timing.sleep_after(now.saturating_sub(iteration_start)));
        }

        if self.filter.is_empty() {
            return Err(SensorError::NoReadings.into());
        }
        let stats = self.filter.get_end_stats()?;
        self.filter.reset();
        Ok(stats)
    }

    // ── Queries ───────────────────────────────────────────────

    /// Colour currently shown on the LED.
    pub fn committed(&self) -> Rgb {
        self.stabilizer.committed()
    }

    /// Windows completed since startup.
    pub fn window_count(&self) -> u64 {
        self.window_count
    }

    /// Readings dropped to transient sensor failures since startup.
    pub fn skipped_reads(&self) -> u64 {
        self.skipped_reads
    }
}
