//! Sampling-window timing.
//!
//! A window closes by elapsed time, never by sample count. Between readings
//! the orchestrator sleeps for whatever is left of the cadence after the
//! reading itself.

/// Timing of one sampling window, in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowTiming {
    /// Window duration `W`.
    pub window_us: u64,
    /// Target gap between reading attempts `Δ`.
    pub interval_us: u64,
}

impl WindowTiming {
    pub const fn from_millis(window_ms: u32, interval_ms: u32) -> Self {
        Self {
            window_us: window_ms as u64 * 1_000,
            interval_us: interval_ms as u64 * 1_000,
        }
    }

    /// The window closes once strictly more than `W` has elapsed.
    pub fn is_closed(&self, elapsed_us: u64) -> bool {
        elapsed_us > self.window_us
    }

    /// Sleep before the next reading, given how long this iteration has
    /// already taken.
    ///
    /// When the iteration overran the cadence the sleep falls back to a full
    /// `Δ` rather than zero. A slow reading is therefore absorbed silently
    /// instead of being surfaced; see DESIGN.md before changing this.
    pub fn sleep_after(&self, spent_us: u64) -> u64 {
        match self.interval_us.checked_sub(spent_us) {
            Some(rest) => rest,
            None => self.interval_us,
        }
    }
}
