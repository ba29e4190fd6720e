//! Port traits: the hexagonal boundary between the observer loop and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ ObserverService (domain)
//! ```
//!
//! Driven adapters (current monitor, status pixel, clock, log sink,
//! watchdog) implement these traits. The
//! [`ObserverService`](super::service::ObserverService) consumes them via
//! generics, so the domain core never touches hardware directly.

use crate::error::{DisplayError, SensorError};
use crate::pipeline::Rgb;

// ───────────────────────────────────────────────────────────────
// Sample port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Sample source: one instantaneous current reading per call.
pub trait SamplePort {
    /// Trigger a conversion and return the target's current draw in amperes.
    ///
    /// Blocks for the conversion, which is expected to finish well inside one
    /// sample interval. Failures are reported, not retried.
    fn read_current(&mut self) -> Result<f32, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Status LED. Idempotent; no acknowledgment beyond the transmit result.
pub trait DisplayPort {
    fn show(&mut self, color: Rgb) -> Result<(), DisplayError>;
}

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: domain ↔ time)
// ───────────────────────────────────────────────────────────────

/// Monotonic time plus the loop's only suspension point.
pub trait ClockPort {
    /// Microseconds since an arbitrary fixed origin. Never decreases.
    fn now_us(&self) -> u64;

    /// Block the calling thread for at least `us` microseconds.
    fn sleep_us(&mut self, us: u64);
}

// ───────────────────────────────────────────────────────────────
// Watchdog port
// ───────────────────────────────────────────────────────────────

/// Liveness supervision, fed once per window.
pub trait WatchdogPort {
    fn feed(&self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
