//! Outbound application events.
//!
//! The [`ObserverService`](super::service::ObserverService) emits these
//! through the [`EventSink`](super::ports::EventSink) port. They are
//! diagnostics only; nothing in the firmware consumes them.

use crate::pipeline::Rgb;
use crate::pipeline::filter::WindowStats;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The service has started and blanked the LED.
    Started(Rgb),

    /// A sampling window closed.
    WindowClosed(WindowStats),

    /// The stabilizer committed a new colour to the LED.
    ColorCommitted {
        color: Rgb,
        /// Window median that produced the commit, in amperes.
        current_a: f32,
    },
}
