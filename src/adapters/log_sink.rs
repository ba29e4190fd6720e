//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the `log`
//! facade (UART / USB-CDC via the ESP-IDF logger in production).

use core::fmt;

use log::{Level, log};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::pipeline::Rgb;
use crate::pipeline::filter::WindowStats;

/// One rendered log line. Formats lazily, so nothing is allocated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventLine {
    Started(Rgb),
    Window(WindowStats),
    /// `"r, g, b - current"`, channels padded to three, current to six decimals.
    Commit { color: Rgb, current_a: f32 },
}

impl EventLine {
    pub fn level(&self) -> Level {
        match self {
            Self::Window(_) => Level::Debug,
            Self::Started(_) | Self::Commit { .. } => Level::Info,
        }
    }
}

impl fmt::Display for EventLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started(color) => write!(f, "START | led={color}"),
            Self::Window(stats) => write!(
                f,
                "WINDOW | n={} | mean={:.6} | median={:.6} | std={:.6}",
                stats.count, stats.mean, stats.median, stats.std_dev
            ),
            Self::Commit { color, current_a } => write!(f, "{color} - {current_a:.6}"),
        }
    }
}

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink {
    log_window_stats: bool,
}

impl LogEventSink {
    pub fn new(log_window_stats: bool) -> Self {
        Self { log_window_stats }
    }

    /// The line `event` is logged as, or `None` when it is filtered out.
    pub fn line(&self, event: &AppEvent) -> Option<EventLine> {
        match *event {
            AppEvent::Started(color) => Some(EventLine::Started(color)),
            AppEvent::WindowClosed(stats) => {
                self.log_window_stats.then_some(EventLine::Window(stats))
            }
            AppEvent::ColorCommitted { color, current_a } => {
                Some(EventLine::Commit { color, current_a })
            }
        }
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        if let Some(line) = self.line(event) {
            log!(line.level(), "{}", line);
        }
    }
}
