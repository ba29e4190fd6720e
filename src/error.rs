//! Unified error types for the observer firmware.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! top-level control loop's error handling uniform. All variants are `Copy`
//! so they pass through the pipeline without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The current monitor could not produce a reading.
    Sensor(SensorError),
    /// Window statistics could not be computed.
    Filter(FilterError),
    /// The status pixel could not be written.
    Display(DisplayError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Filter(e) => write!(f, "filter: {e}"),
            Self::Display(e) => write!(f, "display: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// I2C transaction failed (NACK, arbitration loss, bus fault).
    Bus,
    /// The conversion-ready flag never rose within the timeout.
    ConversionTimeout,
    /// A whole window elapsed without a single successful reading.
    NoReadings,
}

impl SensorError {
    /// Transient failures cost one sample; the window keeps accumulating.
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::Bus | Self::ConversionTimeout)
    }
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus => write!(f, "I2C transaction failed"),
            Self::ConversionTimeout => write!(f, "conversion not ready in time"),
            Self::NoReadings => write!(f, "window closed with no readings"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Filter errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    /// Statistics requested over zero readings.
    EmptyWindow,
    /// The fixed-capacity window buffer is full.
    WindowFull,
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWindow => write!(f, "statistics requested over an empty window"),
            Self::WindowFull => write!(f, "window sample buffer full"),
        }
    }
}

impl From<FilterError> for Error {
    fn from(e: FilterError) -> Self {
        Self::Filter(e)
    }
}

// ---------------------------------------------------------------------------
// Display errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// The RMT peripheral rejected the pixel frame.
    TransmitFailed,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TransmitFailed => write!(f, "pixel transmit failed"),
        }
    }
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Self::Display(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
