//! Hardware adapter: bridges real peripherals to domain port traits.
//!
//! Owns the current monitor and the status pixel, exposing them through
//! [`SamplePort`] and [`DisplayPort`]. This is the only module in the
//! system that touches the sensor bus or the LED.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::app::ports::{DisplayPort, SamplePort};
use crate::drivers::status_led::StatusLed;
use crate::error::{DisplayError, SensorError};
use crate::pipeline::Rgb;
use crate::sensors::ina226::Ina226;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<I2C, D> {
    monitor: Ina226<I2C, D>,
    led: StatusLed,
}

impl<I2C, D> HardwareAdapter<I2C, D> {
    pub fn new(monitor: Ina226<I2C, D>, led: StatusLed) -> Self {
        Self { monitor, led }
    }

    pub fn led(&self) -> &StatusLed {
        &self.led
    }
}

// ── SamplePort implementation ─────────────────────────────────

impl<I2C: I2c, D: DelayNs> SamplePort for HardwareAdapter<I2C, D> {
    fn read_current(&mut self) -> Result<f32, SensorError> {
        self.monitor.read_current()
    }
}

// ── DisplayPort implementation ────────────────────────────────

impl<I2C, D> DisplayPort for HardwareAdapter<I2C, D> {
    fn show(&mut self, color: Rgb) -> Result<(), DisplayError> {
        self.led.set_colour(color)
    }
}
