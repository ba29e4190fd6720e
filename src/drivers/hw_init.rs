//! One-shot hardware peripheral initialization.
//!
//! Brings up the I2C master to the current monitor and the RMT channel
//! that drives the status pixel. Called once from `main()` before the
//! observer loop starts. The typed GPIOs used here must match [`crate::pins`].

#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::{
    gpio::{Output, PinDriver},
    i2c::{I2cConfig, I2cDriver},
    peripherals::Peripherals,
    prelude::*,
    rmt::{TxRmtDriver, config::TransmitConfig},
};

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    PeripheralsTaken,
    I2cInitFailed(i32),
    GpioConfigFailed(i32),
    RmtInitFailed(i32),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PeripheralsTaken    => write!(f, "peripherals already taken"),
            Self::I2cInitFailed(rc)   => write!(f, "I2C master init failed (rc={})", rc),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
            Self::RmtInitFailed(rc)   => write!(f, "RMT TX channel init failed (rc={})", rc),
        }
    }
}

impl std::error::Error for HwInitError {}

// ── Board bundle ──────────────────────────────────────────────

/// Peripherals owned by the observer for the life of the process.
#[cfg(target_os = "espidf")]
pub struct Board {
    pub i2c: I2cDriver<'static>,
    pub pixel_tx: TxRmtDriver<'static>,
    /// Held so the pixel's power rail stays enabled.
    pub pixel_power: PinDriver<'static, esp_idf_svc::hal::gpio::Gpio21, Output>,
}

#[cfg(target_os = "espidf")]
pub fn init_peripherals() -> Result<Board, HwInitError> {
    let p = Peripherals::take().map_err(|_| HwInitError::PeripheralsTaken)?;

    // I2C0: SDA=IO15, SCL=IO16.
    let i2c_cfg = I2cConfig::new().baudrate(pins::I2C_BAUDRATE_HZ.Hz());
    let i2c = I2cDriver::new(p.i2c0, p.pins.gpio15, p.pins.gpio16, &i2c_cfg)
        .map_err(|e| HwInitError::I2cInitFailed(e.code()))?;
    info!(
        "hw_init: I2C0 configured (SDA={}, SCL={}, {} Hz)",
        pins::I2C_SDA_GPIO,
        pins::I2C_SCL_GPIO,
        pins::I2C_BAUDRATE_HZ
    );

    // NeoPixel power rail: IO21.
    let mut pixel_power =
        PinDriver::output(p.pins.gpio21).map_err(|e| HwInitError::GpioConfigFailed(e.code()))?;
    pixel_power
        .set_high()
        .map_err(|e| HwInitError::GpioConfigFailed(e.code()))?;

    // RMT CH0 on the NeoPixel data line: IO33, 80 MHz tick.
    let tx_cfg = TransmitConfig::new().clock_divider(1);
    let pixel_tx = TxRmtDriver::new(p.rmt.channel0, p.pins.gpio33, &tx_cfg)
        .map_err(|e| HwInitError::RmtInitFailed(e.code()))?;
    info!(
        "hw_init: RMT CH0 configured (data={}, power={})",
        pins::NEOPIXEL_GPIO,
        pins::NEOPIXEL_POWER_GPIO
    );

    Ok(Board {
        i2c,
        pixel_tx,
        pixel_power,
    })
}
