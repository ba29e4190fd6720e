//! GPIO / bus assignments for the observer board (ESP32-S3 feather).
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Current monitor (INA226 family, I2C)
// ---------------------------------------------------------------------------

/// I2C SDA line to the current monitor.
pub const I2C_SDA_GPIO: i32 = 15;
/// I2C SCL line to the current monitor.
pub const I2C_SCL_GPIO: i32 = 16;
/// I2C bus clock in Hz.
pub const I2C_BAUDRATE_HZ: u32 = 400_000;

/// Default 7-bit address of the current monitor (A0 = SDA, A1 = GND).
pub const CURRENT_MONITOR_ADDR: u8 = 0x44;

// ---------------------------------------------------------------------------
// Status pixel (WS2812)
// ---------------------------------------------------------------------------

/// Data line of the on-board NeoPixel.
pub const NEOPIXEL_GPIO: i32 = 33;
/// Power-enable line for the NeoPixel (active HIGH on the feather).
pub const NEOPIXEL_POWER_GPIO: i32 = 21;
