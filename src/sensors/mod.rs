//! Sensor subsystem: the current monitor driver and I2C bus helpers.

pub mod ina226;

use embedded_hal::i2c::I2c;
use heapless::Vec;

/// Maximum number of responders reported by [`scan_bus`].
pub const MAX_SCAN_RESULTS: usize = 16;

/// Probe every non-reserved 7-bit address with a one-byte read and return
/// the ones that ACK, in ascending order.
///
/// Boot-time diagnostics only: confirms the current monitor is strapped to
/// the configured address before the observer loop starts.
pub fn scan_bus<I: I2c>(i2c: &mut I) -> Vec<u8, MAX_SCAN_RESULTS> {
    let mut found = Vec::new();
    let mut buf = [0u8; 1];
    for address in 0x08..=0x77u8 {
        if i2c.read(address, &mut buf).is_ok() && found.push(address).is_err() {
            break;
        }
    }
    found
}
