//! INA226 current/power monitor driver (I2C).
//!
//! Runs the part in triggered shunt-only mode: every reading writes the
//! configuration register (which starts one conversion), polls the
//! conversion-ready flag, then reads the signed shunt register and scales
//! it to amperes. Averaging is disabled and the shunt conversion time is
//! the longest available (8.244 ms) for the lowest noise per sample; the
//! window median does the rest.
//!
//! Generic over `embedded-hal` 1.0 `I2c` and `DelayNs`, so the same driver
//! runs on the ESP-IDF I2C master and on host test doubles.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::error::SensorError;

// ── Registers ─────────────────────────────────────────────────

pub const REG_CONFIG: u8 = 0x00;
pub const REG_SHUNT_VOLTAGE: u8 = 0x01;
pub const REG_MASK_ENABLE: u8 = 0x06;

/// Conversion Ready Flag in the Mask/Enable register. Cleared on read.
pub const CVRF: u16 = 1 << 3;

// ── Configuration fields ──────────────────────────────────────

const CONFIG_FIXED: u16 = 0b100 << 12;
const AVG_1: u16 = 0b000 << 9;
const VBUSCT_1100_US: u16 = 0b100 << 6;
const VSHCT_8244_US: u16 = 0b111 << 3;
const MODE_SHUNT_TRIGGERED: u16 = 0b001;

/// Configuration word that also triggers one shunt conversion.
pub const TRIGGER_CONFIG: u16 =
    CONFIG_FIXED | AVG_1 | VBUSCT_1100_US | VSHCT_8244_US | MODE_SHUNT_TRIGGERED;

/// Poll period while waiting for a conversion.
const POLL_INTERVAL_MS: u32 = 1;

pub struct Ina226<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
    /// Milliamperes per shunt-register LSB (shunt, amplifier and ADC gain folded together).
    lsb_ma: f32,
    timeout_ms: u32,
}

impl<I2C, D> Ina226<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    pub fn new(i2c: I2C, delay: D, address: u8, lsb_ma: f32, timeout_ms: u32) -> Self {
        Self {
            i2c,
            delay,
            address,
            lsb_ma,
            timeout_ms,
        }
    }

    /// Start one conversion.
    pub fn trigger(&mut self) -> Result<(), SensorError> {
        self.write_register(REG_CONFIG, TRIGGER_CONFIG)
    }

    /// Trigger, wait for the conversion, and return the current in amperes.
    pub fn read_current(&mut self) -> Result<f32, SensorError> {
        self.trigger()?;
        self.wait_conversion()?;
        let raw = self.read_register(REG_SHUNT_VOLTAGE)? as i16;
        Ok(raw as f32 * self.lsb_ma / 1000.0)
    }

    fn wait_conversion(&mut self) -> Result<(), SensorError> {
        let mut waited_ms = 0;
        loop {
            if self.read_register(REG_MASK_ENABLE)? & CVRF != 0 {
                return Ok(());
            }
            if waited_ms >= self.timeout_ms {
                return Err(SensorError::ConversionTimeout);
            }
            self.delay.delay_ms(POLL_INTERVAL_MS);
            waited_ms += POLL_INTERVAL_MS;
        }
    }

    fn write_register(&mut self, reg: u8, value: u16) -> Result<(), SensorError> {
        let [hi, lo] = value.to_be_bytes();
        self.i2c
            .write(self.address, &[reg, hi, lo])
            .map_err(|_| SensorError::Bus)
    }

    fn read_register(&mut self, reg: u8) -> Result<u16, SensorError> {
        let mut buf = [0u8; 2];
        self.i2c
            .write_read(self.address, &[reg], &mut buf)
            .map_err(|_| SensorError::Bus)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Hand the bus and delay back (e.g. to rescan the bus).
    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }
}
