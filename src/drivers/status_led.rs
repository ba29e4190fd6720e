//! RGB status pixel driver (single WS2812 / NeoPixel).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: clocks a 24-bit GRB frame out of an RMT TX channel.
//! On host/test: tracks state in-memory only.

#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::rmt::{FixedLengthSignal, PinState, Pulse, TxRmtDriver};

use crate::error::DisplayError;
use crate::pipeline::Rgb;

/// WS2812 bit timings (ns): (T0H, T0L, T1H, T1L).
#[cfg(target_os = "espidf")]
const WS2812_TIMINGS_NS: (u64, u64, u64, u64) = (350, 800, 700, 600);

/// Pack a colour into the 24-bit word the pixel expects, green first.
pub fn grb_word(color: Rgb) -> u32 {
    (u32::from(color.g) << 16) | (u32::from(color.r) << 8) | u32::from(color.b)
}

pub struct StatusLed {
    #[cfg(target_os = "espidf")]
    tx: TxRmtDriver<'static>,
    current: Rgb,
}

impl StatusLed {
    #[cfg(target_os = "espidf")]
    pub fn new(tx: TxRmtDriver<'static>) -> Self {
        Self {
            tx,
            current: Rgb::OFF,
        }
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn new() -> Self {
        Self { current: Rgb::OFF }
    }

    pub fn set_colour(&mut self, color: Rgb) -> Result<(), DisplayError> {
        self.transmit(grb_word(color))?;
        self.current = color;
        Ok(())
    }

    pub fn off(&mut self) -> Result<(), DisplayError> {
        self.set_colour(Rgb::OFF)
    }

    pub fn current_colour(&self) -> Rgb {
        self.current
    }

    #[cfg(target_os = "espidf")]
    fn transmit(&mut self, word: u32) -> Result<(), DisplayError> {
        use core::time::Duration;

        let ticks_hz = self
            .tx
            .counter_clock()
            .map_err(|_| DisplayError::TransmitFailed)?;
        let pulse = |state, ns| {
            Pulse::new_with_duration(ticks_hz, state, &Duration::from_nanos(ns))
                .map_err(|_| DisplayError::TransmitFailed)
        };
        let (t0h_ns, t0l_ns, t1h_ns, t1l_ns) = WS2812_TIMINGS_NS;
        let zero = (pulse(PinState::High, t0h_ns)?, pulse(PinState::Low, t0l_ns)?);
        let one = (pulse(PinState::High, t1h_ns)?, pulse(PinState::Low, t1l_ns)?);

        // MSB first.
        let mut signal = FixedLengthSignal::<24>::new();
        for i in 0..24 {
            let bit = word & (1 << (23 - i)) != 0;
            signal
                .set(i, if bit { &one } else { &zero })
                .map_err(|_| DisplayError::TransmitFailed)?;
        }
        self.tx
            .start_blocking(&signal)
            .map_err(|_| DisplayError::TransmitFailed)
    }

    #[cfg(not(target_os = "espidf"))]
    fn transmit(&mut self, _word: u32) -> Result<(), DisplayError> {
        Ok(())
    }
}

#[cfg(not(target_os = "espidf"))]
impl Default for StatusLed {
    fn default() -> Self {
        Self::new()
    }
}
