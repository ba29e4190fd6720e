//! Observer configuration parameters.
//!
//! All tunables for the sampling window, debounce, current monitor and
//! classifier calibration. Compiled-in defaults; there is no config file.

use serde::{Deserialize, Serialize};

use crate::pins;
use crate::pipeline::classifier::ClassifierConfig;
use crate::pipeline::filter::MAX_WINDOW_SAMPLES;
use crate::pipeline::stabilizer::DEFAULT_CONFIRM_RUNS;
use crate::pipeline::window::WindowTiming;

/// Core observer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObserverConfig {
    // --- Sampling window ---
    /// Window duration (milliseconds)
    pub window_ms: u32,
    /// Target gap between readings (milliseconds)
    pub sample_interval_ms: u32,

    // --- Debounce ---
    /// Repeats needed before a new colour is committed
    pub confirm_runs: u8,

    // --- Current monitor ---
    /// Current register scale (mA per LSB)
    pub current_lsb_ma: f32,
    /// 7-bit I2C address
    pub sensor_address: u8,
    /// Maximum wait for a triggered conversion (milliseconds)
    pub conversion_timeout_ms: u32,

    // --- Supervision ---
    /// Task watchdog timeout (milliseconds)
    pub watchdog_timeout_ms: u32,

    // --- Diagnostics ---
    /// Debug-log mean/median/std of every window
    pub log_window_stats: bool,
    /// Log responding I2C addresses at boot
    pub scan_i2c_on_boot: bool,

    // --- Classifier ---
    pub classifier: ClassifierConfig,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            // Window: ~14 readings per 200 ms window
            window_ms: 200,
            sample_interval_ms: 15,

            // Debounce
            confirm_runs: DEFAULT_CONFIRM_RUNS,

            // Current monitor: 0.1 ohm shunt behind a x50 amplifier
            current_lsb_ma: 0.046_582,
            sensor_address: pins::CURRENT_MONITOR_ADDR,
            conversion_timeout_ms: 12,

            // Supervision
            watchdog_timeout_ms: 5_000,

            // Diagnostics
            log_window_stats: false,
            scan_i2c_on_boot: true,

            classifier: ClassifierConfig::default(),
        }
    }
}

impl ObserverConfig {
    /// Reject configurations the pipeline cannot run with.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.sample_interval_ms == 0 {
            return Err("sample_interval_ms must be > 0");
        }
        if self.window_ms == 0 {
            return Err("window_ms must be > 0");
        }
        if self.sample_interval_ms > self.window_ms {
            return Err("sample_interval_ms must not exceed window_ms");
        }
        // Every iteration but the last takes at least one interval.
        let worst_case = (self.window_ms / self.sample_interval_ms) as usize + 2;
        if worst_case > MAX_WINDOW_SAMPLES {
            return Err("window_ms / sample_interval_ms exceeds window sample capacity");
        }
        if self.confirm_runs == 0 {
            return Err("confirm_runs must be > 0");
        }
        if !(self.current_lsb_ma.is_finite() && self.current_lsb_ma > 0.0) {
            return Err("current_lsb_ma must be positive");
        }
        if self.sensor_address > 0x7F {
            return Err("sensor_address must be a 7-bit address");
        }
        if self.watchdog_timeout_ms <= self.window_ms {
            return Err("watchdog_timeout_ms must exceed window_ms");
        }
        self.classifier.validate()
    }

    pub fn window_timing(&self) -> WindowTiming {
        WindowTiming::from_millis(self.window_ms, self.sample_interval_ms)
    }
}
