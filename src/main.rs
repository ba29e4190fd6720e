//! Observer firmware: main entry point.
//!
//! Hexagonal architecture around a single, ever-running observer loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Adapters (outer ring)                    │
//! │                                                              │
//! │  HardwareAdapter        Esp32TimeAdapter    LogEventSink     │
//! │  (Sample+Display)       (ClockPort)         (EventSink)      │
//! │  Watchdog (WatchdogPort)                                     │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ───────────────────     │
//! │                                                              │
//! │  ┌──────────────────────────────────────────────────────┐    │
//! │  │           ObserverService (pure logic)               │    │
//! │  │   OversamplingFilter · Classifier · Stabilizer       │    │
//! │  └──────────────────────────────────────────────────────┘    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_svc::hal::delay::FreeRtos;
use log::{error, info, warn};

use observer::adapters::hardware::HardwareAdapter;
use observer::adapters::log_sink::LogEventSink;
use observer::adapters::time::Esp32TimeAdapter;
use observer::app::service::ObserverService;
use observer::config::ObserverConfig;
use observer::drivers::hw_init::{self, Board};
use observer::drivers::status_led::StatusLed;
use observer::drivers::watchdog::Watchdog;
use observer::error::Error;
use observer::sensors::{self, ina226::Ina226};

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  Observer v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = ObserverConfig::default();
    config.validate().map_err(Error::Config)?;
    info!("Config: {}", serde_json::to_string(&config)?);

    // ── 3. Peripherals ────────────────────────────────────────
    let Board {
        mut i2c,
        pixel_tx,
        pixel_power: _pixel_power,
    } = hw_init::init_peripherals()?;

    if config.scan_i2c_on_boot {
        let found = sensors::scan_bus(&mut i2c);
        info!("I2C devices found: {:02x?}", found.as_slice());
        if !found.contains(&config.sensor_address) {
            warn!(
                "Current monitor not found at 0x{:02x}; readings will fail",
                config.sensor_address
            );
        }
    }

    // ── 4. Construct adapters ─────────────────────────────────
    let monitor = Ina226::new(
        i2c,
        FreeRtos,
        config.sensor_address,
        config.current_lsb_ma,
        config.conversion_timeout_ms,
    );
    let mut hw = HardwareAdapter::new(monitor, StatusLed::new(pixel_tx));
    let mut clock = Esp32TimeAdapter::new();
    let mut log_sink = LogEventSink::new(config.log_window_stats);
    let watchdog = Watchdog::new(config.watchdog_timeout_ms);

    // ── 5. Observer service ───────────────────────────────────
    let mut service = ObserverService::new(config);
    service.start(&mut hw, &mut log_sink)?;

    info!("System ready. Entering observer loop.");

    // ── 6. Observer loop (returns only on a fatal error) ──────
    match service.run(&mut hw, &mut clock, &mut log_sink, &watchdog) {
        Ok(never) => match never {},
        Err(e) => error!(
            "Fatal: {} after {} windows ({} skipped reads), restarting",
            e,
            service.window_count(),
            service.skipped_reads()
        ),
    }

    // Reset-to-recover.
    // SAFETY: esp_restart has no preconditions; it never returns.
    unsafe { esp_idf_svc::sys::esp_restart() };
    #[allow(unreachable_code)]
    Ok(())
}
