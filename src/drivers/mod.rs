//! Output drivers, hardware initialisation, and supervision.

pub mod hw_init;
pub mod status_led;
pub mod watchdog;
