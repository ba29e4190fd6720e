//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements             | Connects to                    |
//! |------------|------------------------|--------------------------------|
//! | `hardware` | SamplePort             | INA226 over I2C                |
//! |            | DisplayPort            | WS2812 status pixel over RMT   |
//! | `log_sink` | EventSink              | Serial log output              |
//! | `time`     | ClockPort              | ESP32 system timer + FreeRTOS  |

pub mod hardware;
pub mod log_sink;
pub mod time;
