//! Application core: the observer loop, zero I/O.
//!
//! The orchestrator in [`service`] drives the signal pipeline
//! ([`crate::pipeline`]) once per sampling window. All interaction with
//! hardware and time happens through the **port traits** in [`ports`],
//! keeping this layer fully testable with scripted readings and a
//! simulated clock.

pub mod events;
pub mod ports;
pub mod service;
