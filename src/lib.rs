//! Power-signature observer firmware library.
//!
//! Watches the current drawn by a target board and shows, on one status
//! pixel, a colour that stands for what the target is doing. Exposes the
//! pure-logic modules for integration testing. All ESP-IDF-specific code is
//! guarded by `#[cfg(target_os = "espidf")]` within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod pins;
pub mod pipeline;

pub mod adapters;
pub mod drivers;
pub mod sensors;
