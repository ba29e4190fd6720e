//! Signal-to-colour pipeline: pure logic, zero I/O.
//!
//! ```text
//!   Reading ──▶ OversamplingFilter ──▶ median ──▶ Classifier ──▶ Rgb
//!                                                                 │
//!                         committed Rgb ◀── Stabilizer ◀──────────┘
//! ```
//!
//! Nothing here touches hardware or time; the orchestrator in
//! [`crate::app::service`] drives these stages through port traits.

pub mod classifier;
pub mod filter;
pub mod stabilizer;
pub mod window;

use core::fmt;

use serde::{Deserialize, Serialize};

/// A status-LED colour: three 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// LED dark. The stabilizer starts here.
    pub const OFF: Self = Self::new(0, 0, 0);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Right-aligned channel triple, e.g. `255,   0,   0`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:3}, {:3}, {:3}", self.r, self.g, self.b)
    }
}
