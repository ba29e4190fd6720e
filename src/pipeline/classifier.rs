//! Current-to-colour classifier.
//!
//! A threshold table over a single feature, the window median in amperes.
//! Bands are evaluated in increasing order of their upper bound; the first
//! band with `current < upper_a` wins, and anything at or above the last
//! bound falls into the unbounded `above` colour. The bands therefore
//! partition the whole real line into contiguous half-open intervals:
//!
//! ```text
//!   (-inf, b0) -> c0   [b0, b1) -> c1   ...   [bn, +inf) -> above
//! ```
//!
//! NaN compares false against every bound and lands in `above`.

use heapless::Vec;
use serde::{Deserialize, Serialize};

use super::Rgb;

/// Maximum number of bounded bands in a table.
pub const MAX_BANDS: usize = 8;

/// One bounded interval of the table: currents below `upper_a` (and at or
/// above the previous band's bound) map to `color`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub upper_a: f32,
    pub color: Rgb,
}

impl Band {
    pub const fn new(upper_a: f32, color: Rgb) -> Self {
        Self { upper_a, color }
    }
}

/// Classifier calibration data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub bands: Vec<Band, MAX_BANDS>,
    /// Colour for currents at or above the last bound.
    pub above: Rgb,
}

impl ClassifierConfig {
    /// Check the table partitions the real line into distinct colours: at
    /// least one bound, every bound finite and strictly increasing, and no
    /// colour used twice (including `above`).
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.bands.is_empty() {
            return Err("classifier: band table is empty");
        }
        if self.bands.iter().any(|b| !b.upper_a.is_finite()) {
            return Err("classifier: band bound must be finite");
        }
        if self
            .bands
            .windows(2)
            .any(|pair| pair[0].upper_a >= pair[1].upper_a)
        {
            return Err("classifier: band bounds must be strictly increasing");
        }
        let colours = || self.bands.iter().map(|b| b.color).chain([self.above]);
        if colours()
            .enumerate()
            .any(|(i, c)| colours().skip(i + 1).any(|other| other == c))
        {
            return Err("classifier: each band must select a distinct colour");
        }
        Ok(())
    }
}

impl Default for ClassifierConfig {
    /// Calibrated against the target board's LED-driven current envelope.
    /// Each band is one of the colours the target drives its own LED with.
    fn default() -> Self {
        let bands = [
            Band::new(0.0300, Rgb::OFF),
            Band::new(0.0520, Rgb::BLUE),
            Band::new(0.0700, Rgb::GREEN),
            Band::new(0.1050, Rgb::RED),
        ]
        .into_iter()
        .collect();
        Self {
            bands,
            above: Rgb::WHITE,
        }
    }
}

/// Stateless threshold classifier.
#[derive(Debug, Clone)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    /// Build from a table that has already passed [`ClassifierConfig::validate`].
    pub fn new(config: ClassifierConfig) -> Self {
        debug_assert!(config.validate().is_ok());
        Self { config }
    }

    /// Map a current (amperes) to a colour. Total over every `f32`.
    pub fn predict(&self, current: f32) -> Rgb {
        self.config
            .bands
            .iter()
            .find(|band| current < band.upper_a)
            .map_or(self.config.above, |band| band.color)
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}
