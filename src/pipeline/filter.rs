//! Oversampling filter.
//!
//! Accumulates every reading taken inside one sampling window and reduces
//! them to a single representative value. Outlier rejection comes entirely
//! from using the median downstream; no smoothing is applied across windows.
//!
//! The buffer is a fixed-capacity `heapless::Vec` so a window never
//! allocates. [`ObserverConfig::validate`](crate::config::ObserverConfig::validate)
//! rejects timings that could overflow it.

use heapless::Vec;

use crate::error::FilterError;

/// Upper bound on readings per window.
pub const MAX_WINDOW_SAMPLES: usize = 64;

/// Statistics over one closed window.
///
/// Only `median` feeds the classifier; `mean` and `std_dev` are diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowStats {
    pub mean: f32,
    pub median: f32,
    /// Population standard deviation.
    pub std_dev: f32,
    pub count: usize,
}

/// In-progress sampling window.
#[derive(Debug, Clone, Default)]
pub struct OversamplingFilter {
    samples: Vec<f32, MAX_WINDOW_SAMPLES>,
}

impl OversamplingFilter {
    pub fn new() -> Self {
        Self { samples: Vec::new() }
    }

    /// Append a reading. Any value is accepted, including zero, negative and NaN.
    pub fn add_new_sample(&mut self, reading: f32) -> Result<(), FilterError> {
        self.samples
            .push(reading)
            .map_err(|_| FilterError::WindowFull)
    }

    /// Statistics over everything accumulated since construction or the last [`reset`](Self::reset).
    ///
    /// The caller resets the filter before the next window.
    pub fn get_end_stats(&self) -> Result<WindowStats, FilterError> {
        let count = self.samples.len();
        if count == 0 {
            return Err(FilterError::EmptyWindow);
        }
        let n = count as f32;

        let mean = self.samples.iter().sum::<f32>() / n;
        let variance = self
            .samples
            .iter()
            .map(|x| {
                let d = x - mean;
                d * d
            })
            .sum::<f32>()
            / n;

        Ok(WindowStats {
            mean,
            median: median(&self.samples),
            std_dev: variance.sqrt(),
            count,
        })
    }

    /// Discard the window.
    pub fn reset(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Order-statistic median of a non-empty window.
///
/// Odd count: the middle element after sorting. Even count: the midpoint of
/// the two middle elements, computed without overflowing near `f32::MAX`.
/// Sorting uses IEEE total order, so a NaN sorts by its sign bit: positive
/// NaNs above `+inf`, negative NaNs below `-inf`.
fn median(values: &Vec<f32, MAX_WINDOW_SAMPLES>) -> f32 {
    let mut sorted = values.clone();
    sorted.sort_unstable_by(f32::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid]
    } else {
        sorted[mid - 1].midpoint(sorted[mid])
    }
}
