//! Debounce for classifier output.
//!
//! Moore machine over `(committed, candidate, run)`. A new classification
//! that differs from the candidate replaces it and restarts the run at 0;
//! a matching one bumps the run, saturating at `confirm_runs`. Once the run
//! reaches `confirm_runs` and the candidate differs from what is displayed,
//! the candidate is committed.
//!
//! The run counts *repeats*, so a candidate needs `confirm_runs + 1`
//! consecutive identical classifications (three with the default of 2)
//! before it reaches the LED.

use super::Rgb;

/// Default confirmation run length.
pub const DEFAULT_CONFIRM_RUNS: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stabilizer {
    committed: Rgb,
    candidate: Rgb,
    run: u8,
    confirm_runs: u8,
}

impl Stabilizer {
    /// Start dark with an empty run.
    pub fn new(confirm_runs: u8) -> Self {
        Self {
            committed: Rgb::OFF,
            candidate: Rgb::OFF,
            run: 0,
            confirm_runs,
        }
    }

    /// Feed one classification. Returns the colour to display when this
    /// classification commits a change, `None` otherwise.
    pub fn update(&mut self, color: Rgb) -> Option<Rgb> {
        if color == self.candidate {
            if self.run < self.confirm_runs {
                self.run += 1;
            }
        } else {
            self.candidate = color;
            self.run = 0;
        }

        if self.is_confirmed() && self.committed != self.candidate {
            self.committed = self.candidate;
            return Some(self.committed);
        }
        None
    }

    fn is_confirmed(&self) -> bool {
        self.run >= self.confirm_runs
    }

    /// Colour currently on the LED.
    pub fn committed(&self) -> Rgb {
        self.committed
    }

    /// Most recent classification.
    pub fn candidate(&self) -> Rgb {
        self.candidate
    }

    pub fn run(&self) -> u8 {
        self.run
    }
}

impl Default for Stabilizer {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIRM_RUNS)
    }
}
