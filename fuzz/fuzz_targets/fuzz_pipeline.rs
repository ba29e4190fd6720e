//! Fuzz target: classifier + stabilizer
//!
//! Drives arbitrary currents through the default classifier and the
//! debounce state machine and asserts that every input classifies, that a
//! commit is always a change, and that nothing is committed without enough
//! agreeing classifications in a row.
//!
//! cargo fuzz run fuzz_pipeline

#![no_main]

use libfuzzer_sys::fuzz_target;
use observer::pipeline::classifier::Classifier;
use observer::pipeline::stabilizer::{DEFAULT_CONFIRM_RUNS, Stabilizer};

fuzz_target!(|data: &[u8]| {
    let clf = Classifier::default();
    let mut stab = Stabilizer::default();
    let mut streak = 0usize;
    let mut last = None;

    for chunk in data.chunks_exact(4) {
        let current = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let color = clf.predict(current);

        streak = if last == Some(color) { streak + 1 } else { 1 };
        last = Some(color);

        let before = stab.committed();
        if let Some(committed) = stab.update(color) {
            assert_ne!(committed, before, "commit must change the LED");
            assert_eq!(committed, color);
            assert!(streak > DEFAULT_CONFIRM_RUNS as usize);
        }
    }
});
