//! Fuzz target: `OversamplingFilter`
//!
//! Feeds arbitrary f32 bit patterns (NaN, infinities, subnormals included)
//! into one window and asserts that statistics never panic and that
//! overflow is reported rather than silently dropped.
//!
//! cargo fuzz run fuzz_window_stats

#![no_main]

use libfuzzer_sys::fuzz_target;
use observer::error::FilterError;
use observer::pipeline::filter::{MAX_WINDOW_SAMPLES, OversamplingFilter};

fuzz_target!(|data: &[u8]| {
    let mut filter = OversamplingFilter::new();
    let mut accepted = 0usize;

    for chunk in data.chunks_exact(4) {
        let reading = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        match filter.add_new_sample(reading) {
            Ok(()) => accepted += 1,
            Err(e) => {
                assert_eq!(e, FilterError::WindowFull);
                assert_eq!(accepted, MAX_WINDOW_SAMPLES);
            }
        }
    }

    match filter.get_end_stats() {
        Ok(stats) => assert_eq!(stats.count, accepted),
        Err(e) => {
            assert_eq!(e, FilterError::EmptyWindow);
            assert_eq!(accepted, 0);
        }
    }

    // After a reset the filter must accept samples cleanly again.
    filter.reset();
    assert!(filter.add_new_sample(0.0).is_ok());
});
