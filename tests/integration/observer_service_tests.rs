//! Integration tests for the ObserverService → pipeline → display chain.
//!
//! Each `tick` samples one full simulated window, so a per-window current
//! is set on the mock before every tick.

use crate::mock_hw::{CountingWatchdog, MockHardware, RecordingSink, SimClock, timeline};

use observer::app::events::AppEvent;
use observer::app::service::ObserverService;
use observer::config::ObserverConfig;
use observer::error::{DisplayError, Error, SensorError};
use observer::pipeline::Rgb;

// Default calibration: one representative current per band.
const IDLE_A: f32 = 0.010; // OFF
const GREEN_A: f32 = 0.060; // GREEN
const RED_A: f32 = 0.087; // RED

fn make_service() -> (ObserverService, MockHardware, SimClock, RecordingSink) {
    let now = timeline();
    let mut svc = ObserverService::new(ObserverConfig::default());
    let mut hw = MockHardware::new(now.clone(), IDLE_A);
    let clock = SimClock::new(now);
    let mut sink = RecordingSink::new();
    svc.start(&mut hw, &mut sink).unwrap();
    (svc, hw, clock, sink)
}

/// Run one window per entry, with the mock reading that entry's current.
fn run_windows(
    svc: &mut ObserverService,
    hw: &mut MockHardware,
    clock: &mut SimClock,
    sink: &mut RecordingSink,
    currents: &[f32],
) {
    for &amps in currents {
        hw.current_a = amps;
        svc.tick(hw, clock, sink).unwrap();
    }
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn start_blanks_led_and_announces() {
    let (svc, hw, _clock, sink) = make_service();
    assert_eq!(hw.shown, vec![Rgb::OFF]);
    assert_eq!(sink.events, vec![AppEvent::Started(Rgb::OFF)]);
    assert_eq!(svc.committed(), Rgb::OFF);
}

#[test]
fn idle_target_produces_no_commits() {
    let (mut svc, mut hw, mut clock, mut sink) = make_service();
    run_windows(&mut svc, &mut hw, &mut clock, &mut sink, &[IDLE_A; 5]);
    assert!(sink.commits().is_empty());
    assert_eq!(hw.shown, vec![Rgb::OFF], "only the startup blank");
    assert_eq!(sink.windows(), 5);
}

// ── Debounce through the full loop ────────────────────────────

#[test]
fn steady_current_commits_once_on_third_window() {
    let (mut svc, mut hw, mut clock, mut sink) = make_service();
    run_windows(&mut svc, &mut hw, &mut clock, &mut sink, &[GREEN_A; 2]);
    assert!(sink.commits().is_empty());

    run_windows(&mut svc, &mut hw, &mut clock, &mut sink, &[GREEN_A]);
    assert_eq!(sink.commits(), vec![Rgb::GREEN]);
    assert_eq!(hw.last_shown(), Some(Rgb::GREEN));
}

#[test]
fn commit_carries_triggering_median() {
    let (mut svc, mut hw, mut clock, mut sink) = make_service();
    run_windows(&mut svc, &mut hw, &mut clock, &mut sink, &[RED_A; 3]);
    let commit = sink
        .events
        .iter()
        .find_map(|e| match e {
            AppEvent::ColorCommitted { color, current_a } => Some((*color, *current_a)),
            _ => None,
        })
        .unwrap();
    assert_eq!(commit, (Rgb::RED, RED_A));
}

#[test]
fn one_window_flicker_never_reaches_led() {
    let (mut svc, mut hw, mut clock, mut sink) = make_service();
    run_windows(
        &mut svc,
        &mut hw,
        &mut clock,
        &mut sink,
        &[GREEN_A, RED_A, GREEN_A, GREEN_A, GREEN_A],
    );
    assert_eq!(sink.commits(), vec![Rgb::GREEN]);
    assert!(!hw.shown.contains(&Rgb::RED));
}

#[test]
fn sustained_change_commits_each_colour_once() {
    let (mut svc, mut hw, mut clock, mut sink) = make_service();
    run_windows(
        &mut svc,
        &mut hw,
        &mut clock,
        &mut sink,
        &[GREEN_A, GREEN_A, GREEN_A, RED_A, RED_A, RED_A],
    );
    assert_eq!(sink.commits(), vec![Rgb::GREEN, Rgb::RED]);
    assert_eq!(hw.shown, vec![Rgb::OFF, Rgb::GREEN, Rgb::RED]);
}

#[test]
fn repeated_committed_colour_makes_no_display_calls() {
    let (mut svc, mut hw, mut clock, mut sink) = make_service();
    run_windows(&mut svc, &mut hw, &mut clock, &mut sink, &[RED_A; 3]);
    let shown_before = hw.shown.len();

    run_windows(&mut svc, &mut hw, &mut clock, &mut sink, &[RED_A; 4]);
    assert_eq!(hw.shown.len(), shown_before);
    assert_eq!(sink.commits(), vec![Rgb::RED]);
}

// ── Filtering inside a window ─────────────────────────────────

#[test]
fn spikes_inside_a_window_are_rejected_by_median() {
    let (mut svc, mut hw, mut clock, mut sink) = make_service();
    for _ in 0..3 {
        // Two wild readings at the start of each ~15-reading window.
        hw.queue(Ok(0.500));
        hw.queue(Ok(-0.300));
        hw.current_a = GREEN_A;
        svc.tick(&mut hw, &mut clock, &mut sink).unwrap();
    }
    assert_eq!(sink.commits(), vec![Rgb::GREEN]);
}

#[test]
fn window_stats_are_reported_per_window() {
    let (mut svc, mut hw, mut clock, mut sink) = make_service();
    run_windows(&mut svc, &mut hw, &mut clock, &mut sink, &[GREEN_A]);
    let stats = sink
        .events
        .iter()
        .find_map(|e| match e {
            AppEvent::WindowClosed(s) => Some(*s),
            _ => None,
        })
        .unwrap();
    assert_eq!(stats.median, GREEN_A);
    assert_eq!(stats.count, hw.reads);
    assert!(stats.std_dev < 1e-6);
}

// ── Error handling ────────────────────────────────────────────

#[test]
fn transient_read_failures_are_skipped() {
    let (mut svc, mut hw, mut clock, _sink) = make_service();
    hw.queue(Err(SensorError::Bus));
    hw.queue(Err(SensorError::ConversionTimeout));
    hw.queue(Err(SensorError::Bus));
    hw.current_a = GREEN_A;

    let stats = svc.sample_window(&mut hw, &mut clock).unwrap();
    assert_eq!(svc.skipped_reads(), 3);
    assert_eq!(stats.count, hw.reads - 3);
    assert_eq!(stats.median, GREEN_A);
}

#[test]
fn window_without_any_reading_is_fatal() {
    let (mut svc, mut hw, mut clock, _sink) = make_service();
    for _ in 0..64 {
        hw.queue(Err(SensorError::Bus));
    }
    let err = svc.sample_window(&mut hw, &mut clock).unwrap_err();
    assert_eq!(err, Error::Sensor(SensorError::NoReadings));
}

#[test]
fn display_failure_on_commit_is_fatal() {
    let (mut svc, mut hw, mut clock, mut sink) = make_service();
    hw.fail_display = true;
    run_windows(&mut svc, &mut hw, &mut clock, &mut sink, &[RED_A; 2]);
    hw.current_a = RED_A;
    let err = svc.tick(&mut hw, &mut clock, &mut sink).unwrap_err();
    assert_eq!(err, Error::Display(DisplayError::TransmitFailed));
}

// ── Forever loop ──────────────────────────────────────────────

#[test]
fn run_feeds_watchdog_every_window_until_fatal_error() {
    let (mut svc, mut hw, mut clock, mut sink) = make_service();
    let watchdog = CountingWatchdog::default();
    hw.current_a = RED_A;
    hw.fail_display = true;

    // Windows 1 and 2 complete; window 3 commits and the display fails.
    let err = match svc.run(&mut hw, &mut clock, &mut sink, &watchdog) {
        Ok(never) => match never {},
        Err(e) => e,
    };
    assert_eq!(err, Error::Display(DisplayError::TransmitFailed));
    assert_eq!(watchdog.feeds.get(), 2);
    assert_eq!(svc.window_count(), 3);
}
