//! The decision loop driven end to end through the host simulation board.

use silent_intrusion::adapters::sim::{ScenarioStep, sim_board};
use silent_intrusion::app::events::AppEvent;
use silent_intrusion::app::service::Monitor;
use silent_intrusion::config::MonitorConfig;
use silent_intrusion::protocol::{Detection, decode_stream};

use crate::mock_hw::RecordingSink;

fn step(beam_blocked: bool, sample: u16) -> ScenarioStep {
    ScenarioStep {
        beam_blocked,
        sample,
    }
}

#[test]
fn scenario_produces_expected_wire_bytes() {
    let mut monitor = Monitor::new(MonitorConfig::DEFAULT, sim_board()).unwrap();
    let mut sink = RecordingSink::default();

    for s in [step(false, 10), step(false, 31), step(true, 0), step(true, 400)] {
        monitor.sampler_mut().set_sample(s.sample);
        monitor.beam_pin_mut().set_blocked(s.beam_blocked);
        monitor.run_iteration(&mut sink).unwrap();
    }

    assert_eq!(monitor.serial().pending(), b"SIISB");
    assert_eq!(monitor.serial().total(), 5);
    assert_eq!(monitor.sampler_mut().reads(), 4);
    assert_eq!(monitor.sampler_mut().last_channel(), Some(2));

    let sent = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::StatusSent { .. }))
        .count();
    assert_eq!(sent, 5);
}

#[test]
fn virtual_clock_tracks_every_blocking_step() {
    let mut monitor = Monitor::new(MonitorConfig::DEFAULT, sim_board()).unwrap();
    let mut sink = RecordingSink::default();

    monitor.run_iteration(&mut sink).unwrap();
    assert_eq!(monitor.delay().elapsed_ms(), 10);

    monitor.sampler_mut().set_sample(1023);
    monitor.beam_pin_mut().set_blocked(true);
    monitor.run_iteration(&mut sink).unwrap();
    assert_eq!(monitor.delay().elapsed_ms(), 10 + 6010);
}

#[test]
fn combined_iteration_leaves_both_indicators_dark() {
    let mut monitor = Monitor::new(MonitorConfig::DEFAULT, sim_board()).unwrap();
    monitor.sampler_mut().set_sample(500);
    monitor.beam_pin_mut().set_blocked(true);

    monitor.run_iteration(&mut RecordingSink::default()).unwrap();

    assert!(!monitor.red().is_on());
    assert!(!monitor.yellow().is_on());
    // red: 5 blink edges, 200 alternate edges, final off
    assert_eq!(monitor.red().transitions(), 206);
    // yellow is already on when the first alternate cycle drives it high
    assert_eq!(monitor.yellow().transitions(), 204);
}

#[test]
fn wire_bytes_decode_back_to_detections() {
    let mut monitor = Monitor::new(MonitorConfig::DEFAULT, sim_board()).unwrap();
    monitor.sampler_mut().set_sample(400);
    monitor.beam_pin_mut().set_blocked(true);
    monitor.run_iteration(&mut RecordingSink::default()).unwrap();

    let decoded: Vec<_> = decode_stream(monitor.serial().pending())
        .map(|c| c.detection())
        .collect();
    assert_eq!(
        decoded,
        vec![Detection::Ir, Detection::Sound, Detection::Both]
    );
}

#[test]
fn scenario_config_overrides_timing() {
    let config: MonitorConfig = serde_json::from_str(
        r#"{
            "blink_count": 2, "blink_interval_ms": 50,
            "alternate_cycles": 1, "alternate_half_period_ms": 10,
            "loop_delay_ms": 5
        }"#,
    )
    .unwrap();
    let mut monitor = Monitor::new(config, sim_board()).unwrap();
    monitor.sampler_mut().set_sample(400);
    monitor.beam_pin_mut().set_blocked(true);

    monitor.run_iteration(&mut RecordingSink::default()).unwrap();

    assert_eq!(monitor.serial().pending(), b"ISB");
    assert_eq!(monitor.delay().elapsed_ms(), 100 + 100 + 20 + 5);
}
