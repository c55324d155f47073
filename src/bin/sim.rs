//! Host simulator: runs the monitor's decision loop against simulated
//! peripherals and prints what the status line would carry.
//!
//! ```text
//! sim                 # built-in scenario
//! sim scenario.json   # { "config": {..}, "steps": [{ "beam_blocked": true, "sample": 40 }] }
//! ```
//!
//! `RUST_LOG=info` shows the monitor's event log alongside.

use std::fs;

use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;

use silent_intrusion::adapters::log_sink::LogEventSink;
use silent_intrusion::adapters::sim::{ScenarioStep, sim_board};
use silent_intrusion::app::service::Monitor;
use silent_intrusion::config::MonitorConfig;

#[derive(Debug, Deserialize)]
struct Scenario {
    #[serde(default)]
    config: MonitorConfig,
    steps: Vec<ScenarioStep>,
}

fn builtin_scenario() -> Scenario {
    let step = |beam_blocked, sample| ScenarioStep {
        beam_blocked,
        sample,
    };
    Scenario {
        config: MonitorConfig::DEFAULT,
        steps: vec![
            step(false, 10), // quiet, clear
            step(false, 30), // exactly at threshold
            step(false, 31), // just above
            step(true, 0),   // intrusion
            step(true, 400), // intrusion + sound
        ],
    }
}

fn load_scenario(path: &str) -> Result<Scenario> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
}

fn main() -> Result<()> {
    env_logger::init();

    let scenario = match std::env::args().nth(1) {
        Some(path) => load_scenario(&path)?,
        None => builtin_scenario(),
    };
    info!("Running {} simulated iterations", scenario.steps.len());

    let mut sink = LogEventSink::new();
    let mut monitor = Monitor::new(scenario.config, sim_board()).context("board init")?;
    monitor.start(&mut sink);

    for (i, step) in scenario.steps.iter().enumerate() {
        monitor.sampler_mut().set_sample(step.sample);
        monitor.beam_pin_mut().set_blocked(step.beam_blocked);

        let before = monitor.delay().elapsed_ms();
        let iteration = monitor
            .run_iteration(&mut sink)
            .with_context(|| format!("iteration {i}"))?;
        let took = monitor.delay().elapsed_ms() - before;

        let wire: String = iteration
            .sent
            .iter()
            .map(|c| char::from(c.as_byte()))
            .collect();
        println!(
            "{i:>3}  beam={:<7} level={:<5} sent={:<3} {took} ms",
            if iteration.beam_blocked { "blocked" } else { "clear" },
            iteration.sound_level,
            if wire.is_empty() { "-" } else { &wire },
        );
    }

    println!(
        "total: {} bytes, {} ms virtual time",
        monitor.serial().total(),
        monitor.delay().elapsed_ms()
    );
    Ok(())
}
