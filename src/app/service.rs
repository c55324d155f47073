//! Monitor: the main decision loop.
//!
//! [`Monitor`] owns every peripheral handle for the lifetime of the program
//! and runs the same fixed sequence each iteration:
//!
//! ```text
//!  beam ──▶ sound ──▶ combined ──▶ loop delay
//!   │         │          │
//!   ▼         ▼          ▼
//!  'I'       'S'        'B'      (status line)
//! ```
//!
//! 1. Beam blocked: blink red, send `'I'`.  Clear: force yellow off.
//! 2. Sound loud: blink yellow, send `'S'`.  Quiet: force red off.
//! 3. Both in the same iteration: alternate red/yellow, both off, send `'B'`.
//! 4. Fixed delay.
//!
//! Every step blocks.  Only the pin levels carry over between iterations.

use heapless::Vec;
use log::{info, warn};
use serde::Serialize;

use crate::config::MonitorConfig;
use crate::drivers::indicators::{Indicator, Indicators};
use crate::error::{Error, Result};
use crate::protocol::StatusCode;
use crate::sensors::{BeamSensor, SoundSensor};

use super::events::AppEvent;
use super::ports::{AnalogSampler, DelayNs, EventSink, InputPin, SerialTransmitter, StatefulOutputPin};

// ───────────────────────────────────────────────────────────────
// Hardware bundle
// ───────────────────────────────────────────────────────────────

/// Every peripheral the loop touches, already initialised.
pub struct Hardware<A, B, R, Y, T, D> {
    /// Sound sensor ADC.
    pub adc: A,
    /// IR receiver input.
    pub beam: B,
    pub red: R,
    pub yellow: Y,
    /// Status line.
    pub serial: T,
    pub delay: D,
}

/// What one pass through the loop observed and sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Iteration {
    pub beam_blocked: bool,
    /// Scaled sound level compared against the threshold.
    pub sound_level: u32,
    /// Codes written to the status line, in transmit order.
    pub sent: Vec<StatusCode, 3>,
}

// ───────────────────────────────────────────────────────────────
// Monitor
// ───────────────────────────────────────────────────────────────

pub struct Monitor<A, B, R, Y, T, D> {
    config: MonitorConfig,
    sound: SoundSensor<A>,
    beam: BeamSensor<B>,
    indicators: Indicators<R, Y>,
    serial: T,
    delay: D,
    iterations: u32,
}

impl<A, B, R, Y, T, D> Monitor<A, B, R, Y, T, D>
where
    A: AnalogSampler,
    B: InputPin,
    R: StatefulOutputPin,
    Y: StatefulOutputPin,
    T: SerialTransmitter,
    D: DelayNs,
{
    /// Take ownership of the initialised peripherals.  Drives both
    /// indicators low.
    pub fn new(config: MonitorConfig, hw: Hardware<A, B, R, Y, T, D>) -> Result<Self> {
        config.validate().map_err(Error::Config)?;
        Ok(Self {
            config,
            sound: SoundSensor::new(hw.adc, &config),
            beam: BeamSensor::new(hw.beam),
            indicators: Indicators::new(hw.red, hw.yellow)?,
            serial: hw.serial,
            delay: hw.delay,
            iterations: 0,
        })
    }

    /// Number of iterations started so far (wraps).
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    // ── Loop ──────────────────────────────────────────────────

    /// Run forever: [`start`](Self::start), then [`step`](Self::step) in a loop.
    pub fn run(&mut self, sink: &mut impl EventSink) -> ! {
        self.start(sink);
        loop {
            let _ = self.step(sink);
        }
    }

    /// Announce the configuration before the first iteration.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started {
            threshold: self.config.sound_threshold,
            baud_divisor: self.config.baud_divisor(),
        });
        info!(
            "Monitor started: threshold={} channel={}",
            self.config.sound_threshold, self.config.sound_channel
        );
    }

    /// One iteration of the endless loop.
    ///
    /// A failed iteration is reported through `sink` as [`AppEvent::Fault`]
    /// and the loop delay still runs, so the next call starts on schedule.
    pub fn step(&mut self, sink: &mut impl EventSink) -> Result<Iteration> {
        self.run_iteration(sink).inspect_err(|e| {
            warn!("Iteration {} aborted: {}", self.iterations, e);
            sink.emit(&AppEvent::Fault(*e));
            self.delay.delay_ms(self.config.loop_delay_ms);
        })
    }

    /// One pass: beam check, sound check, combined check, loop delay.
    ///
    /// Each status byte is reported to `sink` as soon as it is on the wire.
    pub fn run_iteration(&mut self, sink: &mut impl EventSink) -> Result<Iteration> {
        self.iterations = self.iterations.wrapping_add(1);
        let mut sent = Vec::new();

        // 1. Beam
        let beam_blocked = self.beam.is_blocked()?;
        if beam_blocked {
            self.indicators.blink(
                Indicator::Red,
                self.config.blink_count,
                self.config.blink_interval_ms,
                &mut self.delay,
            )?;
            self.send(StatusCode::Intrusion, beam_blocked, None, &mut sent, sink)?;
        } else {
            self.indicators.set(Indicator::Yellow, false)?;
        }

        // 2. Sound
        let sound = self.sound.read()?;
        if sound.loud {
            self.indicators.blink(
                Indicator::Yellow,
                self.config.blink_count,
                self.config.blink_interval_ms,
                &mut self.delay,
            )?;
            self.send(StatusCode::Sound, beam_blocked, Some(sound.level), &mut sent, sink)?;
        } else {
            self.indicators.set(Indicator::Red, false)?;
        }

        // 3. Combined
        if beam_blocked && sound.loud {
            self.indicators.alternate(
                self.config.alternate_cycles,
                self.config.alternate_half_period_ms,
                &mut self.delay,
            )?;
            self.indicators.all_off()?;
            self.send(StatusCode::Both, beam_blocked, Some(sound.level), &mut sent, sink)?;
        }

        // 4. Loop delay
        self.delay.delay_ms(self.config.loop_delay_ms);

        Ok(Iteration {
            beam_blocked,
            sound_level: sound.level,
            sent,
        })
    }

    fn send(
        &mut self,
        code: StatusCode,
        beam_blocked: bool,
        sound_level: Option<u32>,
        sent: &mut Vec<StatusCode, 3>,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        self.serial.transmit(code.as_byte())?;
        // At most one of each code per iteration
        let _ = sent.push(code);
        sink.emit(&AppEvent::StatusSent {
            code,
            beam_blocked,
            sound_level,
        });
        Ok(())
    }

    // ── Hardware access (tests, simulation) ──────────────────

    pub fn sampler_mut(&mut self) -> &mut A {
        self.sound.sampler_mut()
    }

    pub fn beam_pin_mut(&mut self) -> &mut B {
        self.beam.pin_mut()
    }

    pub fn red(&self) -> &R {
        self.indicators.red()
    }

    pub fn yellow(&self) -> &Y {
        self.indicators.yellow()
    }

    pub fn serial(&self) -> &T {
        &self.serial
    }

    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Hand the peripherals back.
    pub fn release(self) -> Hardware<A, B, R, Y, T, D> {
        let (red, yellow) = self.indicators.release();
        Hardware {
            adc: self.sound.release(),
            beam: self.beam.release(),
            red,
            yellow,
            serial: self.serial,
            delay: self.delay,
        }
    }
}
