//! Host simulation backend.
//!
//! Stands in for the ATmega328P peripherals so the real decision loop can
//! run on a desktop: sensor inputs are set by the caller, outputs are
//! recorded, and delays advance a virtual clock instead of sleeping.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};
use heapless::Vec;
use serde::{Deserialize, Serialize};

use crate::app::ports::{AnalogSampler, SerialTransmitter};
use crate::app::service::Hardware;
use crate::error::{CommsError, SensorError};

/// Largest value a 10-bit conversion can return.
pub const ADC_MAX: u16 = 1023;

/// Bytes kept by [`SimSerial`] between drains.
pub const SERIAL_CAPACITY: usize = 64;

// ── Analog ────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct SimAdc {
    sample: u16,
    reads: u32,
    last_channel: Option<u8>,
}

impl SimAdc {
    /// Value returned by subsequent conversions, clamped to 10 bits.
    pub fn set_sample(&mut self, sample: u16) {
        self.sample = sample.min(ADC_MAX);
    }

    pub fn reads(&self) -> u32 {
        self.reads
    }

    pub fn last_channel(&self) -> Option<u8> {
        self.last_channel
    }
}

impl AnalogSampler for SimAdc {
    fn read(&mut self, channel: u8) -> Result<u16, SensorError> {
        self.reads += 1;
        self.last_channel = Some(channel & 0x0F);
        Ok(self.sample)
    }
}

// ── Digital ───────────────────────────────────────────────────

/// IR receiver input.  Pull-up idle level is high, which reads as blocked,
/// so the simulation starts with the beam clear instead.
#[derive(Debug, Default)]
pub struct SimBeam {
    blocked: bool,
}

impl SimBeam {
    pub fn set_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
    }
}

impl ErrorType for SimBeam {
    type Error = Infallible;
}

impl InputPin for SimBeam {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.blocked)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.blocked)
    }
}

/// Indicator output.  Counts level changes so blink patterns are visible.
#[derive(Debug, Default)]
pub struct SimLed {
    on: bool,
    transitions: u32,
}

impl SimLed {
    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    fn drive(&mut self, on: bool) {
        if self.on != on {
            self.transitions += 1;
        }
        self.on = on;
    }
}

impl ErrorType for SimLed {
    type Error = Infallible;
}

impl OutputPin for SimLed {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.drive(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.drive(true);
        Ok(())
    }
}

impl StatefulOutputPin for SimLed {
    fn is_set_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.on)
    }

    fn is_set_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.on)
    }
}

// ── Serial ────────────────────────────────────────────────────

/// Status line capture.  Bytes past [`SERIAL_CAPACITY`] are counted but not
/// kept, matching a host that is not reading.
#[derive(Debug, Default)]
pub struct SimSerial {
    pending: Vec<u8, SERIAL_CAPACITY>,
    total: u32,
}

impl SimSerial {
    /// Bytes written since the last drain.
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    pub fn drain(&mut self) -> Vec<u8, SERIAL_CAPACITY> {
        core::mem::take(&mut self.pending)
    }

    pub fn total(&self) -> u32 {
        self.total
    }
}

impl SerialTransmitter for SimSerial {
    fn transmit(&mut self, byte: u8) -> Result<(), CommsError> {
        self.total += 1;
        let _ = self.pending.push(byte);
        Ok(())
    }
}

// ── Time ──────────────────────────────────────────────────────

/// Delay that only advances a counter.
#[derive(Debug, Default)]
pub struct VirtualClock {
    elapsed_ns: u64,
}

impl VirtualClock {
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }

    pub fn elapsed_ns(&self) -> u64 {
        self.elapsed_ns
    }
}

impl DelayNs for VirtualClock {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += u64::from(ns);
    }

    fn delay_us(&mut self, us: u32) {
        self.elapsed_ns += u64::from(us) * 1_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ns += u64::from(ms) * 1_000_000;
    }
}

// ── Board ─────────────────────────────────────────────────────

pub type SimBoard = Hardware<SimAdc, SimBeam, SimLed, SimLed, SimSerial, VirtualClock>;

/// Fresh simulated board: beam clear, silent, indicators off.
pub fn sim_board() -> SimBoard {
    Hardware {
        adc: SimAdc::default(),
        beam: SimBeam::default(),
        red: SimLed::default(),
        yellow: SimLed::default(),
        serial: SimSerial::default(),
        delay: VirtualClock::default(),
    }
}

/// Sensor inputs for one simulated iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioStep {
    pub beam_blocked: bool,
    /// Raw ADC sample (clamped to 10 bits).
    pub sample: u16,
}
