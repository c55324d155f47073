//! Mock hardware for integration tests.
//!
//! Every peripheral writes into one shared timeline so tests can assert on
//! the exact interleaving of pin changes, delays and transmitted bytes
//! without touching real registers.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};
use silent_intrusion::app::events::AppEvent;
use silent_intrusion::app::ports::{AnalogSampler, EventSink, SerialTransmitter};
use silent_intrusion::app::service::{Hardware, Monitor};
use silent_intrusion::config::MonitorConfig;
use silent_intrusion::error::{CommsError, SensorError};

// ── Call record ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Red,
    Yellow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HwCall {
    AdcRead { channel: u8 },
    BeamRead,
    Set { line: Line, high: bool },
    DelayMs(u32),
    Tx(u8),
}

pub type Timeline = Rc<RefCell<Vec<HwCall>>>;

// ── Peripherals ───────────────────────────────────────────────

pub struct MockAdc {
    pub sample: u16,
    pub fail: Option<SensorError>,
    log: Timeline,
}

impl AnalogSampler for MockAdc {
    fn read(&mut self, channel: u8) -> Result<u16, SensorError> {
        self.log.borrow_mut().push(HwCall::AdcRead { channel });
        match self.fail {
            Some(e) => Err(e),
            None => Ok(self.sample),
        }
    }
}

pub struct MockBeam {
    pub blocked: bool,
    log: Timeline,
}

impl ErrorType for MockBeam {
    type Error = Infallible;
}

impl InputPin for MockBeam {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        self.log.borrow_mut().push(HwCall::BeamRead);
        Ok(self.blocked)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        self.is_high().map(|b| !b)
    }
}

pub struct MockLed {
    line: Line,
    pub high: bool,
    log: Timeline,
}

impl ErrorType for MockLed {
    type Error = Infallible;
}

impl OutputPin for MockLed {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.high = false;
        self.log.borrow_mut().push(HwCall::Set {
            line: self.line,
            high: false,
        });
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.high = true;
        self.log.borrow_mut().push(HwCall::Set {
            line: self.line,
            high: true,
        });
        Ok(())
    }
}

impl StatefulOutputPin for MockLed {
    fn is_set_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.high)
    }

    fn is_set_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.high)
    }
}

pub struct MockSerial {
    pub fail: Option<CommsError>,
    log: Timeline,
}

impl SerialTransmitter for MockSerial {
    fn transmit(&mut self, byte: u8) -> Result<(), CommsError> {
        if let Some(e) = self.fail {
            return Err(e);
        }
        self.log.borrow_mut().push(HwCall::Tx(byte));
        Ok(())
    }
}

pub struct MockDelay {
    log: Timeline,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(HwCall::DelayMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(HwCall::DelayMs(ms));
    }
}

// ── Board ─────────────────────────────────────────────────────

pub type MockMonitor = Monitor<MockAdc, MockBeam, MockLed, MockLed, MockSerial, MockDelay>;

pub struct Rig {
    pub monitor: MockMonitor,
    pub log: Timeline,
}

#[allow(dead_code)]
impl Rig {
    pub fn new() -> Self {
        Self::with_config(MonitorConfig::DEFAULT)
    }

    pub fn with_config(config: MonitorConfig) -> Self {
        let log: Timeline = Rc::default();
        let hw = Hardware {
            adc: MockAdc {
                sample: 0,
                fail: None,
                log: log.clone(),
            },
            beam: MockBeam {
                blocked: false,
                log: log.clone(),
            },
            red: MockLed {
                line: Line::Red,
                high: false,
                log: log.clone(),
            },
            yellow: MockLed {
                line: Line::Yellow,
                high: false,
                log: log.clone(),
            },
            serial: MockSerial {
                fail: None,
                log: log.clone(),
            },
            delay: MockDelay { log: log.clone() },
        };
        let monitor = Monitor::new(config, hw).expect("mock board never fails");
        // Drop the power-on writes so tests only see the iteration
        log.borrow_mut().clear();
        Self { monitor, log }
    }

    /// Set the inputs for the next iteration.
    pub fn inputs(&mut self, beam_blocked: bool, sample: u16) {
        self.monitor.beam_pin_mut().blocked = beam_blocked;
        self.monitor.sampler_mut().sample = sample;
    }

    pub fn calls(&self) -> Vec<HwCall> {
        self.log.borrow().clone()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    pub fn sent(&self) -> Vec<u8> {
        self.log
            .borrow()
            .iter()
            .filter_map(|c| match c {
                HwCall::Tx(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    pub fn total_delay_ms(&self) -> u32 {
        self.log
            .borrow()
            .iter()
            .map(|c| match c {
                HwCall::DelayMs(ms) => *ms,
                _ => 0,
            })
            .sum()
    }

    /// Number of level writes to `line` (blink toggles and forced levels).
    pub fn writes_to(&self, line: Line) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|c| matches!(c, HwCall::Set { line: l, .. } if *l == line))
            .count()
    }

    pub fn red_on(&self) -> bool {
        self.monitor.red().high
    }

    pub fn yellow_on(&self) -> bool {
        self.monitor.yellow().high
    }
}

// ── Event sink ────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(*event);
    }
}
