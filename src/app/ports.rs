//! Port traits: the hexagonal boundary between the decision loop and the board.
//!
//! ```text
//!   Driver ──▶ Port trait ──▶ Monitor (domain)
//! ```
//!
//! One capability per peripheral.  Digital lines and timed waits use the
//! `embedded-hal` 1.0 traits directly ([`InputPin`], [`StatefulOutputPin`],
//! [`DelayNs`]); the ADC and the transmit-only UART have no `embedded-hal`
//! 1.0 equivalent, so they get their own ports here.
//!
//! On the ATmega328P the drivers in [`crate::drivers`] implement these; on
//! the host the simulation adapter and test mocks do.

pub use embedded_hal::delay::DelayNs;
pub use embedded_hal::digital::{InputPin, OutputPin, StatefulOutputPin};

use crate::error::{CommsError, SensorError};

// ───────────────────────────────────────────────────────────────
// Analog sampler (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Single-conversion ADC access.
pub trait AnalogSampler {
    /// Select `channel`, let the mux settle, run one conversion and return
    /// the raw sample (0–1023 on a 10-bit converter).
    ///
    /// Blocks until the conversion completes.  Implementations only return
    /// an error when configured with a bounded wait.
    fn read(&mut self, channel: u8) -> Result<u16, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Serial transmitter (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Transmit-only serial line, one byte at a time, no buffering.
pub trait SerialTransmitter {
    /// Wait for the transmit register to be free, then write `byte`.
    fn transmit(&mut self, byte: u8) -> Result<(), CommsError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The monitor emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

impl<T: AnalogSampler + ?Sized> AnalogSampler for &mut T {
    fn read(&mut self, channel: u8) -> Result<u16, SensorError> {
        T::read(self, channel)
    }
}

impl<T: SerialTransmitter + ?Sized> SerialTransmitter for &mut T {
    fn transmit(&mut self, byte: u8) -> Result<(), CommsError> {
        T::transmit(self, byte)
    }
}
