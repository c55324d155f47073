//! Single-bit GPIO handles on PORTB / PORTD.
//!
//! Direction and pull-up are set once by [`hw_init`](super::hw_init); the
//! handles only read or write their own bit.  Every access is a
//! read-modify-write of the whole port register, which is sound here
//! because the firmware is single-threaded and never enables interrupts.

use core::convert::Infallible;

use avr_device::atmega328p::{PORTB, PORTD, portb, portd};
use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};

use crate::pins;

fn portb() -> &'static portb::RegisterBlock {
    // SAFETY: memory-mapped I/O block, valid for the program lifetime.
    unsafe { &*PORTB::ptr() }
}

fn portd() -> &'static portd::RegisterBlock {
    // SAFETY: as above.
    unsafe { &*PORTD::ptr() }
}

// ── PORTB output bit ──────────────────────────────────────────

/// One output bit of PORTB.
pub struct PortBOutput {
    mask: u8,
}

impl PortBOutput {
    /// # Safety
    ///
    /// The bit must be configured as an output and no other handle may
    /// drive it.
    pub(crate) unsafe fn new(bit: u8) -> Self {
        Self {
            mask: pins::mask(bit),
        }
    }
}

impl ErrorType for PortBOutput {
    type Error = Infallible;
}

impl OutputPin for PortBOutput {
    fn set_low(&mut self) -> Result<(), Infallible> {
        let mask = self.mask;
        portb().portb().modify(|r, w| unsafe { w.bits(r.bits() & !mask) });
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        let mask = self.mask;
        portb().portb().modify(|r, w| unsafe { w.bits(r.bits() | mask) });
        Ok(())
    }
}

impl StatefulOutputPin for PortBOutput {
    fn is_set_high(&mut self) -> Result<bool, Infallible> {
        Ok(portb().portb().read().bits() & self.mask != 0)
    }

    fn is_set_low(&mut self) -> Result<bool, Infallible> {
        Ok(portb().portb().read().bits() & self.mask == 0)
    }

    fn toggle(&mut self) -> Result<(), Infallible> {
        let mask = self.mask;
        portb().portb().modify(|r, w| unsafe { w.bits(r.bits() ^ mask) });
        Ok(())
    }
}

// ── PORTD input bit ───────────────────────────────────────────

/// One input bit of PORTD.
pub struct PortDInput {
    mask: u8,
}

impl PortDInput {
    /// # Safety
    ///
    /// The bit must be configured as an input.
    pub(crate) unsafe fn new(bit: u8) -> Self {
        Self {
            mask: pins::mask(bit),
        }
    }
}

impl ErrorType for PortDInput {
    type Error = Infallible;
}

impl InputPin for PortDInput {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(portd().pind().read().bits() & self.mask != 0)
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(portd().pind().read().bits() & self.mask == 0)
    }
}
