//! Busy-wait delay for the ATmega328P.
//!
//! Cycle-counted, no timer peripheral.  Interrupts are never enabled in
//! this firmware, so the count is exact apart from loop overhead.

use avr_device::asm::delay_cycles;
use embedded_hal::delay::DelayNs;

#[derive(Debug, Clone, Copy)]
pub struct CycleDelay {
    cycles_per_us: u32,
}

impl CycleDelay {
    pub const fn new(cpu_hz: u32) -> Self {
        Self {
            cycles_per_us: cpu_hz / 1_000_000,
        }
    }
}

impl DelayNs for CycleDelay {
    fn delay_ns(&mut self, ns: u32) {
        // Round up to whole microseconds; nothing here needs finer steps
        self.delay_us(ns.div_ceil(1_000));
    }

    fn delay_us(&mut self, us: u32) {
        delay_cycles(us.saturating_mul(self.cycles_per_us));
    }

    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}
