//! USART0 as a transmit-only 8N1 status line.

use avr_device::atmega328p::USART0;

use crate::app::ports::SerialTransmitter;
use crate::config::WaitPolicy;
use crate::drivers::wait::poll_until;
use crate::error::CommsError;

// UCSR0A
const UDRE0: u8 = 1 << 5;
// UCSR0B
const TXEN0: u8 = 1 << 3;
// UCSR0C: asynchronous, no parity, 1 stop bit, 8 data bits
const UCSZ_8BIT: u8 = (1 << 2) | (1 << 1);

pub struct Usart {
    usart: USART0,
    wait: WaitPolicy,
}

impl Usart {
    /// Program the baud divisor and enable the transmitter only.
    pub fn new(usart: USART0, baud_divisor: u16, wait: WaitPolicy) -> Self {
        // SAFETY: UBRR0 holds 12 significant bits; the divisor is checked by
        // MonitorConfig::validate before it gets here.
        usart.ubrr0().write(|w| unsafe { w.bits(baud_divisor) });
        usart.ucsr0b().write(|w| unsafe { w.bits(TXEN0) });
        usart.ucsr0c().write(|w| unsafe { w.bits(UCSZ_8BIT) });

        Self { usart, wait }
    }
}

impl SerialTransmitter for Usart {
    fn transmit(&mut self, byte: u8) -> Result<(), CommsError> {
        let usart = &self.usart;
        if !poll_until(self.wait, || usart.ucsr0a().read().bits() & UDRE0 != 0) {
            return Err(CommsError::TxTimeout);
        }
        self.usart.udr0().write(|w| unsafe { w.bits(byte) });
        Ok(())
    }
}
