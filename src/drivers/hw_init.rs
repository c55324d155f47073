//! One-shot hardware peripheral initialization.
//!
//! Configures GPIO directions, the ADC and USART0 by direct register writes.
//! Called once from `main()` before the loop starts; the returned [`Board`]
//! is handed to the monitor and never re-initialised.

use avr_device::atmega328p::Peripherals;
use embedded_hal::digital::OutputPin;
use log::info;

use crate::app::service::Hardware;
use crate::config::MonitorConfig;
use crate::drivers::adc::Adc;
use crate::drivers::delay::CycleDelay;
use crate::drivers::gpio::{PortBOutput, PortDInput};
use crate::drivers::usart::Usart;
use crate::pins;

// ── Error type ────────────────────────────────────────────────

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    /// `Peripherals::take()` was already called.
    PeripheralsTaken,
    /// A build-time constant failed validation.
    Config(&'static str),
}

impl core::fmt::Display for HwInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PeripheralsTaken => write!(f, "device peripherals already taken"),
            Self::Config(msg) => write!(f, "config rejected: {}", msg),
        }
    }
}

/// Concrete peripheral set for the ATmega328P board.
pub type Board = Hardware<Adc, PortDInput, PortBOutput, PortBOutput, Usart, CycleDelay>;

/// Configure every peripheral the monitor uses.
///
/// Leaves the IR emitter driven high for the rest of the run; its handle is
/// dropped here because nothing touches it again.
pub fn init_board(config: &MonitorConfig) -> Result<Board, HwInitError> {
    config.validate().map_err(HwInitError::Config)?;
    let dp = Peripherals::take().ok_or(HwInitError::PeripheralsTaken)?;

    init_gpio(&dp);
    // SAFETY: directions were set by init_gpio(); each bit gets exactly one
    // handle and PORTB/PORTD are not used through `dp` afterwards.
    let (beam, red, yellow, mut ir_tx) = unsafe {
        (
            PortDInput::new(pins::IR_RX_BIT),
            PortBOutput::new(pins::RED_LED_BIT),
            PortBOutput::new(pins::YELLOW_LED_BIT),
            PortBOutput::new(pins::IR_TX_BIT),
        )
    };
    let Ok(()) = ir_tx.set_high();
    info!("hw_init: GPIO configured (IR carrier on)");

    let adc = Adc::new(dp.ADC, config);
    info!("hw_init: ADC configured (AVcc, /128)");

    let serial = Usart::new(dp.USART0, config.baud_divisor(), config.wait);
    info!("hw_init: USART0 configured (divisor={})", config.baud_divisor());

    Ok(Hardware {
        adc,
        beam,
        red,
        yellow,
        serial,
        delay: CycleDelay::new(config.cpu_hz),
    })
}

// ── GPIO ──────────────────────────────────────────────────────

fn init_gpio(dp: &Peripherals) {
    let outputs = pins::mask(pins::IR_TX_BIT)
        | pins::mask(pins::RED_LED_BIT)
        | pins::mask(pins::YELLOW_LED_BIT);
    let ir_rx = pins::mask(pins::IR_RX_BIT);

    // SAFETY: plain bit sets / clears on data-direction and port registers.
    unsafe {
        dp.PORTB.ddrb().modify(|r, w| w.bits(r.bits() | outputs));
        dp.PORTD.ddrd().modify(|r, w| w.bits(r.bits() & !ir_rx));
        // Input with PORTx bit set = pull-up enabled
        dp.PORTD.portd().modify(|r, w| w.bits(r.bits() | ir_rx));
    }
}
