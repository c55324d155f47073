//! Pin / peripheral assignments for the ATmega328P sensor board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding bit positions.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Sound sensor (analog microphone module)
// ---------------------------------------------------------------------------

/// ADC input channel for the sound sensor (ADC2 / PC2).
pub const SOUND_ADC_CHANNEL: u8 = 2;

// ---------------------------------------------------------------------------
// Infrared beam
// ---------------------------------------------------------------------------

/// PORTB bit driving the IR emitter.  Held HIGH for the whole run.
pub const IR_TX_BIT: u8 = 0; // PB0
/// PORTD bit reading the IR receiver.  Input with pull-up; HIGH = blocked.
pub const IR_RX_BIT: u8 = 2; // PD2

// ---------------------------------------------------------------------------
// Indicators
// ---------------------------------------------------------------------------

/// PORTB bit for the red indicator (blinks on beam interruption).
pub const RED_LED_BIT: u8 = 3; // PB3
/// PORTB bit for the yellow indicator (blinks on sound).
pub const YELLOW_LED_BIT: u8 = 1; // PB1

// ---------------------------------------------------------------------------
// UART (USART0, TX only on PD1)
// ---------------------------------------------------------------------------

/// Status line baud rate.
pub const STATUS_BAUD: u32 = 9_600;

/// Core clock of the target board.
pub const CPU_HZ: u32 = 16_000_000;

/// Bit mask for a port bit.
pub const fn mask(bit: u8) -> u8 {
    1 << bit
}
