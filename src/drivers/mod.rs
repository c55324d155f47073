//! Output drivers and ATmega328P peripheral access.
//!
//! `indicators` and `wait` are target-independent.  The register-level
//! modules only build for `target_arch = "avr"`.

pub mod indicators;
pub mod wait;

#[cfg(target_arch = "avr")]
pub mod adc;
#[cfg(target_arch = "avr")]
pub mod delay;
#[cfg(target_arch = "avr")]
pub mod gpio;
#[cfg(target_arch = "avr")]
pub mod hw_init;
#[cfg(target_arch = "avr")]
pub mod usart;
