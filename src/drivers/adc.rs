//! ATmega328P ADC, single conversion mode.
//!
//! AVcc reference, clock prescaler /128 (125 kHz ADC clock at 16 MHz),
//! right-adjusted 10-bit result.

use avr_device::atmega328p::ADC;
use embedded_hal::delay::DelayNs;

use crate::app::ports::AnalogSampler;
use crate::config::{MonitorConfig, WaitPolicy};
use crate::drivers::delay::CycleDelay;
use crate::drivers::wait::poll_until;
use crate::error::SensorError;

// ADMUX
const REFS0: u8 = 1 << 6;
const MUX_MASK: u8 = 0x0F;
// ADCSRA
const ADEN: u8 = 1 << 7;
const ADSC: u8 = 1 << 6;
const ADPS_128: u8 = 0b111;

pub struct Adc {
    adc: ADC,
    settle: CycleDelay,
    settle_us: u32,
    wait: WaitPolicy,
}

impl Adc {
    /// Configure the reference and prescaler and enable the converter.
    pub fn new(adc: ADC, config: &MonitorConfig) -> Self {
        // SAFETY: raw bit patterns from the datasheet; every bit is defined.
        adc.admux().write(|w| unsafe { w.bits(REFS0) });
        adc.adcsra().write(|w| unsafe { w.bits(ADEN | ADPS_128) });

        Self {
            adc,
            settle: CycleDelay::new(config.cpu_hz),
            settle_us: config.adc_settle_us,
            wait: config.wait,
        }
    }
}

impl AnalogSampler for Adc {
    fn read(&mut self, channel: u8) -> Result<u16, SensorError> {
        // Keep the reference bits, swap the channel nibble
        self.adc
            .admux()
            .modify(|r, w| unsafe { w.bits((r.bits() & !MUX_MASK) | (channel & MUX_MASK)) });
        self.settle.delay_us(self.settle_us);

        self.adc
            .adcsra()
            .modify(|r, w| unsafe { w.bits(r.bits() | ADSC) });

        let adc = &self.adc;
        if !poll_until(self.wait, || adc.adcsra().read().bits() & ADSC == 0) {
            return Err(SensorError::AdcTimeout);
        }

        Ok(self.adc.adc().read().bits())
    }
}
