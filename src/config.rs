//! Monitor configuration parameters
//!
//! Every threshold, blink count and delay of the decision loop.  These are
//! build-time constants: the firmware uses [`MonitorConfig::DEFAULT`] and
//! nothing changes them while running.

use serde::{Deserialize, Serialize};

use crate::pins;

/// How a driver waits on a hardware ready flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaitPolicy {
    /// Busy-poll until the flag changes, however long that takes.
    Forever,
    /// Give up after `max_polls` reads of the status register and report a
    /// timeout.
    Bounded { max_polls: u32 },
}

/// Core monitor configuration
///
/// Fields missing from a serialised profile take their [`DEFAULT`](Self::DEFAULT) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    // --- Sound ---
    /// ADC channel of the sound sensor (0-15)
    pub sound_channel: u8,
    /// Raw sample is multiplied by this...
    pub sound_scale_num: u32,
    /// ...and divided by this (integer, truncating)
    pub sound_scale_den: u32,
    /// Scaled level must be strictly above this to fire
    pub sound_threshold: u32,

    // --- Blink patterns ---
    /// Toggles per single-sensor blink burst
    pub blink_count: u8,
    /// Delay after each toggle (milliseconds)
    pub blink_interval_ms: u32,
    /// Red/yellow swap cycles for the combined alarm
    pub alternate_cycles: u8,
    /// Delay after each half of an alternate cycle (milliseconds)
    pub alternate_half_period_ms: u32,

    // --- Timing ---
    /// Delay closing every iteration (milliseconds)
    pub loop_delay_ms: u32,
    /// Settling time after switching the ADC mux (microseconds)
    pub adc_settle_us: u32,

    // --- Serial ---
    pub cpu_hz: u32,
    pub baud: u32,

    /// Behaviour of the ADC and UART ready-flag polls
    pub wait: WaitPolicy,
}

impl MonitorConfig {
    pub const DEFAULT: Self = Self {
        // Sound
        sound_channel: pins::SOUND_ADC_CHANNEL,
        sound_scale_num: 202,
        sound_scale_den: 100,
        sound_threshold: 60,

        // Blink patterns
        blink_count: 5,
        blink_interval_ms: 100,
        alternate_cycles: 100,
        alternate_half_period_ms: 25,

        // Timing
        loop_delay_ms: 10,
        adc_settle_us: 5,

        // Serial
        cpu_hz: pins::CPU_HZ,
        baud: pins::STATUS_BAUD,

        wait: WaitPolicy::Forever,
    };

    /// UBRR value: `clock / (16 × baud) − 1`, integer arithmetic.
    pub const fn baud_divisor(&self) -> u16 {
        (self.cpu_hz / 16 / self.baud - 1) as u16
    }

    /// Scale a raw sample into the unit compared against the threshold.
    pub const fn scale_sample(&self, sample: u16) -> u32 {
        (sample as u32) * self.sound_scale_num / self.sound_scale_den
    }

    /// Check the constants against the hardware limits.
    ///
    /// `const` so the firmware can reject a bad profile at compile time.
    pub const fn validate(&self) -> Result<(), &'static str> {
        if self.sound_channel > 0x0F {
            return Err("sound_channel must fit the 4-bit ADC mux");
        }
        if self.sound_scale_den == 0 {
            return Err("sound_scale_den must be non-zero");
        }
        if self.cpu_hz < 1_000_000 {
            return Err("cpu_hz must be at least 1 MHz for microsecond delays");
        }
        if self.baud == 0 || self.cpu_hz / 16 < self.baud {
            return Err("baud must be non-zero and at most cpu_hz / 16");
        }
        if self.cpu_hz / 16 / self.baud - 1 > 0x0FFF {
            return Err("baud divisor does not fit the 12-bit UBRR register");
        }
        // 1023 × num must not overflow the u32 used by scale_sample
        if self.sound_scale_num > u32::MAX / 1023 {
            return Err("sound_scale_num overflows a 10-bit sample");
        }
        Ok(())
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
