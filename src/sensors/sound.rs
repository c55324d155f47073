//! Analog sound sensor on the ADC.
//!
//! The module's amplifier output is sampled raw, then scaled by a fixed
//! integer ratio before the threshold comparison.  No averaging, no
//! calibration: every iteration takes one fresh conversion.

use crate::app::ports::AnalogSampler;
use crate::config::MonitorConfig;
use crate::error::SensorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundReading {
    /// Raw ADC sample (0–1023).
    pub raw: u16,
    /// `raw × num / den`, truncated.
    pub level: u32,
    /// `level > threshold`.
    pub loud: bool,
}

pub struct SoundSensor<A> {
    adc: A,
    config: MonitorConfig,
}

impl<A: AnalogSampler> SoundSensor<A> {
    pub fn new(adc: A, config: &MonitorConfig) -> Self {
        Self {
            adc,
            config: *config,
        }
    }

    pub fn read(&mut self) -> Result<SoundReading, SensorError> {
        let raw = self.adc.read(self.config.sound_channel)?;
        let level = self.config.scale_sample(raw);
        Ok(SoundReading {
            raw,
            level,
            loud: level > self.config.sound_threshold,
        })
    }

    pub fn sampler(&self) -> &A {
        &self.adc
    }

    pub fn sampler_mut(&mut self) -> &mut A {
        &mut self.adc
    }

    pub fn release(self) -> A {
        self.adc
    }
}
