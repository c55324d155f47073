//! Infrared beam receiver.
//!
//! The receiver output sits on a pull-up input.  A set bit means the beam
//! is blocked; no debouncing, no hysteresis.

use crate::app::ports::InputPin;
use crate::error::SensorError;

pub struct BeamSensor<P> {
    pin: P,
}

impl<P: InputPin> BeamSensor<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// `true` when something is in the beam path.
    pub fn is_blocked(&mut self) -> Result<bool, SensorError> {
        self.pin
            .is_high()
            .map_err(|_| SensorError::GpioReadFailed)
    }

    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }

    pub fn release(self) -> P {
        self.pin
    }
}
