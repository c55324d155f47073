//! Red / yellow indicator pair.
//!
//! Two plain push-pull outputs.  Patterns are generated inline with blocking
//! delays; there is no timer and no background task, so a blink burst holds
//! the caller for its whole duration.
//!
//! | Pattern   | Sequence                                              |
//! |-----------|-------------------------------------------------------|
//! | blink     | toggle then wait, `count` times                       |
//! | alternate | yellow on / red off, wait, red on / yellow off, wait  |
//!
//! An odd blink count leaves the line inverted from where it started.

use crate::app::ports::{DelayNs, StatefulOutputPin};
use crate::error::ActuatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Beam interruption.
    Red,
    /// Sound.
    Yellow,
}

pub struct Indicators<R, Y> {
    red: R,
    yellow: Y,
}

type Result<T> = core::result::Result<T, ActuatorError>;

impl<R: StatefulOutputPin, Y: StatefulOutputPin> Indicators<R, Y> {
    /// Take both lines and drive them low.
    pub fn new(red: R, yellow: Y) -> Result<Self> {
        let mut this = Self { red, yellow };
        this.all_off()?;
        Ok(this)
    }

    pub fn set(&mut self, line: Indicator, on: bool) -> Result<()> {
        let res = match (line, on) {
            (Indicator::Red, true) => self.red.set_high().map_err(drop),
            (Indicator::Red, false) => self.red.set_low().map_err(drop),
            (Indicator::Yellow, true) => self.yellow.set_high().map_err(drop),
            (Indicator::Yellow, false) => self.yellow.set_low().map_err(drop),
        };
        res.map_err(|()| ActuatorError::GpioWriteFailed)
    }

    pub fn toggle(&mut self, line: Indicator) -> Result<()> {
        let res = match line {
            Indicator::Red => self.red.toggle().map_err(drop),
            Indicator::Yellow => self.yellow.toggle().map_err(drop),
        };
        res.map_err(|()| ActuatorError::GpioWriteFailed)
    }

    pub fn is_on(&mut self, line: Indicator) -> Result<bool> {
        let res = match line {
            Indicator::Red => self.red.is_set_high().map_err(drop),
            Indicator::Yellow => self.yellow.is_set_high().map_err(drop),
        };
        res.map_err(|()| ActuatorError::GpioWriteFailed)
    }

    pub fn all_off(&mut self) -> Result<()> {
        self.set(Indicator::Red, false)?;
        self.set(Indicator::Yellow, false)
    }

    /// Toggle `line` `count` times, waiting `interval_ms` after each toggle.
    pub fn blink(
        &mut self,
        line: Indicator,
        count: u8,
        interval_ms: u32,
        delay: &mut impl DelayNs,
    ) -> Result<()> {
        for _ in 0..count {
            self.toggle(line)?;
            delay.delay_ms(interval_ms);
        }
        Ok(())
    }

    /// Rapid red/yellow swap for `cycles` full periods.
    ///
    /// Leaves red on and yellow off; callers follow with [`all_off`](Self::all_off).
    pub fn alternate(
        &mut self,
        cycles: u8,
        half_period_ms: u32,
        delay: &mut impl DelayNs,
    ) -> Result<()> {
        for _ in 0..cycles {
            self.set(Indicator::Yellow, true)?;
            self.set(Indicator::Red, false)?;
            delay.delay_ms(half_period_ms);

            self.set(Indicator::Red, true)?;
            self.set(Indicator::Yellow, false)?;
            delay.delay_ms(half_period_ms);
        }
        Ok(())
    }

    pub fn red(&self) -> &R {
        &self.red
    }

    pub fn yellow(&self) -> &Y {
        &self.yellow
    }

    pub fn release(self) -> (R, Y) {
        (self.red, self.yellow)
    }
}
