//! Sensor subsystem: the beam receiver and the sound level reader.
//!
//! Both are thin wrappers over a port: they hold no state between reads.

pub mod beam;
pub mod sound;

pub use beam::BeamSensor;
pub use sound::{SoundReading, SoundSensor};
