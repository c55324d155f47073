//! Silent intrusion monitor firmware library.
//!
//! Exposes the pure-logic modules for integration testing and host
//! simulation. All ATmega328P register-level code is guarded by
//! `#[cfg(target_arch = "avr")]` within each module.

#![cfg_attr(not(test), no_std)]
#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod pins;
pub mod protocol;

// The register-level drivers only exist on the AVR target; the host gets
// the simulation adapter in their place.
pub mod adapters;
pub mod drivers;
pub mod sensors;
