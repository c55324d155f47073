//! Outbound application events.
//!
//! The [`Monitor`](super::service::Monitor) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  They never reach the
//! status line; that carries only the one-byte protocol.

use crate::error::Error;
use crate::protocol::StatusCode;

/// Structured events emitted by the decision loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// The loop is about to run its first iteration.
    Started { threshold: u32, baud_divisor: u16 },

    /// A status byte went out on the serial line.
    StatusSent {
        code: StatusCode,
        beam_blocked: bool,
        /// `None` for `'I'`, which is sent before the sound sensor is read.
        sound_level: Option<u32>,
    },

    /// An iteration was cut short by a driver error (bounded wait only).
    Fault(Error),
}
