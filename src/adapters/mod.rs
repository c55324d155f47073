//! Adapters: concrete implementations of the port traits that are not
//! register-level drivers.
//!
//! | Adapter    | Implements                              | Connects to          |
//! |------------|-----------------------------------------|----------------------|
//! | `log_sink` | EventSink                               | `log` facade         |
//! | `sim`      | AnalogSampler, SerialTransmitter,       | in-memory state,     |
//! |            | InputPin, StatefulOutputPin, DelayNs    | virtual clock        |

pub mod log_sink;
#[cfg(not(target_arch = "avr"))]
pub mod sim;
