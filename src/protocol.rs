//! One-byte status protocol on the serial line.
//!
//! The device writes bare ASCII bytes with no framing, no length prefix
//! and no acknowledgment.  A host reading the line treats each byte on its
//! own, skipping whitespace and anything it does not recognise.
//!
//! | Byte  | Code                   | Meaning                         |
//! |-------|------------------------|---------------------------------|
//! | `'I'` | [`StatusCode::Intrusion`] | beam interrupted             |
//! | `'S'` | [`StatusCode::Sound`]     | sound threshold exceeded     |
//! | `'B'` | [`StatusCode::Both`]      | both in the same iteration   |

use core::fmt;

use serde::{Deserialize, Serialize};

/// A status token as transmitted on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCode {
    Intrusion,
    Sound,
    Both,
}

impl StatusCode {
    /// The ASCII byte sent for this code.
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Intrusion => b'I',
            Self::Sound => b'S',
            Self::Both => b'B',
        }
    }

    /// Parse a single received byte.  Unknown bytes yield `None`.
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'I' => Some(Self::Intrusion),
            b'S' => Some(Self::Sound),
            b'B' => Some(Self::Both),
            _ => None,
        }
    }

    /// Which sensors a host should mark as triggered for this code.
    pub const fn detection(self) -> Detection {
        match self {
            Self::Intrusion => Detection::Ir,
            Self::Sound => Detection::Sound,
            Self::Both => Detection::Both,
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_byte() as char)
    }
}

impl TryFrom<u8> for StatusCode {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_byte(byte).ok_or(byte)
    }
}

/// Sensor class a status code points at on the monitoring side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Detection {
    /// Infrared beam sensor.
    Ir,
    /// Sound sensor.
    Sound,
    /// Every sensor at once.
    Both,
}

impl Detection {
    pub const fn includes_ir(self) -> bool {
        matches!(self, Self::Ir | Self::Both)
    }

    pub const fn includes_sound(self) -> bool {
        matches!(self, Self::Sound | Self::Both)
    }
}

/// Iterate over the status codes contained in a received byte stream.
///
/// Whitespace (line endings inserted by terminals) and unknown bytes are
/// dropped.
pub fn decode_stream(bytes: &[u8]) -> impl Iterator<Item = StatusCode> + '_ {
    bytes
        .iter()
        .filter(|b| !b.is_ascii_whitespace())
        .filter_map(|&b| StatusCode::from_byte(b))
}
