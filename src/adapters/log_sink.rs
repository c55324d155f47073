//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the `log`
//! facade.  On the device no logger is installed (the UART carries only the
//! status protocol), so these records only appear in host builds.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started {
                threshold,
                baud_divisor,
            } => {
                info!("START | threshold={} ubrr={}", threshold, baud_divisor);
            }
            AppEvent::StatusSent {
                code,
                beam_blocked,
                sound_level,
            } => match sound_level {
                Some(level) => info!(
                    "STATUS | sent='{}' | beam={} | sound={}",
                    code,
                    if *beam_blocked { "BLOCKED" } else { "clear" },
                    level,
                ),
                None => info!(
                    "STATUS | sent='{}' | beam={}",
                    code,
                    if *beam_blocked { "BLOCKED" } else { "clear" },
                ),
            },
            AppEvent::Fault(e) => {
                warn!("FAULT | {}", e);
            }
        }
    }
}
