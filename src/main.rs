//! Silent Intrusion Monitor: firmware entry point (ATmega328P).
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  drivers (register level)                            │
//! │  Adc · Usart · PortBOutput · PortDInput · CycleDelay │
//! │                                                      │
//! │  ───────────── Port trait boundary ─────────────     │
//! │                                                      │
//! │  ┌────────────────────────────────────────────────┐  │
//! │  │  Monitor: beam → sound → combined → delay      │  │
//! │  └────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Build with `--no-default-features --features avr` for an
//! `avr-unknown-gnu-atmega328` target.

#![no_std]
#![no_main]

use silent_intrusion::adapters::log_sink::LogEventSink;
use silent_intrusion::app::service::Monitor;
use silent_intrusion::config::MonitorConfig;
use silent_intrusion::drivers::hw_init;

use panic_halt as _;

const CONFIG: MonitorConfig = MonitorConfig::DEFAULT;

// Reject an out-of-range profile at compile time
const _: () = assert!(CONFIG.validate().is_ok(), "MonitorConfig::DEFAULT is out of range");

#[avr_device::entry]
fn main() -> ! {
    // No logger is installed: the UART belongs to the status protocol.
    let Ok(board) = hw_init::init_board(&CONFIG) else {
        halt()
    };
    let Ok(mut monitor) = Monitor::new(CONFIG, board) else {
        halt()
    };

    monitor.run(&mut LogEventSink::new())
}

/// Park the core.  Outputs keep whatever level they had.
fn halt() -> ! {
    #[allow(clippy::empty_loop)]
    loop {}
}
