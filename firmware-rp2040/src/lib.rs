//! NMEA-0183 heading monitor for RP2040.
//!
//! This crate provides the embedded implementation of a heading monitor
//! that reads NMEA-0183 sentences from a heading sensor over UART and
//! shows the reconciled headings on a serial character display.
//!
//! # Overview
//!
//! The firmware runs on a Raspberry Pi Pico (RP2040) and:
//! 1. Receives NMEA-0183 sentences over UART (4800 baud, 8N1)
//! 2. Tracks the last-known true (`HDT`) and magnetic (`HDM`) headings
//! 3. Writes both headings and their normalized deviation to a 16x2
//!    serial character display
//! 4. Clears the tracked headings when the reset button is pressed
//!
//! # Hardware Configuration
//!
//! | Function   | GPIO | Description |
//! |------------|------|-------------|
//! | UART0 RX   | 1    | Heading sensor input (NMEA-0183, 4800 baud) |
//! | UART1 TX   | 8    | Serial character display (9600 baud) |
//! | Button     | 16   | Heading reset (active low, internal pull-up) |
//! | LED        | 25   | On-board LED (error indicator) |
//!
//! # Architecture
//!
//! The firmware uses the Embassy async runtime with three concurrent tasks:
//!
//! - **Reader Task**: Feeds UART bytes through the sentence parser,
//!   updates the heading tracker, and handles reset requests. The
//!   tracker lives in this one task, so its state has a single writer.
//! - **Display Task**: Receives snapshots and repaints the display.
//! - **Button Task**: Debounces the reset button and raises reset
//!   requests.
//!
//! Snapshots travel between tasks via Embassy's
//! [`Signal`](embassy_sync::signal::Signal) with "latest value wins"
//! semantics, ensuring the display always reflects the most recent
//! tracker state.
//!
//! # Modules
//!
//! - [`input`]: UART-based sentence source ([`UartSentenceSource`])
//! - [`display`]: Serial character display sink ([`SerialDisplay`])
//! - [`button`]: Debounced reset button ([`ResetButton`])
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//!
//! # Re-exports
//!
//! This crate re-exports all public items from [`heading_core`] for
//! convenience, so consumers only need to depend on this crate.

#![no_std]

// Re-export core types for convenience
pub use heading_core::{
    normalize_degrees, DisplayError, DisplaySink, HeadingMonitor, HeadingSnapshot, HeadingTracker,
    MonitorError, Sentence, SentenceKind, SentenceParser, SentenceSource, SourceError,
};

pub mod button;
pub mod display;
pub mod input;

pub use button::ResetButton;
pub use display::SerialDisplay;
pub use input::UartSentenceSource;
