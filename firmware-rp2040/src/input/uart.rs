//! UART-based sentence source for the heading sensor line.
//!
//! Reads one byte at a time from the sensor UART and feeds it through
//! the incremental [`SentenceParser`], yielding each completed
//! [`Sentence`]. Framing inside the byte stream (noise, overlong bodies,
//! resynchronization on `$`) is handled entirely by the parser; only
//! transport-level UART failures surface as [`SourceError`].
//!
//! # Pins
//!
//! Uses UART0 by default:
//! - GPIO 0: TX (unused)
//! - GPIO 1: RX (heading sensor data, NMEA-0183 at 4800 baud)

use embassy_rp::uart::{Async, Error as UartError, UartRx};
use heading_core::{SentenceSource, SourceError};
use nmea_proto::{Sentence, SentenceParser};

/// Convert UART errors to [`SourceError`].
///
/// This is a helper function instead of a `From` impl to avoid orphan
/// rule issues (both error types are defined in external crates).
#[inline]
fn uart_error_to_source_error(e: UartError) -> SourceError {
    match e {
        UartError::Framing => SourceError::Framing,
        UartError::Overrun => SourceError::Overrun,
        UartError::Parity => SourceError::Parity,
        _ => SourceError::Io,
    }
}

/// UART-based sentence source.
pub struct UartSentenceSource<'d> {
    rx: UartRx<'d, Async>,
    parser: SentenceParser,
}

impl<'d> UartSentenceSource<'d> {
    /// Create a new sentence source from the given UART receiver.
    #[must_use]
    pub fn new(rx: UartRx<'d, Async>) -> Self {
        Self {
            rx,
            parser: SentenceParser::new(),
        }
    }

    /// The most recently completed sentence, if any.
    #[inline]
    #[must_use]
    pub fn last_sentence(&self) -> Option<&Sentence> {
        self.parser.last_sentence()
    }
}

impl SentenceSource for UartSentenceSource<'_> {
    async fn receive(&mut self) -> Result<Sentence, SourceError> {
        let mut byte = [0u8; 1];

        loop {
            if let Err(e) = self.rx.read(&mut byte).await {
                // Bytes in flight may be torn; any partial sentence can
                // no longer be trusted to line up with the stream.
                self.parser.reset();
                return Err(uart_error_to_source_error(e));
            }

            if let Some(sentence) = self.parser.feed(byte[0]) {
                return Ok(sentence.clone());
            }
        }
    }

    fn is_connected(&self) -> bool {
        // UART is always "connected" if we have the peripheral
        true
    }
}
