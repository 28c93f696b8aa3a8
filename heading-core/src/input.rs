//! Sentence source trait and error types.

use core::future::Future;
use nmea_proto::Sentence;

/// Error type for sentence input operations.
///
/// These are transport-level failures; framing problems inside the byte
/// stream are handled silently by the parser and never surface here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SourceError {
    /// Transport I/O error.
    Io,
    /// Serial framing error (bad start/stop bits).
    Framing,
    /// Receiver overrun; bytes were lost.
    Overrun,
    /// Parity error on the line.
    Parity,
}

/// Async trait for sentence sources.
///
/// This trait abstracts the byte transport plus framing, allowing
/// different implementations (UART, TCP, replayed logs) to be used
/// interchangeably.
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait SentenceSource {
    /// Wait for and return the next completed sentence.
    ///
    /// This is an async operation that yields while no data is available.
    fn receive(&mut self) -> impl Future<Output = Result<Sentence, SourceError>>;

    /// Check if the source is connected/ready.
    fn is_connected(&self) -> bool;
}
