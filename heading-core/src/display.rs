//! Display sink trait and error types.

use core::future::Future;

use crate::tracker::HeadingSnapshot;

/// Error type for display operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// I/O error while writing to the device.
    Io,
    /// Device not ready.
    NotReady,
}

/// Async trait for heading display sinks.
///
/// This trait abstracts the presentation device, enabling different
/// outputs (serial character display, debug console, test capture).
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait DisplaySink {
    /// Present a heading snapshot.
    ///
    /// May block until the previous update has been written out.
    fn show(&mut self, snapshot: &HeadingSnapshot) -> impl Future<Output = Result<(), DisplayError>>;

    /// Check if the display is ready to accept data.
    fn is_ready(&self) -> bool;
}
