//! HeadingMonitor: connects a sentence source to a display sink.

use crate::display::{DisplayError, DisplaySink};
use crate::input::{SentenceSource, SourceError};
use crate::tracker::HeadingTracker;

/// Drives sentences from an input source through the heading tracker and
/// pushes each fresh snapshot to a display sink.
///
/// This abstraction decouples the transport and presentation
/// implementations, making the system more testable and flexible.
///
/// # Error Handling
///
/// On source errors the tracker is left untouched: the last known good
/// state is retained rather than blanked, so a glitchy serial line
/// degrades to a stale display instead of an empty one.
pub struct HeadingMonitor<S, D> {
    source: S,
    display: D,
    tracker: HeadingTracker,
}

impl<S: SentenceSource, D: DisplaySink> HeadingMonitor<S, D> {
    /// Create a new monitor with both bearings unset.
    pub fn new(source: S, display: D) -> Self {
        Self {
            source,
            display,
            tracker: HeadingTracker::new(),
        }
    }

    /// Run the monitor, updating the display indefinitely.
    ///
    /// This method never returns under normal operation.
    pub async fn run(&mut self) -> ! {
        loop {
            let _ = self.process_one().await;
        }
    }

    /// Process a single sentence and push the resulting snapshot.
    ///
    /// Returns the result of the operation for testing purposes.
    pub async fn process_one(&mut self) -> Result<(), MonitorError> {
        match self.source.receive().await {
            Ok(sentence) => {
                self.tracker.on_sentence(&sentence);
                self.display
                    .show(&self.tracker.snapshot())
                    .await
                    .map_err(MonitorError::Display)
            }
            Err(e) => Err(MonitorError::Source(e)),
        }
    }

    /// Return both bearings to unset and push the blanked snapshot.
    ///
    /// The reset-trigger entry point; idempotent from the tracker's
    /// point of view.
    pub async fn reset_headings(&mut self) -> Result<(), MonitorError> {
        self.tracker.reset();
        self.display
            .show(&self.tracker.snapshot())
            .await
            .map_err(MonitorError::Display)
    }

    /// Get a reference to the heading tracker.
    pub fn tracker(&self) -> &HeadingTracker {
        &self.tracker
    }

    /// Get a reference to the sentence source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a mutable reference to the sentence source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Get a reference to the display sink.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Get a mutable reference to the display sink.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Decompose the monitor into its source and display components.
    pub fn into_parts(self) -> (S, D) {
        (self.source, self.display)
    }
}

/// Error type for monitor operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MonitorError {
    /// Error from the sentence source.
    Source(SourceError),
    /// Error from the display sink.
    Display(DisplayError),
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::tracker::HeadingSnapshot;
    use core::future::Future;
    use core::pin::Pin;
    use core::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};
    use nmea_proto::{xor_checksum, Sentence, SentenceParser};
    use std::format;
    use std::sync::{Arc, Mutex};
    use std::vec;
    use std::vec::Vec;

    /// Parse a framed sentence built from the given body.
    fn sentence(body: &str) -> Sentence {
        let wire = format!("${}*{:02X}\r\n", body, xor_checksum(body.as_bytes()));
        let mut parser = SentenceParser::new();
        let mut last = None;
        for &b in wire.as_bytes() {
            if let Some(s) = parser.feed(b) {
                last = Some(s.clone());
            }
        }
        last.expect("sentence did not complete")
    }

    // Simple mock sentence source
    struct MockSource {
        sentences: Vec<Result<Sentence, SourceError>>,
        index: usize,
    }

    impl MockSource {
        fn new(sentences: Vec<Result<Sentence, SourceError>>) -> Self {
            Self {
                sentences,
                index: 0,
            }
        }
    }

    impl SentenceSource for MockSource {
        fn receive(&mut self) -> impl Future<Output = Result<Sentence, SourceError>> {
            let result = if self.index < self.sentences.len() {
                let r = self.sentences[self.index].clone();
                self.index += 1;
                r
            } else {
                Err(SourceError::Io)
            };
            core::future::ready(result)
        }

        fn is_connected(&self) -> bool {
            self.index < self.sentences.len()
        }
    }

    // Simple mock display sink
    struct MockDisplay {
        shown: Arc<Mutex<Vec<HeadingSnapshot>>>,
    }

    impl MockDisplay {
        fn new() -> Self {
            Self {
                shown: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl DisplaySink for MockDisplay {
        fn show(&mut self, snapshot: &HeadingSnapshot) -> impl Future<Output = Result<(), DisplayError>> {
            self.shown.lock().unwrap().push(*snapshot);
            core::future::ready(Ok(()))
        }

        fn is_ready(&self) -> bool {
            true
        }
    }

    // Helper to run a future to completion (simple blocking executor)
    fn block_on<F: Future>(mut f: F) -> F::Output {
        fn noop_raw_waker() -> RawWaker {
            fn noop(_: *const ()) {}
            fn clone(_: *const ()) -> RawWaker {
                noop_raw_waker()
            }
            static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, noop, noop, noop);
            RawWaker::new(core::ptr::null(), &VTABLE)
        }

        let waker = unsafe { Waker::from_raw(noop_raw_waker()) };
        let mut cx = Context::from_waker(&waker);

        // SAFETY: We don't move f after pinning
        let mut f = unsafe { Pin::new_unchecked(&mut f) };

        loop {
            match f.as_mut().poll(&mut cx) {
                Poll::Ready(result) => return result,
                Poll::Pending => {
                    panic!("Mock future returned Pending unexpectedly");
                }
            }
        }
    }

    #[test]
    fn test_monitor_pushes_snapshot_per_sentence() {
        let source = MockSource::new(vec![
            Ok(sentence("HEHDT,123.4,T")),
            Ok(sentence("HEHDM,045.0,M")),
        ]);
        let display = MockDisplay::new();
        let shown_ref = display.shown.clone();

        let mut monitor = HeadingMonitor::new(source, display);

        assert!(block_on(monitor.process_one()).is_ok());
        assert!(block_on(monitor.process_one()).is_ok());

        let shown = shown_ref.lock().unwrap();
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].true_bearing, Some(123.4));
        assert_eq!(shown[0].compass_error, None);
        assert_eq!(shown[1].magnetic_bearing, Some(45.0));
        assert!(shown[1].compass_error.is_some());
    }

    #[test]
    fn test_monitor_retains_state_on_source_error() {
        let source = MockSource::new(vec![
            Ok(sentence("HEHDT,123.4,T")),
            Err(SourceError::Framing),
        ]);
        let display = MockDisplay::new();
        let shown_ref = display.shown.clone();

        let mut monitor = HeadingMonitor::new(source, display);

        assert!(block_on(monitor.process_one()).is_ok());
        let result = block_on(monitor.process_one());
        assert!(matches!(
            result,
            Err(MonitorError::Source(SourceError::Framing))
        ));

        // The failed read pushed nothing and cleared nothing.
        assert_eq!(shown_ref.lock().unwrap().len(), 1);
        assert_eq!(monitor.tracker().true_bearing(), Some(123.4));
    }

    #[test]
    fn test_reset_pushes_blank_snapshot() {
        let source = MockSource::new(vec![
            Ok(sentence("HEHDT,123.4,T")),
            Ok(sentence("HEHDM,045.0,M")),
        ]);
        let display = MockDisplay::new();
        let shown_ref = display.shown.clone();

        let mut monitor = HeadingMonitor::new(source, display);
        assert!(block_on(monitor.process_one()).is_ok());
        assert!(block_on(monitor.process_one()).is_ok());

        assert!(block_on(monitor.reset_headings()).is_ok());

        let shown = shown_ref.lock().unwrap();
        let last = shown.last().unwrap();
        assert_eq!(last.true_bearing, None);
        assert_eq!(last.magnetic_bearing, None);
        assert_eq!(last.compass_error, None);
    }
}
