//! Heading state tracking and reconciliation.

use crate::angle::normalize_degrees;
use nmea_proto::{Sentence, SentenceKind};

/// Value snapshot of the tracker's outputs, for hand-off to the
/// presentation side.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeadingSnapshot {
    /// Heading relative to geographic north, degrees in `[0, 360)`.
    pub true_bearing: Option<f32>,
    /// Heading relative to magnetic north, degrees in `[0, 360)`.
    pub magnetic_bearing: Option<f32>,
    /// Normalized deviation `magnetic - true` in `(-180, 180]`; `None`
    /// until both bearings have been observed.
    pub compass_error: Option<f32>,
}

/// Tracks the last-known true and magnetic headings.
///
/// Both bearings start unset; "unset" is an explicit absent state, never
/// conflated with 0° (a legitimate heading). State only ever changes in
/// [`on_sentence`](Self::on_sentence) and [`reset`](Self::reset).
///
/// Sentences with an invalid checksum are still dispatched; a corrupted
/// numeric field then fails the parse below and the prior value is
/// retained, which keeps data available on a noisy serial line.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingTracker {
    true_bearing: Option<f32>,
    magnetic_bearing: Option<f32>,
}

impl HeadingTracker {
    /// Create a tracker with both bearings unset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            true_bearing: None,
            magnetic_bearing: None,
        }
    }

    /// Update state from a completed sentence, dispatched by kind.
    ///
    /// A term that is empty or does not parse as a finite number leaves
    /// the corresponding bearing unchanged: stale data is preferred over
    /// a display gap. Unrecognized sentence kinds have no effect.
    pub fn on_sentence(&mut self, sentence: &Sentence) {
        match sentence.kind() {
            SentenceKind::TrueHeading => {
                if let Some(v) = parse_bearing(sentence.term(1)) {
                    self.true_bearing = Some(v);
                }
            }
            SentenceKind::MagneticHeading => {
                if let Some(v) = parse_bearing(sentence.term(1)) {
                    self.magnetic_bearing = Some(v);
                }
            }
            SentenceKind::Unrecognized => {}
        }
    }

    /// Return both bearings to the unset state. Idempotent.
    pub fn reset(&mut self) {
        self.true_bearing = None;
        self.magnetic_bearing = None;
    }

    /// Last observed true heading, if any.
    #[inline]
    #[must_use]
    pub fn true_bearing(&self) -> Option<f32> {
        self.true_bearing
    }

    /// Last observed magnetic heading, if any.
    #[inline]
    #[must_use]
    pub fn magnetic_bearing(&self) -> Option<f32> {
        self.magnetic_bearing
    }

    /// Normalized deviation `magnetic - true`, or `None` while either
    /// bearing is unset.
    ///
    /// Positive values are westward deviation, negative eastward. The
    /// shortest-path difference is used, never the raw subtraction.
    #[must_use]
    pub fn compass_error(&self) -> Option<f32> {
        match (self.true_bearing, self.magnetic_bearing) {
            (Some(t), Some(m)) => Some(normalize_degrees(m - t)),
            _ => None,
        }
    }

    /// Snapshot all three outputs at once.
    #[must_use]
    pub fn snapshot(&self) -> HeadingSnapshot {
        HeadingSnapshot {
            true_bearing: self.true_bearing,
            magnetic_bearing: self.magnetic_bearing,
            compass_error: self.compass_error(),
        }
    }
}

impl Default for HeadingTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a bearing term, rejecting empty and non-finite values.
fn parse_bearing(term: &str) -> Option<f32> {
    if term.is_empty() {
        return None;
    }
    term.parse::<f32>().ok().filter(|v| v.is_finite())
}
