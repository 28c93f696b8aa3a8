//! Platform-agnostic heading tracking and reconciliation.
//!
//! This crate consumes parsed NMEA-0183 sentences, maintains the most
//! recently observed true and magnetic headings, and derives the
//! wraparound-safe deviation between them. It has no platform-specific
//! dependencies and can be used both in embedded `no_std` environments
//! and on host for testing.
//!
//! # Overview
//!
//! - [`tracker`]: Heading state ([`HeadingTracker`], [`HeadingSnapshot`])
//! - [`angle`]: Wraparound-safe angle arithmetic ([`normalize_degrees`])
//! - [`render`]: Fixed-width text rendering for a character display
//! - [`input`]: Sentence source trait ([`SentenceSource`])
//! - [`display`]: Display sink trait ([`DisplaySink`])
//! - [`monitor`]: Orchestrates source-to-display flow ([`HeadingMonitor`])
//!
//! # Example
//!
//! ```
//! use heading_core::{HeadingTracker, SentenceParser};
//!
//! let mut parser = SentenceParser::new();
//! let mut tracker = HeadingTracker::new();
//!
//! for &byte in b"$HEHDT,123.4,T*2B\r\n$HEHDM,45.0,M*1E\r\n" {
//!     if let Some(sentence) = parser.feed(byte) {
//!         tracker.on_sentence(sentence);
//!     }
//! }
//!
//! assert_eq!(tracker.true_bearing(), Some(123.4));
//! assert_eq!(tracker.magnetic_bearing(), Some(45.0));
//! let error = tracker.compass_error().unwrap();
//! assert!((error - (-78.4)).abs() < 1e-3);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations,
//! making it suitable for embedded systems with limited resources.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod angle;
pub mod display;
pub mod input;
pub mod monitor;
pub mod render;
pub mod tracker;

// Re-export main types at crate root
pub use angle::normalize_degrees;
pub use display::{DisplayError, DisplaySink};
pub use input::{SentenceSource, SourceError};
pub use monitor::{HeadingMonitor, MonitorError};
pub use render::{render_bearing, render_error, render_lines, DISPLAY_COLS};
pub use tracker::{HeadingSnapshot, HeadingTracker};

// Re-export the framing layer so consumers only need this crate
pub use nmea_proto::{Sentence, SentenceKind, SentenceParser};
