//! NMEA-0183 sentence framing and checksum handling.
//!
//! This crate reconstructs discrete NMEA-0183 sentences from an unbounded
//! byte stream with no framing guarantees beyond the protocol's own
//! delimiters. It has no chip-specific dependencies and is fully testable
//! on host.
//!
//! # Wire Format
//!
//! ```text
//! $<talker><type>,<term>,<term>,...*<checksum>\r\n
//! ```
//!
//! - `$` - Start delimiter
//! - `talker` - 2-character talker id (originating device class)
//! - `type` - 3-character sentence type code (e.g. `HDT`, `HDM`)
//! - `terms` - Comma-delimited fields
//! - `checksum` - 2 hex digits (XOR of all bytes between `$` and `*`)
//! - `\r\n` - Line terminator
//!
//! # Example
//!
//! ```
//! use nmea_proto::{SentenceKind, SentenceParser};
//!
//! let mut parser = SentenceParser::new();
//!
//! for &byte in b"$HEHDT,123.4,T*2B\r\n" {
//!     if let Some(sentence) = parser.feed(byte) {
//!         assert_eq!(sentence.kind(), SentenceKind::TrueHeading);
//!         assert_eq!(sentence.term(1), "123.4");
//!     }
//! }
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

pub mod checksum;
pub mod parser;
pub mod sentence;

// Re-export main types at crate root
pub use checksum::xor_checksum;
pub use parser::SentenceParser;
pub use sentence::{Sentence, SentenceKind, MAX_BODY_LEN, MAX_SENTENCE_LEN};
