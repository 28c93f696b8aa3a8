//! Byte-at-a-time NMEA-0183 sentence framing.
//!
//! [`SentenceParser`] accumulates raw bytes into a bounded buffer,
//! detects sentence boundaries and the checksum field per the NMEA-0183
//! framing rules, and yields each completed [`Sentence`] exactly once.
//! It loops indefinitely; there is no terminal state.
//!
//! Framing failures (buffer overflow, line noise, an unterminated body)
//! discard the accumulated data and resynchronize to the idle state
//! without yielding anything. A checksum mismatch is not a framing
//! failure: the sentence still completes, flagged via
//! [`Sentence::checksum_valid`].

use crate::sentence::{Sentence, MAX_BODY_LEN, MAX_SENTENCE_LEN};
use heapless::String;

/// Parser state.
#[derive(Clone, Copy)]
enum ParserState {
    /// Scanning for the `$` start delimiter.
    Idle,
    /// Accumulating the body until the `*` checksum delimiter.
    Body,
    /// Collecting the two hex checksum digits.
    Checksum { high: Option<u8> },
    /// Consuming the CR/LF line terminator.
    Terminator,
}

/// Incremental NMEA-0183 sentence parser.
///
/// Feed one byte at a time; a reference to the completed sentence is
/// returned on the call that finishes it. The last completed sentence is
/// retained until the next one completes.
pub struct SentenceParser {
    raw: String<MAX_SENTENCE_LEN>,
    /// Offset of the `*` delimiter in `raw`, set on leaving `Body`.
    body_end: usize,
    /// XOR of body bytes, accumulated while in `Body`.
    running_xor: u8,
    /// Checksum verdict for the sentence currently terminating.
    pending_valid: bool,
    state: ParserState,
    last: Option<Sentence>,
}

impl SentenceParser {
    /// Create a new parser in the idle state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            raw: String::new(),
            body_end: 0,
            running_xor: 0,
            pending_valid: false,
            state: ParserState::Idle,
            last: None,
        }
    }

    /// Discard any partially accumulated sentence and return to idle.
    ///
    /// The last completed sentence is unaffected. Useful after a
    /// transport-level error, when the bytes in flight can no longer be
    /// trusted to line up with a sentence boundary.
    pub fn reset(&mut self) {
        self.raw.clear();
        self.state = ParserState::Idle;
    }

    /// The most recently completed sentence, if any.
    #[inline]
    #[must_use]
    pub fn last_sentence(&self) -> Option<&Sentence> {
        self.last.as_ref()
    }

    /// Feed a single byte.
    ///
    /// Returns `Some(sentence)` exactly once per completed sentence, on
    /// the call that delivers its final byte. All other calls return
    /// `None`.
    pub fn feed(&mut self, byte: u8) -> Option<&Sentence> {
        match self.state {
            ParserState::Idle => {
                // Inter-sentence noise is legal and ignored.
                if byte == b'$' {
                    self.begin_sentence();
                }
                None
            }
            ParserState::Body => {
                match byte {
                    // A new start delimiter before the previous sentence
                    // terminated: resynchronize on the new sentence.
                    b'$' => self.begin_sentence(),
                    b'*' => {
                        self.body_end = self.raw.len();
                        self.push_raw(b'*');
                        self.state = ParserState::Checksum { high: None };
                    }
                    b if b.is_ascii_graphic() || b == b' ' => {
                        if self.raw.len() - 1 >= MAX_BODY_LEN {
                            // Overflow: nothing is produced.
                            self.reset();
                        } else {
                            self.running_xor ^= b;
                            self.push_raw(b);
                        }
                    }
                    // Control bytes or line noise: the body cannot be
                    // trusted, discard it.
                    _ => self.reset(),
                }
                None
            }
            ParserState::Checksum { high } => {
                match hex_value(byte) {
                    Some(digit) => {
                        self.push_raw(byte);
                        match high {
                            None => {
                                self.state = ParserState::Checksum { high: Some(digit) };
                            }
                            Some(hi) => {
                                self.pending_valid = (hi << 4 | digit) == self.running_xor;
                                self.state = ParserState::Terminator;
                            }
                        }
                    }
                    None if byte == b'$' => self.begin_sentence(),
                    None => self.reset(),
                }
                None
            }
            ParserState::Terminator => match byte {
                b'\r' => {
                    self.push_raw(b'\r');
                    None
                }
                b'\n' => {
                    self.push_raw(b'\n');
                    self.complete();
                    self.last.as_ref()
                }
                other => {
                    // Terminator cut short: complete the sentence as
                    // observed, then re-dispatch the byte so a start
                    // delimiter that follows is not dropped.
                    self.complete();
                    if other == b'$' {
                        self.begin_sentence();
                    }
                    self.last.as_ref()
                }
            },
        }
    }

    fn begin_sentence(&mut self) {
        self.raw.clear();
        self.push_raw(b'$');
        self.body_end = 0;
        self.running_xor = 0;
        self.state = ParserState::Body;
    }

    fn complete(&mut self) {
        self.last = Some(Sentence {
            raw: self.raw.clone(),
            body_end: self.body_end,
            checksum_valid: self.pending_valid,
        });
        self.raw.clear();
        self.state = ParserState::Idle;
    }

    /// Append to the raw text, dropping the byte if the buffer is full.
    /// Body length is bounded separately; this only saturates the
    /// diagnostic text on pathological terminator runs.
    fn push_raw(&mut self, byte: u8) {
        let _ = self.raw.push(byte as char);
    }
}

impl Default for SentenceParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a hex character to its value, either case.
#[inline]
fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'A'..=b'F' => Some(b - b'A' + 10),
        b'a'..=b'f' => Some(b - b'a' + 10),
        _ => None,
    }
}
