//! Completed sentence values and typed sentence dispatch.

use heapless::String;

/// Maximum accumulated body length, per the protocol's nominal
/// 82-character sentence limit.
pub const MAX_BODY_LEN: usize = 82;

/// Maximum raw sentence length including the `$`, `*hh` checksum field,
/// and CR/LF terminator.
pub const MAX_SENTENCE_LEN: usize = MAX_BODY_LEN + 8;

/// Recognized sentence kinds, decided once at dispatch time.
///
/// Anything other than the two heading sentences is `Unrecognized` and
/// has no effect downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SentenceKind {
    /// `HDT` - heading relative to geographic north.
    TrueHeading,
    /// `HDM` - heading relative to magnetic north.
    MagneticHeading,
    /// Any other type code.
    Unrecognized,
}

impl SentenceKind {
    /// Classify a three-character sentence type code.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code {
            "HDT" => Self::TrueHeading,
            "HDM" => Self::MagneticHeading,
            _ => Self::Unrecognized,
        }
    }
}

/// A fully framed NMEA-0183 sentence.
///
/// Produced by [`SentenceParser`](crate::parser::SentenceParser) once per
/// completed parse; partially received data is never exposed. The raw
/// text is kept verbatim for diagnostics, and all queries slice into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub(crate) raw: String<MAX_SENTENCE_LEN>,
    /// Byte offset of the `*` checksum delimiter within `raw`.
    pub(crate) body_end: usize,
    pub(crate) checksum_valid: bool,
}

impl Sentence {
    /// The exact received text from `$` through the observed terminating
    /// sequence, inclusive.
    #[inline]
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The sentence body: everything strictly between `$` and `*`.
    #[inline]
    #[must_use]
    pub fn body(&self) -> &str {
        &self.raw[1..self.body_end]
    }

    /// Two-character talker id, or `""` if the body is shorter.
    ///
    /// The talker id is not semantically interpreted here.
    #[must_use]
    pub fn talker_id(&self) -> &str {
        self.body().get(..2).unwrap_or("")
    }

    /// Three-character sentence type code, or `""` if the body is shorter
    /// than five characters (a degraded result, not an error).
    #[must_use]
    pub fn type_code(&self) -> &str {
        self.body().get(2..5).unwrap_or("")
    }

    /// The `index`-th comma-delimited field of the body.
    ///
    /// `term(0)` is the address field itself (talker id + type code).
    /// Out-of-range access yields `""`, indistinguishable from an
    /// explicitly empty field; callers must treat `""` as "absent".
    #[must_use]
    pub fn term(&self, index: usize) -> &str {
        self.body().split(',').nth(index).unwrap_or("")
    }

    /// Whether the received two-hex-digit checksum matched the XOR of the
    /// body. Completion is signaled either way; acting on an invalid
    /// sentence is the caller's decision.
    #[inline]
    #[must_use]
    pub fn checksum_valid(&self) -> bool {
        self.checksum_valid
    }

    /// Classify this sentence by its type code.
    #[must_use]
    pub fn kind(&self) -> SentenceKind {
        SentenceKind::from_code(self.type_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::SentenceParser;

    fn parse_one(wire: &str) -> Sentence {
        let mut parser = SentenceParser::new();
        let mut last = None;
        for &byte in wire.as_bytes() {
            if let Some(sentence) = parser.feed(byte) {
                last = Some(sentence.clone());
            }
        }
        last.expect("sentence did not complete")
    }

    #[test]
    fn test_kind_from_code() {
        assert_eq!(SentenceKind::from_code("HDT"), SentenceKind::TrueHeading);
        assert_eq!(SentenceKind::from_code("HDM"), SentenceKind::MagneticHeading);
        assert_eq!(SentenceKind::from_code("GGA"), SentenceKind::Unrecognized);
        assert_eq!(SentenceKind::from_code(""), SentenceKind::Unrecognized);
        // Lowercase is not a valid type code
        assert_eq!(SentenceKind::from_code("hdt"), SentenceKind::Unrecognized);
    }

    #[test]
    fn test_sentence_accessors() {
        let s = parse_one("$HEHDT,123.4,T*2B\r\n");
        assert_eq!(s.raw(), "$HEHDT,123.4,T*2B\r\n");
        assert_eq!(s.body(), "HEHDT,123.4,T");
        assert_eq!(s.talker_id(), "HE");
        assert_eq!(s.type_code(), "HDT");
        assert_eq!(s.kind(), SentenceKind::TrueHeading);
        assert_eq!(s.term(0), "HEHDT");
        assert_eq!(s.term(1), "123.4");
        assert_eq!(s.term(2), "T");
        assert!(s.checksum_valid());
    }

    #[test]
    fn test_term_out_of_range_is_empty() {
        let s = parse_one("$HEHDT,123.4,T*2B\r\n");
        assert_eq!(s.term(3), "");
        assert_eq!(s.term(17), "");
    }

    #[test]
    fn test_empty_fields_preserved() {
        // XOR of "HEHDT,,T" is 0x01
        let s = parse_one("$HEHDT,,T*01\r\n");
        assert_eq!(s.term(1), "");
        assert_eq!(s.term(2), "T");
    }

    #[test]
    fn test_short_body_degrades() {
        // XOR of "HD" is 0x0C
        let s = parse_one("$HD*0C\r\n");
        assert_eq!(s.talker_id(), "HD");
        assert_eq!(s.type_code(), "");
        assert_eq!(s.kind(), SentenceKind::Unrecognized);
    }
}
