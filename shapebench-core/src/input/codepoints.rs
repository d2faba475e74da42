//! Delimiter-tolerant hex codepoint list parsing
//!
//! Accepts the forgiving syntax of `--unicodes`: hex values separated by any
//! mix of punctuation and `U+`-style prefixes, e.g. `U+41,U+42` or
//! `0x61 0x62` or `61;62`.

use crate::error::{Error, Result};

/// Characters skipped between hex values. The letters cover common prefix
/// spellings (`U+41`, `0x41`, `\u41`, ...).
const DELIMITERS: &str = "<+>{},;&#\\xXuUnNiI\n\t\u{B}\u{C}\r ";

/// Marker buffer a resolved `*` list materializes to; expansion is the
/// consumer's job.
pub const ALL_CODEPOINTS_MARKER: &[u8] = b"*";

/// Parsed form of a codepoint list option
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Codepoints {
    /// The `*` sentinel: every codepoint, left unexpanded
    All,
    /// An explicit sequence of values, in input order
    Scalars(Vec<u32>),
}

impl Codepoints {
    /// Materialize the list as an owned UTF-8 text buffer.
    ///
    /// Values outside the Unicode scalar range (surrogates, > 0x10FFFF) pass
    /// through parsing untouched but become U+FFFD here. The `All` sentinel
    /// materializes as the one-byte `*` marker.
    pub fn into_text(self) -> Vec<u8> {
        match self {
            Codepoints::All => ALL_CODEPOINTS_MARKER.to_vec(),
            Codepoints::Scalars(values) => {
                let mut text = String::with_capacity(values.len() * 4);
                for value in values {
                    text.push(char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER));
                }
                text.into_bytes()
            }
        }
    }
}

/// Parse a codepoint list option value.
///
/// An input consisting solely of `*` yields [`Codepoints::All`] without any
/// numeric parsing. Otherwise each maximal run of hex digits between
/// delimiters becomes one value. Any other character, or a hex run too long
/// for `u32`, fails the whole parse; the error carries the remaining input
/// starting at the offending token.
pub fn parse_codepoints(input: &str) -> Result<Codepoints> {
    if input == "*" {
        return Ok(Codepoints::All);
    }

    let mut values = Vec::new();
    let mut rest = input;
    loop {
        rest = rest.trim_start_matches(|c| DELIMITERS.contains(c));
        if rest.is_empty() {
            break;
        }

        let digits = rest
            .find(|c: char| !c.is_ascii_hexdigit())
            .unwrap_or(rest.len());
        if digits == 0 {
            return Err(Error::MalformedCodepoints(rest.to_string()));
        }

        let value = u32::from_str_radix(&rest[..digits], 16)
            .map_err(|_| Error::MalformedCodepoints(rest.to_string()))?;
        values.push(value);
        rest = &rest[digits..];
    }

    Ok(Codepoints::Scalars(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_space_and_comma_separated_values() {
        let parsed = parse_codepoints("41 42,43").unwrap();
        assert_eq!(parsed, Codepoints::Scalars(vec![0x41, 0x42, 0x43]));
    }

    #[test]
    fn parses_u_plus_prefixed_values() {
        let parsed = parse_codepoints("U+1F600,U+1F601").unwrap();
        assert_eq!(parsed, Codepoints::Scalars(vec![0x1F600, 0x1F601]));
    }

    #[test]
    fn parses_0x_prefixed_values() {
        // The leading 0 parses as its own value; matches the historical
        // strtoul-based behavior.
        let parsed = parse_codepoints("0x61 0x62").unwrap();
        assert_eq!(parsed, Codepoints::Scalars(vec![0, 0x61, 0, 0x62]));
    }

    #[test]
    fn collapses_delimiter_runs() {
        let parsed = parse_codepoints(";;  41\t\n{42}").unwrap();
        assert_eq!(parsed, Codepoints::Scalars(vec![0x41, 0x42]));
    }

    #[test]
    fn star_is_the_sentinel_not_a_value() {
        assert_eq!(parse_codepoints("*").unwrap(), Codepoints::All);
    }

    #[test]
    fn empty_input_is_an_empty_sequence() {
        assert_eq!(parse_codepoints("").unwrap(), Codepoints::Scalars(vec![]));
    }

    #[test]
    fn non_hex_token_fails_with_remaining_input() {
        let err = parse_codepoints("41 zz 42").unwrap_err();
        match err {
            Error::MalformedCodepoints(at) => assert_eq!(at, "zz 42"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn overlong_hex_run_fails() {
        let err = parse_codepoints("FFFFFFFFF").unwrap_err();
        assert!(matches!(err, Error::MalformedCodepoints(_)));
    }

    #[test]
    fn out_of_range_values_pass_through_parsing() {
        let parsed = parse_codepoints("110000 D800").unwrap();
        assert_eq!(parsed, Codepoints::Scalars(vec![0x110000, 0xD800]));
    }

    #[test]
    fn out_of_range_values_materialize_as_replacement_char() {
        let text = Codepoints::Scalars(vec![0x41, 0x110000, 0xD800]).into_text();
        assert_eq!(text, "A\u{FFFD}\u{FFFD}".as_bytes());
    }

    #[test]
    fn all_materializes_as_marker() {
        assert_eq!(Codepoints::All.into_text(), ALL_CODEPOINTS_MARKER);
    }

    proptest! {
        /// Serializing a parsed sequence back to hex and re-parsing yields
        /// the same sequence, for any delimiter choice.
        #[test]
        fn round_trip_is_stable(
            values in proptest::collection::vec(0u32..=0x10FFFF, 0..64),
            delim in proptest::sample::select(vec![" ", ",", ";", "\n", "}{"]),
        ) {
            let serialized = values
                .iter()
                .map(|v| format!("{v:X}"))
                .collect::<Vec<_>>()
                .join(delim);
            let reparsed = parse_codepoints(&serialized).unwrap();
            prop_assert_eq!(reparsed, Codepoints::Scalars(values));
        }
    }
}
