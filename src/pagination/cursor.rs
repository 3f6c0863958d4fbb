//! Opaque cursor encoding
//!
//! A cursor is `base64("<prefix>_<id>")`, with `user` as the default prefix.
//! The format is part of the wire contract: cursors produced here must stay
//! byte-for-byte identical across releases.

use crate::error::{Error, Result};
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use regex::Regex;
use std::sync::LazyLock;

/// Default tag prefix for record cursors
pub const DEFAULT_CURSOR_PREFIX: &str = "user";

/// Standard alphabet, padded on encode, padding optional on decode
const CURSOR_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Pattern for the default prefix: user_<digits>
static DEFAULT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^user_([0-9]+)").unwrap());

/// Encodes record ids into cursors and back
#[derive(Debug, Clone)]
pub struct CursorCodec {
    prefix: String,
    pattern: Regex,
}

impl Default for CursorCodec {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_CURSOR_PREFIX.to_string(),
            pattern: DEFAULT_PATTERN.clone(),
        }
    }
}

impl CursorCodec {
    /// Create a codec for a custom tag prefix
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(Error::invalid_config_value(
                "cursor_prefix",
                "prefix cannot be empty",
            ));
        }

        let pattern = Regex::new(&format!("^{}_([0-9]+)", regex::escape(&prefix)))
            .map_err(|e| Error::invalid_config_value("cursor_prefix", e.to_string()))?;

        Ok(Self { prefix, pattern })
    }

    /// Tag prefix used by this codec
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Encode a record id as an opaque cursor
    pub fn encode(&self, id: u64) -> String {
        CURSOR_ENGINE.encode(format!("{}_{id}", self.prefix))
    }

    /// Decode a cursor back to the record id it points at
    ///
    /// Returns `None` for anything that was not produced by [`encode`](Self::encode):
    /// bad base64, a foreign tag, or digits that overflow `u64`. Text after the
    /// digits is ignored.
    pub fn decode(&self, cursor: &str) -> Option<u64> {
        let bytes = CURSOR_ENGINE.decode(cursor).ok()?;
        let text = String::from_utf8_lossy(&bytes);

        let digits = self.pattern.captures(&text)?.get(1)?;
        digits.as_str().parse::<u64>().ok()
    }
}

/// Encode an id with the default `user` prefix
pub fn encode_cursor(id: u64) -> String {
    CursorCodec::default().encode(id)
}

/// Decode a cursor with the default `user` prefix
pub fn decode_cursor(cursor: &str) -> Option<u64> {
    CursorCodec::default().decode(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(1, "dXNlcl8x" ; "single digit")]
    #[test_case(10, "dXNlcl8xMA==" ; "padded")]
    #[test_case(0, "dXNlcl8w" ; "zero")]
    #[test_case(123, "dXNlcl8xMjM=" ; "three digits")]
    fn test_encode_wire_format(id: u64, expected: &str) {
        assert_eq!(encode_cursor(id), expected);
        assert_eq!(decode_cursor(expected), Some(id));
    }

    #[test_case("" ; "empty")]
    #[test_case("garbage" ; "not base64")]
    #[test_case("%%%%" ; "invalid alphabet")]
    #[test_case("ZmRz" ; "foreign text")]
    #[test_case("dXNlcl8=" ; "prefix without digits")]
    #[test_case("eHVzZXJfMQ==" ; "prefix not anchored")]
    fn test_decode_invalid(cursor: &str) {
        assert_eq!(decode_cursor(cursor), None);
    }

    #[test]
    fn test_decode_rejects_overflowing_id() {
        let cursor = CURSOR_ENGINE.encode("user_18446744073709551616");
        assert_eq!(decode_cursor(&cursor), None);

        let max = encode_cursor(u64::MAX);
        assert_eq!(decode_cursor(&max), Some(u64::MAX));
    }

    #[test]
    fn test_decode_ignores_trailing_text() {
        let cursor = CURSOR_ENGINE.encode("user_42_extra");
        assert_eq!(decode_cursor(&cursor), Some(42));
    }

    #[test]
    fn test_decode_accepts_missing_padding() {
        assert_eq!(decode_cursor("dXNlcl8xMA"), Some(10));
    }

    #[test]
    fn test_custom_prefix() {
        let codec = CursorCodec::new("order").unwrap();
        assert_eq!(codec.prefix(), "order");

        let cursor = codec.encode(7);
        assert_eq!(codec.decode(&cursor), Some(7));

        // Cursors are not interchangeable between prefixes
        assert_eq!(decode_cursor(&cursor), None);
        assert_eq!(codec.decode(&encode_cursor(7)), None);
    }

    #[test]
    fn test_custom_prefix_is_escaped() {
        let codec = CursorCodec::new("a.b").unwrap();
        let foreign = CURSOR_ENGINE.encode("axb_5");
        assert_eq!(codec.decode(&foreign), None);
        assert_eq!(codec.decode(&codec.encode(5)), Some(5));
    }

    #[test]
    fn test_empty_prefix_rejected() {
        assert!(CursorCodec::new("").is_err());
    }
}
