//! URL safety checks module
//!
//! Strict percent-decoding and the scheme-prefix gate applied to untrusted
//! destination strings before they are reflected anywhere.

use percent_encoding::percent_decode_str;
use std::fmt;

/// Error produced by [`decode_component`]
///
/// Distinct from a failed scheme check: a malformed escape means the client
/// sent bytes we refuse to interpret at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A `%` not followed by two hex digits
    BadEscape,
    /// Decoded bytes are not valid UTF-8
    InvalidUtf8,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadEscape => write!(f, "malformed percent-escape"),
            Self::InvalidUtf8 => write!(f, "decoded bytes are not valid UTF-8"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Check whether a string starts with `http://` or `https://` (case-insensitive)
///
/// This is a minimal safety gate, not full URL validation: anything after the
/// scheme is accepted. Callers must still HTML-escape the value before
/// embedding it.
pub fn has_http_scheme(value: &str) -> bool {
    value
        .get(..7)
        .is_some_and(|p| p.eq_ignore_ascii_case("http://"))
        || value
            .get(..8)
            .is_some_and(|p| p.eq_ignore_ascii_case("https://"))
}

/// Strictly percent-decode a path component
///
/// `percent_decode_str` passes malformed escapes through unchanged, so the
/// escape shape is validated up front: every `%` must be followed by exactly
/// two hex digits.
pub fn decode_component(raw: &str) -> Result<String, DecodeError> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len()
                || !bytes[i + 1].is_ascii_hexdigit()
                || !bytes[i + 2].is_ascii_hexdigit()
            {
                return Err(DecodeError::BadEscape);
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| DecodeError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_accepts_http_and_https() {
        assert!(has_http_scheme("http://example.com"));
        assert!(has_http_scheme("https://example.com/path?q=1"));
        assert!(has_http_scheme("HTTP://UPPER.CASE"));
        assert!(has_http_scheme("HtTpS://mixed"));
        // Anything after the scheme is accepted by design
        assert!(has_http_scheme("https:// not really a url"));
    }

    #[test]
    fn test_scheme_rejects_everything_else() {
        assert!(!has_http_scheme(""));
        assert!(!has_http_scheme("not-a-url"));
        assert!(!has_http_scheme("ftp://example.com"));
        assert!(!has_http_scheme("javascript:alert(1)"));
        assert!(!has_http_scheme("http:/example.com"));
        assert!(!has_http_scheme("//example.com"));
        assert!(!has_http_scheme("http"));
    }

    #[test]
    fn test_scheme_check_is_multibyte_safe() {
        assert!(!has_http_scheme("héttp://"));
        assert!(!has_http_scheme("日本語"));
    }

    #[test]
    fn test_decode_valid_escapes() {
        assert_eq!(
            decode_component("https%3A%2F%2Fexample.org%2Fx").as_deref(),
            Ok("https://example.org/x")
        );
        assert_eq!(decode_component("plain").as_deref(), Ok("plain"));
        assert_eq!(decode_component("a%20b").as_deref(), Ok("a b"));
        assert_eq!(decode_component("").as_deref(), Ok(""));
    }

    #[test]
    fn test_decode_rejects_malformed_escapes() {
        assert_eq!(decode_component("%"), Err(DecodeError::BadEscape));
        assert_eq!(decode_component("%2"), Err(DecodeError::BadEscape));
        assert_eq!(decode_component("%zz"), Err(DecodeError::BadEscape));
        assert_eq!(decode_component("ok%"), Err(DecodeError::BadEscape));
        assert_eq!(decode_component("a%2Gb"), Err(DecodeError::BadEscape));
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        // %FF alone is not a valid UTF-8 sequence
        assert_eq!(decode_component("%FF"), Err(DecodeError::InvalidUtf8));
    }

    #[test]
    fn test_decode_preserves_plus_sign() {
        // Path components are not form data; '+' stays literal
        assert_eq!(decode_component("a+b").as_deref(), Ok("a+b"));
    }
}
