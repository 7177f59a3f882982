//! HTML escaping module
//!
//! Entity-escapes untrusted text before it is embedded in HTML body or
//! attribute positions.

/// Escape the five HTML-significant characters
///
/// Single-pass substitution, so an `&` introduced by a later entity can never
/// be escaped twice.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unescape(value: &str) -> String {
        value
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&#39;", "'")
            .replace("&amp;", "&")
    }

    #[test]
    fn test_escapes_all_five_characters() {
        let escaped = escape_html(r#"<a href="x" onclick='f(&)'>y</a>"#);
        for raw in ['<', '>', '"', '\''] {
            assert!(!escaped.contains(raw), "raw {raw} left in {escaped}");
        }
        // Every remaining '&' must open an entity we produced
        for (i, _) in escaped.match_indices('&') {
            let rest = &escaped[i..];
            assert!(
                ["&amp;", "&lt;", "&gt;", "&quot;", "&#39;"]
                    .iter()
                    .any(|e| rest.starts_with(e)),
                "bare & in {escaped}"
            );
        }
    }

    #[test]
    fn test_round_trip() {
        let original = r#"&<>"' plus &amp; already-escaped text"#;
        assert_eq!(unescape(&escape_html(original)), original);
    }

    #[test]
    fn test_no_double_escaping_of_ampersand() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_html("https://example.com/path?a=1"), "https://example.com/path?a=1");
        assert_eq!(escape_html(""), "");
    }
}
