// Redirect map loader module
// Builds the immutable short-link table from the configured raw JSON value.

use crate::http::url::has_http_scheme;
use crate::logger;
use serde_json::Value;
use std::collections::HashMap;

/// Built-in short links used when no valid map is configured
pub fn default_redirect_map() -> HashMap<String, String> {
    HashMap::from([
        ("home".to_string(), "https://example.com".to_string()),
        ("docs".to_string(), "https://example.com/docs".to_string()),
    ])
}

/// Build the redirect map from the optional raw configuration value
///
/// The raw value must be a JSON object; entries whose value is not a string
/// starting with `http://` or `https://` are dropped. Any malformation, or a
/// cleaned map with zero entries, falls back to the built-in default as a
/// whole. There is never a partial merge between default and parsed entries.
pub fn load_redirect_map(raw: Option<&str>) -> HashMap<String, String> {
    let Some(raw) = raw else {
        return default_redirect_map();
    };

    let entries = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(entries)) => entries,
        Ok(_) => {
            logger::log_warning("Redirect map is not a JSON object, using default map");
            return default_redirect_map();
        }
        Err(e) => {
            logger::log_warning(&format!("Failed to parse redirect map: {e}, using default map"));
            return default_redirect_map();
        }
    };

    let cleaned: HashMap<String, String> = entries
        .into_iter()
        .filter_map(|(id, value)| match value {
            Value::String(url) if has_http_scheme(&url) => Some((id, url)),
            _ => {
                logger::log_warning(&format!("Dropping redirect map entry '{id}': value is not an http(s) URL"));
                None
            }
        })
        .collect();

    if cleaned.is_empty() {
        logger::log_warning("Redirect map has no valid entries, using default map");
        return default_redirect_map();
    }

    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_value_yields_default() {
        assert_eq!(load_redirect_map(None), default_redirect_map());
    }

    #[test]
    fn test_mixed_object_keeps_only_valid_urls() {
        let map = load_redirect_map(Some(r#"{"a": "https://x.test", "b": "not-a-url", "c": 5}"#));
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a").map(String::as_str), Some("https://x.test"));
    }

    #[test]
    fn test_scheme_match_is_case_insensitive() {
        let map = load_redirect_map(Some(r#"{"a": "HTTPS://x.test", "b": "HtTp://y.test"}"#));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_invalid_json_yields_default() {
        assert_eq!(load_redirect_map(Some("{not json")), default_redirect_map());
    }

    #[test]
    fn test_non_object_yields_default() {
        assert_eq!(
            load_redirect_map(Some(r#"["https://x.test"]"#)),
            default_redirect_map()
        );
        assert_eq!(load_redirect_map(Some(r#""https://x.test""#)), default_redirect_map());
        assert_eq!(load_redirect_map(Some("42")), default_redirect_map());
        assert_eq!(load_redirect_map(Some("null")), default_redirect_map());
    }

    #[test]
    fn test_empty_or_all_invalid_object_yields_default() {
        assert_eq!(load_redirect_map(Some("{}")), default_redirect_map());
        assert_eq!(
            load_redirect_map(Some(r#"{"z": "not-a-url"}"#)),
            default_redirect_map()
        );
    }

    #[test]
    fn test_valid_map_replaces_default_entirely() {
        let map = load_redirect_map(Some(r#"{"repo": "https://git.example.org"}"#));
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key("home"));
    }
}
