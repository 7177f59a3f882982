// Application state module
// Read-only state shared by every request handler.

use std::collections::HashMap;
use std::sync::atomic::AtomicBool;

use super::redirects;
use super::types::Config;

/// Application state
///
/// Fully constructed before the listener accepts its first connection and
/// never mutated afterwards, so handlers read it without locking.
pub struct AppState {
    pub config: Config,
    /// Short-link table, built once from configuration
    pub redirects: HashMap<String, String>,
    /// Cached access-log flag for lock-free reads on the request path
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let redirects = redirects::load_redirect_map(config.site.redirect_map.as_deref());
        let cached_access_log = AtomicBool::new(config.logging.access_log);

        Self {
            config,
            redirects,
            cached_access_log,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_config;

    #[test]
    fn test_state_builds_default_redirects() {
        let state = AppState::new(test_config());
        assert_eq!(
            state.redirects.get("home").map(String::as_str),
            Some("https://example.com")
        );
    }

    #[test]
    fn test_state_uses_configured_redirects() {
        let mut config = test_config();
        config.site.redirect_map = Some(r#"{"repo": "https://git.example.org"}"#.to_string());
        let state = AppState::new(config);
        assert!(state.redirects.contains_key("repo"));
        assert!(!state.redirects.contains_key("home"));
    }
}
