// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub site: SiteConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
}

/// Site configuration: static root, fallback document, and short links
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Root directory for static file serving
    pub root: String,
    /// Fallback document served when no file matches (SPA entry page)
    pub index_file: String,
    /// Raw JSON object mapping short-link IDs to destination URLs
    #[serde(default)]
    pub redirect_map: Option<String>,
}
