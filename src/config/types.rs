// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub invalid: InvalidConfig,
}

/// Server configuration (demo server only)
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log every dispatch decision
    pub dispatch_log: bool,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// Response emitted by the process-wide invalid-method handler
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct InvalidConfig {
    pub status: u16,
    pub body: String,
    #[serde(default)]
    pub format: InvalidFormat,
}

/// Body encoding of the invalid-method response
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvalidFormat {
    #[default]
    Text,
    Json,
}

impl Default for InvalidConfig {
    fn default() -> Self {
        Self {
            status: 405,
            body: "Invalid method".to_string(),
            format: InvalidFormat::Text,
        }
    }
}
