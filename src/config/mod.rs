// Configuration module entry point
// Loads settings for the invalid-method response, logging and the demo server

mod types;

use std::net::SocketAddr;

pub use types::{Config, InvalidConfig, InvalidFormat, LoggingConfig, ServerConfig};

/// Default config file, resolved without extension
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from `config.toml` (if present) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// Missing files are not an error; every key has a default.
    /// Environment variables such as `METHOD_SWITCH_INVALID__BODY` override file values.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("METHOD_SWITCH")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.dispatch_log", false)?
            .set_default("invalid.status", 405)?
            .set_default("invalid.body", "Invalid method")?
            .set_default("invalid.format", "text")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
