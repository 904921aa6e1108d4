// Configuration module entry point
// Manages application configuration and runtime state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LoggingConfig, MimeConfig, ServeConfig, ServerConfig};

impl Config {
    /// Load configuration from the default file path ("playserve.toml"
    /// next to the working directory, if present).
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("playserve")
    }

    /// Load configuration from specified file path (without extension)
    ///
    /// The file is optional; built-in defaults reproduce the zero-config
    /// behavior (port 8000, root next to the executable, browser auto-open).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("PLAYSERVE").separator("__"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("server.open_browser", true)?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let cfg = Config::load_from("no-such-config-file").expect("defaults should load");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8000);
        assert!(cfg.server.open_browser);
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.serve.index_file, "index.html");
    }

    #[test]
    fn test_env_overrides_nested_key() {
        // No other test reads this key, so the temporary env var cannot
        // race with parallel tests
        std::env::set_var("PLAYSERVE_LOGGING__ACCESS_LOG_FILE", "logs/test.log");
        let cfg = Config::load_from("no-such-config-file").expect("defaults should load");
        std::env::remove_var("PLAYSERVE_LOGGING__ACCESS_LOG_FILE");

        assert_eq!(
            cfg.logging.access_log_file.as_deref(),
            Some("logs/test.log")
        );
    }

    #[test]
    fn test_socket_addr() {
        let cfg = Config::load_from("no-such-config-file").expect("defaults should load");
        let addr = cfg.get_socket_addr().expect("valid address");
        assert_eq!(addr.port(), 8000);
    }
}
