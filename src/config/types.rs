// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;
use std::collections::HashMap;

/// Main configuration structure
///
/// Fixed at process start; immutable thereafter.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub serve: ServeConfig,
    #[serde(default)]
    pub mime: MimeConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub workers: Option<usize>,
    pub open_browser: bool,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// Static serving configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServeConfig {
    /// Root directory to serve from. Defaults to the directory containing
    /// the running executable.
    #[serde(default)]
    pub root: Option<String>,
    /// File substituted when the root path `/` is requested
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

fn default_index_file() -> String {
    "index.html".to_string()
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            root: None,
            index_file: default_index_file(),
        }
    }
}

/// MIME type overrides, layered over the builtin extension table.
///
/// The defaults map TypeScript source extensions to a JavaScript content
/// type so the browser executes them as scripts. Kept as configuration
/// rather than hardcoded logic, in case the set of source-like extensions
/// needs to grow.
#[derive(Debug, Deserialize, Clone)]
pub struct MimeConfig {
    #[serde(default = "default_overrides")]
    pub overrides: HashMap<String, String>,
}

fn default_overrides() -> HashMap<String, String> {
    let mut map = HashMap::new();
    map.insert("ts".to_string(), "application/javascript".to_string());
    map.insert("tsx".to_string(), "application/javascript".to_string());
    map.insert("json".to_string(), "application/json".to_string());
    map
}

impl Default for MimeConfig {
    fn default() -> Self {
        Self {
            overrides: default_overrides(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_overrides_map_typescript_to_js() {
        let mime = MimeConfig::default();
        assert_eq!(
            mime.overrides.get("ts").map(String::as_str),
            Some("application/javascript")
        );
        assert_eq!(
            mime.overrides.get("tsx").map(String::as_str),
            Some("application/javascript")
        );
        assert_eq!(
            mime.overrides.get("json").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_default_index_file() {
        let serve = ServeConfig::default();
        assert_eq!(serve.index_file, "index.html");
        assert!(serve.root.is_none());
    }
}
