// Application state module
// Read-only runtime state shared across request tasks

use std::io;
use std::path::{Path, PathBuf};

use super::types::Config;

/// Application state
///
/// Immutable after startup; no cross-request mutable state exists.
pub struct AppState {
    pub config: Config,
    /// Canonicalized serving root, resolved once at startup
    pub root_dir: PathBuf,
}

impl AppState {
    /// Resolve the serving root and build the state.
    ///
    /// The root is the configured `serve.root` if present, otherwise the
    /// directory containing the running executable.
    pub fn new(config: Config) -> io::Result<Self> {
        let root_dir = resolve_root(&config)?;
        Ok(Self { config, root_dir })
    }

    /// Build state with an explicit root directory (used by tests).
    pub fn with_root(config: Config, root: &Path) -> io::Result<Self> {
        Ok(Self {
            root_dir: root.canonicalize()?,
            config,
        })
    }
}

/// Resolve the serving root directory from configuration.
fn resolve_root(config: &Config) -> io::Result<PathBuf> {
    match &config.serve.root {
        Some(root) => Path::new(root).canonicalize(),
        None => {
            let exe = std::env::current_exe()?;
            let dir = exe.parent().ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    "Executable has no parent directory",
                )
            })?;
            dir.canonicalize()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn test_config() -> Config {
        Config::load_from("no-such-config-file").expect("defaults should load")
    }

    #[test]
    fn test_configured_root_is_canonicalized() {
        let mut cfg = test_config();
        cfg.serve.root = Some(".".to_string());
        let state = AppState::new(cfg).expect("state should build");
        assert!(state.root_dir.is_absolute());
    }

    #[test]
    fn test_default_root_is_executable_directory() {
        let state = AppState::new(test_config()).expect("state should build");
        assert!(state.root_dir.is_dir());
    }

    #[test]
    fn test_missing_configured_root_fails() {
        let mut cfg = test_config();
        cfg.serve.root = Some("/definitely/not/a/real/path".to_string());
        assert!(AppState::new(cfg).is_err());
    }
}
