//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe_classic.toml";

/// Settings for the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// File the TUI writes its logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is unset (e.g. "info", "tictactoe_engine=debug").
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Place marks with mouse clicks.
    #[serde(default = "default_true")]
    mouse: bool,

    /// Show the key help line under the board.
    #[serde(default = "default_true")]
    show_help: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_classic.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            mouse: true,
            show_help: true,
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the config at `path`, or from [`DEFAULT_CONFIG_PATH`] if that
    /// file exists, or falls back to defaults.
    ///
    /// An explicit `path` that cannot be read is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_or_default(path, Path::new(DEFAULT_CONFIG_PATH))
    }

    fn load_or_default(path: Option<&Path>, default_path: &Path) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if default_path.is_file() => Self::from_file(default_path),
            None => {
                debug!(default_path = %default_path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mouse = false").unwrap();

        let config = TuiConfig::from_file(file.path()).unwrap();
        assert!(!*config.mouse());
        assert!(*config.show_help());
        assert_eq!(config.log_filter(), "info");
        assert_eq!(config.log_file(), &PathBuf::from("tictactoe_classic.log"));
    }

    #[test]
    fn test_full_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "log_file = \"/tmp/ttt.log\"\nlog_filter = \"debug\"\nmouse = true\nshow_help = false"
        )
        .unwrap();

        let config = TuiConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/ttt.log"));
        assert_eq!(config.log_filter(), "debug");
        assert!(!*config.show_help());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TuiConfig::load(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_missing_default_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join(DEFAULT_CONFIG_PATH);
        let config = TuiConfig::load_or_default(None, &default_path).unwrap();
        assert_eq!(config, TuiConfig::default());
    }

    #[test]
    fn test_present_default_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join(DEFAULT_CONFIG_PATH);
        std::fs::write(&default_path, "show_help = false\n").unwrap();

        let config = TuiConfig::load_or_default(None, &default_path).unwrap();
        assert!(!*config.show_help());
        assert!(*config.mouse());
    }

    #[test]
    fn test_explicit_path_wins_over_default() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join(DEFAULT_CONFIG_PATH);
        std::fs::write(&default_path, "mouse = false\n").unwrap();
        let explicit = dir.path().join("other.toml");
        std::fs::write(&explicit, "log_filter = \"debug\"\n").unwrap();

        let config = TuiConfig::load_or_default(Some(explicit.as_path()), &default_path).unwrap();
        assert_eq!(config.log_filter(), "debug");
        assert!(*config.mouse());
    }

    #[test]
    fn test_bad_toml_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "mouse = \"sometimes\"").unwrap();
        let err = TuiConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Config error: Failed to parse config"));
    }
}
