//! Tracing subscriber setup.

use anyhow::{Context, Result, anyhow};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Sends logs to `path` so they stay out of the terminal UI.
///
/// Fails if the file cannot be created or a global subscriber is already
/// installed.
pub fn init_file(path: &Path, fallback_filter: &str) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback_filter))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("Failed to install file logger")
}

/// Sends logs to stderr, leaving stdout for command output.
///
/// Fails if a global subscriber is already installed.
pub fn init_stderr(fallback_filter: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback_filter))
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("Failed to install stderr logger")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_install_is_reported() {
        // Whichever call installs first, the later one must fail.
        let _ = init_stderr("info");
        let dir = tempfile::tempdir().unwrap();
        let err = init_file(&dir.path().join("test.log"), "info").unwrap_err();
        assert!(err.to_string().contains("Failed to install file logger"));
        assert!(init_stderr("info").is_err());
    }

    #[test]
    fn test_unwritable_log_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = init_file(&dir.path().join("missing").join("test.log"), "info").unwrap_err();
        assert!(err.to_string().contains("Failed to create log file"));
    }
}
