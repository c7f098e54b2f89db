use std::env;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{info, warn};

use crate::types::IndicatorError;

use super::Config;

impl Config {
    /// Load configuration from config.json in the user config directory.
    /// Falls back to defaults if the file doesn't exist or can't be parsed.
    pub async fn load() -> Self {
        let path = config_path();
        match Self::load_from(&path).await {
            Ok(config) => {
                info!(
                    path = %path.display(),
                    sync_dir = %config.sync_dir.display(),
                    theme = %config.theme,
                    "Loaded configuration"
                );
                config
            }
            Err(err) => {
                warn!(error = ?err, "Failed to load config.json, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from an explicit path; missing file means defaults.
    pub async fn load_from(path: &Path) -> Result<Self, IndicatorError> {
        if !path.exists() {
            warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .await
            .map_err(|err| IndicatorError::Config(format!("Failed to read config file: {err}")))?;

        serde_json::from_str(&contents)
            .map_err(|err| IndicatorError::Config(format!("Failed to parse config.json: {err}")))
    }
}

/// Path of the config.json file: `$XDG_CONFIG_HOME/yd-indicator/config.json`,
/// falling back to `~/.config/yd-indicator/config.json`.
fn config_path() -> PathBuf {
    let base = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|home| PathBuf::from(home).join(".config")))
        .unwrap_or_else(|_| PathBuf::from(".config"));
    base.join("yd-indicator").join("config.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json"))
            .await
            .unwrap();
        assert!(config.notifications);
        assert_eq!(config.theme, "dark");
    }

    #[tokio::test]
    async fn file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        tokio::fs::write(
            &path,
            "{\"notifications\": false, \"start_daemon\": true, \"sync_dir\": \"/tmp/yd\"}",
        )
        .await
        .unwrap();

        let config = Config::load_from(&path).await.unwrap();
        assert!(!config.notifications);
        assert!(config.start_daemon);
        assert_eq!(config.sync_dir, PathBuf::from("/tmp/yd"));
    }

    #[tokio::test]
    async fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        tokio::fs::write(&path, "{not json").await.unwrap();
        assert!(matches!(
            Config::load_from(&path).await,
            Err(IndicatorError::Config(_))
        ));
    }
}
