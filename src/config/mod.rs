mod loader;

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the indicator, read once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Whether status-transition notifications are sent at all.
    #[serde(default = "default_notifications")]
    pub notifications: bool,

    /// Ask the daemon to start when the controller starts.
    #[serde(default)]
    pub start_daemon: bool,

    /// Ask the daemon to stop when the controller shuts down.
    #[serde(default)]
    pub stop_daemon: bool,

    /// The synchronized folder; recent items are resolved against it.
    #[serde(default = "default_sync_dir")]
    pub sync_dir: PathBuf,

    /// Icon theme name under the application home.
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Two-letter UI language, taken from `LANG` when not configured.
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notifications: default_notifications(),
            start_daemon: false,
            stop_daemon: false,
            sync_dir: default_sync_dir(),
            theme: default_theme(),
            locale: default_locale(),
        }
    }
}

fn default_notifications() -> bool {
    true
}

fn default_sync_dir() -> PathBuf {
    match env::var("HOME") {
        Ok(home) => PathBuf::from(home).join("Yandex.Disk"),
        Err(_) => PathBuf::from("Yandex.Disk"),
    }
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_locale() -> String {
    let lang = env::var("LANG").unwrap_or_default();
    match lang.get(..2) {
        Some(prefix) => prefix.to_string(),
        None => "en".to_string(),
    }
}
