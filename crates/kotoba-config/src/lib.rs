use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::network::NetworkConfig;
use self::ui::UiConfig;

pub mod network;
pub mod ui;

fn default_channel_capacity() -> usize {
    64
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub ui: UiConfig,

    /// Capacity of the UI <-> backend event channels
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            ui: UiConfig::default(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Layer the process environment over the current values
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Layer overrides from `lookup` (an environment-like key lookup)
    /// over the current values. Unset or unparsable keys change nothing.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        self.network.apply_overrides(&lookup);
        self.ui.apply_overrides(&lookup);

        if let Some(capacity) = lookup("CHANNEL_CAPACITY")
            .and_then(|v| v.parse().ok())
            .filter(|&n: &usize| n > 0)
        {
            self.channel_capacity = capacity;
        }
    }

    /// Read a JSON profile. Fields absent from the file keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read the profile at `path`, or start from defaults when the file does
    /// not exist, then apply environment overrides either way. A file that
    /// exists but cannot be parsed is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            tracing::info!("Loading config from {}", path.display());
            Self::from_file(path)?
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Self::default()
        };

        config.apply_env();
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("kotoba-config-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn partial_profile_keeps_defaults() {
        let path = temp_file("partial.json", r#"{"network": {"discard_stale_responses": true}}"#);

        let config = Config::from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert!(config.network.discard_stale_responses);
        assert_eq!(config.network.endpoint, "http://localhost:8080/parse");
        assert_eq!(config.ui.window_title, "Japanese Parser");
        assert_eq!(config.channel_capacity, 64);
    }

    #[test]
    fn invalid_profile_is_reported() {
        let path = temp_file("broken.json", "{ not json");

        let err = Config::load_or_default(&path).unwrap_err();
        fs::remove_file(&path).ok();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_profile_falls_back() {
        let path = env::temp_dir().join("kotoba-config-does-not-exist.json");

        let config = Config::load_or_default(&path).unwrap();

        assert!(config.channel_capacity > 0);
    }

    #[test]
    fn overrides_win_over_profile_values() {
        let path = temp_file(
            "override.json",
            r#"{"network": {"endpoint": "http://profile:9000/parse"}, "channel_capacity": 8}"#,
        );
        let mut config = Config::from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        config.apply_overrides(|key| match key {
            "PARSE_ENDPOINT" => Some("http://env:7000/parse".to_string()),
            "DISCARD_STALE_RESPONSES" => Some("yes".to_string()),
            "KOTOBA_WINDOW_TITLE" => Some("Parser".to_string()),
            _ => None,
        });

        assert_eq!(config.network.endpoint, "http://env:7000/parse");
        assert!(config.network.discard_stale_responses);
        assert_eq!(config.ui.window_title, "Parser");
        assert_eq!(config.channel_capacity, 8);
    }

    #[test]
    fn unparsable_overrides_are_ignored() {
        let mut config = Config::default();

        config.apply_overrides(|key| match key {
            "DISCARD_STALE_RESPONSES" => Some("maybe".to_string()),
            "CHANNEL_CAPACITY" => Some("0".to_string()),
            _ => None,
        });

        assert!(!config.network.discard_stale_responses);
        assert_eq!(config.channel_capacity, 64);
    }

    #[test]
    fn profile_round_trips_through_json() {
        let config = Config::default();

        let json = serde_json::to_string_pretty(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();

        assert_eq!(back, config);
    }
}
