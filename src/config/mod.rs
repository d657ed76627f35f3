use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not find config directory")]
    NoConfigDir,

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid color {value:?} for theme.{key}")]
    InvalidColor { key: &'static str, value: String },
}

/// Optional hex color overrides (`[theme]` table)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ThemeOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_soft: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub danger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_dim: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Celebrate a yes with confetti
    pub confetti: bool,

    /// How long the emitters keep firing
    pub confetti_duration_ms: u64,

    /// Redraw interval while confetti is on screen
    pub frame_interval_ms: u64,

    /// Send a desktop notification with the verdict
    pub notifications: bool,

    pub theme: ThemeOverrides,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            confetti: true,
            confetti_duration_ms: 3000,
            frame_interval_ms: 33,
            notifications: false,
            theme: ThemeOverrides::default(),
        }
    }
}

impl AppConfig {
    /// Get the config file path
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("golfcheck");

        if let Err(e) = std::fs::create_dir_all(&config_dir) {
            tracing::warn!("Could not create config directory: {}", e);
        }

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from the default location, or create it
    pub fn load() -> Self {
        match Self::default_path() {
            Ok(path) => Self::load_or_init(&path),
            Err(e) => {
                tracing::warn!("{}", e);
                AppConfig::default()
            }
        }
    }

    /// Load config from `path`; a missing file is created with defaults.
    /// Anything unreadable falls back to defaults.
    pub fn load_or_init(path: &Path) -> Self {
        if path.exists() {
            return match Self::read(path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("{}", e);
                    AppConfig::default()
                }
            };
        }

        let config = AppConfig::default();
        if let Err(e) = config.save(path) {
            tracing::debug!("Could not write default config: {}", e);
        }
        config
    }

    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn confetti_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.confetti_duration_ms)
    }

    /// Frame interval, clamped so a zero in the file can't spin the loop
    pub fn frame_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.frame_interval_ms.max(10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("golfcheck-{}-{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig {
            confetti: false,
            confetti_duration_ms: 1500,
            frame_interval_ms: 20,
            notifications: true,
            theme: ThemeOverrides {
                accent: Some("#00ff00".to_string()),
                ..Default::default()
            },
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: AppConfig = toml::from_str("confetti = false\n").unwrap();
        assert!(!config.confetti);
        assert_eq!(config.confetti_duration_ms, 3000);
        assert_eq!(config.theme, ThemeOverrides::default());
    }

    #[test]
    fn test_frame_interval_is_clamped() {
        let config = AppConfig {
            frame_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.frame_interval().as_millis(), 10);
    }

    #[test]
    fn test_load_or_init_writes_defaults() {
        let path = scratch_path("init");
        let _ = std::fs::remove_file(&path);

        let config = AppConfig::load_or_init(&path);
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());
        assert_eq!(AppConfig::read(&path).unwrap(), AppConfig::default());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unparsable_config_falls_back() {
        let path = scratch_path("broken");
        std::fs::write(&path, "confetti = \"very\"").unwrap();

        assert!(matches!(AppConfig::read(&path), Err(ConfigError::Parse { .. })));
        assert_eq!(AppConfig::load_or_init(&path), AppConfig::default());

        let _ = std::fs::remove_file(&path);
    }
}
