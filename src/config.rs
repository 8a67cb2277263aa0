use std::path::Path;

use crate::error::ConfigError;
use crate::game::{DEFAULT_COLUMNS, DEFAULT_ROWS, DEFAULT_WIN_STREAK};

/// Board dimensions and streak length.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub n_rows: usize,
    pub n_columns: usize,
    pub win_streak: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            n_rows: DEFAULT_ROWS,
            n_columns: DEFAULT_COLUMNS,
            win_streak: DEFAULT_WIN_STREAK,
        }
    }
}

impl EngineConfig {
    /// Reject boards on which no streak could ever fit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_rows == 0 {
            return Err(ConfigError::Validation("engine.n_rows must be > 0".into()));
        }
        if self.n_columns == 0 {
            return Err(ConfigError::Validation(
                "engine.n_columns must be > 0".into(),
            ));
        }
        if self.win_streak == 0 {
            return Err(ConfigError::Validation(
                "engine.win_streak must be > 0".into(),
            ));
        }
        if self.win_streak > self.n_rows.max(self.n_columns) {
            return Err(ConfigError::Validation(format!(
                "engine.win_streak ({}) must fit on a {}x{} board",
                self.win_streak, self.n_rows, self.n_columns
            )));
        }
        Ok(())
    }
}

/// Settings for the random opponent and self-play.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Seed for the random bot. `None` seeds from the OS.
    pub seed: Option<u64>,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub play: PlayConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()
    }

    /// Generate a TOML string with all default values.
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
