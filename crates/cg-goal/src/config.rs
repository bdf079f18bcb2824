// config.rs — Screen configuration.
//
// Read from `<config dir>/course-goals/config.toml` by default. Every field
// has a serde default, so a partial (or absent) file is always valid.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GoalError;
use crate::id::IdStrategy;

/// Message shown when an empty goal is submitted.
pub const DEFAULT_VALIDATION_MESSAGE: &str = "Không được để trống";

/// Tunables for one goal screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Text recorded as the validation message on an empty submit.
    #[serde(default = "default_validation_message")]
    pub validation_message: String,

    /// How goal identifiers are generated.
    #[serde(default)]
    pub id_strategy: IdStrategy,

    /// Treat whitespace-only input as empty.
    #[serde(default = "default_trim_input")]
    pub trim_input: bool,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            validation_message: default_validation_message(),
            id_strategy: IdStrategy::default(),
            trim_input: default_trim_input(),
        }
    }
}

fn default_validation_message() -> String {
    DEFAULT_VALIDATION_MESSAGE.to_string()
}

fn default_trim_input() -> bool {
    true
}

impl ScreenConfig {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, GoalError> {
        let content = std::fs::read_to_string(path).map_err(|source| GoalError::IoError {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| GoalError::ConfigParse {
            path: path.display().to_string(),
            source,
        })?;
        Ok(config.normalized())
    }

    /// Load config, falling back to defaults if the file is missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("ignoring config: {}", e);
                Self::default()
            }
        }
    }

    /// Platform location of the config file, if a config dir exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("course-goals").join("config.toml"))
    }

    /// A blank validation message would hide the error from the user.
    pub(crate) fn normalized(mut self) -> Self {
        if self.validation_message.trim().is_empty() {
            self.validation_message = default_validation_message();
        }
        self
    }
}
