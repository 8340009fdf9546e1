//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/prepkit/prepkit.toml`
//! 3. Environment variables: `PREPKIT_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Timer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Minutes for `--easy` sessions
    pub easy_minutes: u32,
    /// Minutes for `--medium` sessions
    pub medium_minutes: u32,
    /// Minutes for `--hard` sessions
    pub hard_minutes: u32,
    /// Print the tips banner before the countdown
    pub show_tips: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            easy_minutes: 15,
            medium_minutes: 25,
            hard_minutes: 35,
            show_tips: true,
        }
    }
}

impl Settings {
    /// Load settings: defaults, then the global config file (if present),
    /// then `PREPKIT_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::global_config_path().as_deref())
    }

    /// Load settings with an explicit config file path (used by tests).
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder = builder.add_source(Environment::with_prefix("PREPKIT"));

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Location of the global config file, if a config dir exists for
    /// this platform.
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "prepkit").map(|dirs| dirs.config_dir().join("prepkit.toml"))
    }

    /// All durations must be at least one minute.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, minutes) in [
            ("easy_minutes", self.easy_minutes),
            ("medium_minutes", self.medium_minutes),
            ("hard_minutes", self.hard_minutes),
        ] {
            if minutes == 0 {
                return Err(ConfigError::Message(format!(
                    "{name} must be a positive number of minutes"
                )));
            }
        }
        Ok(())
    }
}
