//! Configuration file support for the split planner CLI.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/splitplan/config.toml`.

use crate::{Error, ExperienceLevel, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: PlannerDefaults,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Values used when a planner input is built from command-line flags
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerDefaults {
    #[serde(default = "default_frequency")]
    pub frequency: u8,

    #[serde(default)]
    pub experience: ExperienceLevel,

    #[serde(default = "default_session_duration")]
    pub session_duration_minutes: u32,

    #[serde(default = "default_schedule_flexibility")]
    pub schedule_flexibility: bool,
}

impl Default for PlannerDefaults {
    fn default() -> Self {
        Self {
            frequency: default_frequency(),
            experience: ExperienceLevel::default(),
            session_duration_minutes: default_session_duration(),
            schedule_flexibility: default_schedule_flexibility(),
        }
    }
}

/// How templates are printed
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!("Unknown output format: {}", other))),
        }
    }
}

/// Output configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

// Default value functions
fn default_frequency() -> u8 {
    3
}

fn default_session_duration() -> u32 {
    45
}

fn default_schedule_flexibility() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::debug!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from(".config"));
        base.join("splitplan").join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        if !(1..=7).contains(&self.defaults.frequency) {
            return Err(Error::Config(format!(
                "defaults.frequency must be between 1 and 7, got {}",
                self.defaults.frequency
            )));
        }
        if self.defaults.session_duration_minutes == 0 {
            return Err(Error::Config(
                "defaults.session_duration_minutes must be positive".into(),
            ));
        }
        Ok(())
    }
}
