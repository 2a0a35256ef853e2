use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Number of option slots every emitted question carries.
///
/// Source documents disagree between four and five options per question, so
/// the slot count is a setting rather than a guess. Stored as a plain integer
/// in the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum OptionCapacity {
    Four,
    #[default]
    Five,
}

impl OptionCapacity {
    pub fn slots(self) -> usize {
        match self {
            OptionCapacity::Four => 4,
            OptionCapacity::Five => 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidOptionCapacity(pub u8);

impl fmt::Display for InvalidOptionCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "option_capacity must be 4 or 5, got {}", self.0)
    }
}

impl TryFrom<u8> for OptionCapacity {
    type Error = InvalidOptionCapacity;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(OptionCapacity::Four),
            5 => Ok(OptionCapacity::Five),
            other => Err(InvalidOptionCapacity(other)),
        }
    }
}

impl From<OptionCapacity> for u8 {
    fn from(capacity: OptionCapacity) -> Self {
        capacity.slots() as u8
    }
}

/// What to do when a document has no "Answer Key" section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerKeyPolicy {
    /// Emit every question without an answer line.
    #[default]
    Tolerate,
    /// Fail the run with a "no answer key found" error.
    Require,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub option_capacity: OptionCapacity,
    pub answer_key: AnswerKeyPolicy,
    /// Additional case-insensitive phrases that end the multiple-choice part
    /// of a document, on top of the built-in essay/true-false vocabulary.
    pub extra_section_markers: Vec<String>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Blank markers would match every line
        config
            .extra_section_markers
            .retain(|marker| !marker.trim().is_empty());

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/mcq-normalizer");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn with_option_capacity(mut self, capacity: OptionCapacity) -> Self {
        self.option_capacity = capacity;
        self
    }

    pub fn with_answer_key_policy(mut self, policy: AnswerKeyPolicy) -> Self {
        self.answer_key = policy;
        self
    }
}
