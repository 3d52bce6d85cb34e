use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::modules::emotion::PartialEmotionalState;

pub type TraitValue = f32;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Identity {
    pub name: String,
    pub background: String,
}

impl Identity {
    pub fn new(name: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            background: background.into(),
        }
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::new("Miyu", "")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalityTraits {
    pub friendliness: TraitValue,
    pub humor: TraitValue,
    pub formality: TraitValue,
    pub curiosity: TraitValue,
}

impl PersonalityTraits {
    pub fn new() -> Self {
        Self {
            friendliness: 0.8,
            humor: 0.5,
            formality: 0.3,
            curiosity: 0.7,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let traits = [
            ("friendliness", self.friendliness),
            ("humor", self.humor),
            ("formality", self.formality),
            ("curiosity", self.curiosity),
        ];

        for (name, value) in traits {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!(
                    "Personality trait '{}' has value {}, but must be between 0.0 and 1.0",
                    name, value
                ));
            }
        }

        Ok(())
    }
}

impl Default for PersonalityTraits {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionConfig {
    /// Overrides merged onto the neutral default when a session starts.
    pub initial: PartialEmotionalState,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonaConfig {
    pub identity: Identity,
    pub personality: PersonalityTraits,
    pub emotion: EmotionConfig,
}

impl PersonaConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: PersonaConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: PersonaConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.personality.validate().map_err(ConfigError::Invalid)?;
        self.emotion
            .initial
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(())
    }
}
