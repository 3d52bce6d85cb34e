pub mod persona_config;

pub use persona_config::{ConfigError, EmotionConfig, Identity, PersonaConfig, PersonalityTraits};
