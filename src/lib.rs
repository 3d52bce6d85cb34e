pub mod config;
pub mod modules;
pub mod api;

pub use config::{ConfigError, Identity, PersonaConfig, PersonalityTraits};
pub use modules::emotion::{
    Emotion, EmotionSnapshot, EmotionalState, EmotionalStateError, EmotionalStateModel, KeywordClassifier,
    PartialEmotionalState, TextClassifier, EMOTION_SCALE,
};
pub use modules::personality::{PersonalityEngine, PersonalityError, PersonalityTrait};
pub use modules::session::{ConversationSession, SessionError};
