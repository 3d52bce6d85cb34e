pub mod classifier;
pub mod model;
pub mod state;

pub use classifier::{KeywordClassifier, TextClassifier, KEYWORD_RULES};
pub use model::{EmotionSnapshot, EmotionalStateModel};
pub use state::{Emotion, EmotionalState, EmotionalStateError, PartialEmotionalState, EMOTION_SCALE};
