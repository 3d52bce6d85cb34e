use super::state::{Emotion, EmotionalState};

/// Maps free text onto an emotional state.
pub trait TextClassifier {
    fn classify(&self, text: &str) -> EmotionalState;
}

/// Categories are checked in this order; the first one with a hit wins.
pub const KEYWORD_RULES: &[(Emotion, &[&str])] = &[
    (Emotion::Happiness, &["happy", "great"]),
    (Emotion::Sadness, &["sad", "terrible"]),
    (Emotion::Anger, &["angry", "furious"]),
    (Emotion::Fear, &["afraid", "scared"]),
    (Emotion::Surprise, &["surprised", "amazing"]),
];

/// Case-insensitive substring matcher over [`KEYWORD_RULES`].
///
/// Placeholder for a real sentiment model: it only ever yields one-hot states,
/// falling back to neutral when nothing matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        KeywordClassifier
    }

    pub fn detect(&self, text: &str) -> Emotion {
        let lower = text.to_lowercase();

        KEYWORD_RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
            .map(|(emotion, _)| *emotion)
            .unwrap_or(Emotion::Neutral)
    }
}

impl TextClassifier for KeywordClassifier {
    fn classify(&self, text: &str) -> EmotionalState {
        EmotionalState::one_hot(self.detect(text))
    }
}
