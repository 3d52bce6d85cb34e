use miyu_emotion::{Emotion, EmotionalState, TextClassifier};
use std::collections::HashMap;

/// Classifier with canned answers, for driving a model without keywords.
pub struct ScriptedClassifier {
    responses: HashMap<String, EmotionalState>,
    default_response: EmotionalState,
}

impl ScriptedClassifier {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            default_response: EmotionalState::neutral(),
        }
    }

    pub fn with_response(mut self, text: &str, response: EmotionalState) -> Self {
        self.responses.insert(text.to_string(), response);
        self
    }

    pub fn with_default_response(mut self, response: EmotionalState) -> Self {
        self.default_response = response;
        self
    }

    pub fn always(emotion: Emotion) -> Self {
        Self::new().with_default_response(EmotionalState::one_hot(emotion))
    }
}

impl TextClassifier for ScriptedClassifier {
    fn classify(&self, text: &str) -> EmotionalState {
        self.responses.get(text).copied().unwrap_or(self.default_response)
    }
}

pub struct TestEmotionData;

impl TestEmotionData {
    pub fn happy_texts() -> Vec<&'static str> {
        vec![
            "I'm so happy today, it's great!",
            "What a GREAT day",
            "Happy birthday to you",
        ]
    }

    pub fn sad_texts() -> Vec<&'static str> {
        vec![
            "this is terrible and sad",
            "I feel sad",
            "Terrible news from home",
        ]
    }

    pub fn neutral_texts() -> Vec<&'static str> {
        vec![
            "the sky is blue",
            "Meeting moved to 3pm",
            "",
        ]
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
