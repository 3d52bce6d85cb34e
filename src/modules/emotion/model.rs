use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::classifier::{KeywordClassifier, TextClassifier};
use super::state::{Emotion, EmotionalState, EmotionalStateError, PartialEmotionalState};

/// Point-in-time view of a model, as handed to logs and callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionSnapshot {
    pub state: EmotionalState,
    pub dominant: Emotion,
    pub recorded_at: DateTime<Utc>,
}

/// Owns one emotional state and the classifier used to read text.
///
/// A model belongs to a single conversation; nothing here is shared.
#[derive(Debug, Clone)]
pub struct EmotionalStateModel<C = KeywordClassifier> {
    state: EmotionalState,
    classifier: C,
}

impl EmotionalStateModel<KeywordClassifier> {
    pub fn new() -> Self {
        Self::with_classifier(KeywordClassifier::new())
    }

    pub fn with_initial(initial: &PartialEmotionalState) -> Result<Self, EmotionalStateError> {
        Self::with_classifier_and_initial(KeywordClassifier::new(), initial)
    }
}

impl Default for EmotionalStateModel<KeywordClassifier> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TextClassifier> EmotionalStateModel<C> {
    pub fn with_classifier(classifier: C) -> Self {
        Self {
            state: EmotionalState::neutral(),
            classifier,
        }
    }

    pub fn with_classifier_and_initial(
        classifier: C,
        initial: &PartialEmotionalState,
    ) -> Result<Self, EmotionalStateError> {
        let mut model = Self::with_classifier(classifier);
        model.update(initial)?;
        Ok(model)
    }

    pub fn state(&self) -> &EmotionalState {
        &self.state
    }

    /// Overwrites the provided fields, then renormalizes the whole state.
    ///
    /// Invalid input leaves the current state untouched.
    pub fn update(&mut self, partial: &PartialEmotionalState) -> Result<(), EmotionalStateError> {
        if let Err(e) = partial.validate() {
            warn!(error = %e, "rejected emotional state update");
            return Err(e);
        }

        self.state.apply(partial);
        self.normalize();
        debug!(state = ?self.state, "emotional state updated");

        Ok(())
    }

    pub fn normalize(&mut self) {
        self.state.normalize();
    }

    pub fn dominant_emotion(&self) -> Emotion {
        self.state.dominant()
    }

    pub fn classify_text(&self, text: &str) -> EmotionalState {
        self.classifier.classify(text)
    }

    /// Pulls the current state halfway toward the classification of `text`.
    ///
    /// Repeating the same input converges on it without ever discarding history.
    /// A classification with non-finite or negative fields is rejected and the
    /// state is left untouched.
    pub fn process_text(&mut self, text: &str) -> Result<Emotion, EmotionalStateError> {
        let detected = self.classify_text(text);
        if let Err(e) = detected.validate() {
            warn!(error = %e, "rejected classifier output");
            return Err(e);
        }

        let detected = detected.normalized();
        self.state = EmotionalState::merge(&self.state, &detected).normalized();

        let dominant = self.dominant_emotion();
        debug!(detected = %detected.dominant(), %dominant, "processed text input");
        Ok(dominant)
    }

    pub fn reset(&mut self) {
        self.state = EmotionalState::neutral();
    }

    pub fn snapshot(&self) -> EmotionSnapshot {
        EmotionSnapshot {
            state: self.state,
            dominant: self.dominant_emotion(),
            recorded_at: Utc::now(),
        }
    }
}
