use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Total every normalized state sums to.
pub const EMOTION_SCALE: f64 = 100.0;

/// Slack allowed on the total of a deserialized state.
pub const SCALE_TOLERANCE: f64 = 1e-6;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmotionalStateError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for EmotionalStateError {
    fn from(error: serde_json::Error) -> Self {
        EmotionalStateError::Parse(error.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Happiness,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Neutral,
}

impl Emotion {
    /// Declaration order, also the iteration order of [`EmotionalState::iter`].
    pub const ALL: [Emotion; 6] = [
        Emotion::Happiness,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Happiness => "happiness",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn check_intensity(emotion: Emotion, value: f64) -> Result<(), EmotionalStateError> {
    if !value.is_finite() {
        return Err(EmotionalStateError::InvalidInput(format!(
            "Emotion '{}' has non-finite value {}",
            emotion, value
        )));
    }
    if value < 0.0 {
        return Err(EmotionalStateError::InvalidInput(format!(
            "Emotion '{}' has value {}, but must not be negative",
            emotion, value
        )));
    }
    Ok(())
}

/// Six emotion intensities expressed as percentages.
///
/// Deserializing only accepts normalized states.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StateRecord")]
pub struct EmotionalState {
    pub happiness: f64,
    pub sadness: f64,
    pub anger: f64,
    pub fear: f64,
    pub surprise: f64,
    pub neutral: f64,
}

impl EmotionalState {
    pub fn zero() -> Self {
        Self {
            happiness: 0.0,
            sadness: 0.0,
            anger: 0.0,
            fear: 0.0,
            surprise: 0.0,
            neutral: 0.0,
        }
    }

    pub fn neutral() -> Self {
        Self::one_hot(Emotion::Neutral)
    }

    pub fn one_hot(emotion: Emotion) -> Self {
        let mut state = Self::zero();
        state.set(emotion, EMOTION_SCALE);
        state
    }

    pub fn get(&self, emotion: Emotion) -> f64 {
        match emotion {
            Emotion::Happiness => self.happiness,
            Emotion::Sadness => self.sadness,
            Emotion::Anger => self.anger,
            Emotion::Fear => self.fear,
            Emotion::Surprise => self.surprise,
            Emotion::Neutral => self.neutral,
        }
    }

    pub fn set(&mut self, emotion: Emotion, value: f64) {
        let slot = match emotion {
            Emotion::Happiness => &mut self.happiness,
            Emotion::Sadness => &mut self.sadness,
            Emotion::Anger => &mut self.anger,
            Emotion::Fear => &mut self.fear,
            Emotion::Surprise => &mut self.surprise,
            Emotion::Neutral => &mut self.neutral,
        };
        *slot = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::ALL
            .into_iter()
            .map(move |emotion| (emotion, self.get(emotion)))
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|(_, value)| value).sum()
    }

    /// Rescales every field so the state sums to [`EMOTION_SCALE`].
    ///
    /// An all-zero state has no proportions to keep and falls back to pure neutral.
    pub fn normalize(&mut self) {
        let mut total = self.total();
        if total.is_infinite() {
            // finite fields whose sum overflows: shrink by the largest first
            let max = self.iter().map(|(_, value)| value).fold(0.0, f64::max);
            for emotion in Emotion::ALL {
                let value = self.get(emotion);
                self.set(emotion, value / max);
            }
            total = self.total();
        }

        if total > 0.0 {
            for emotion in Emotion::ALL {
                let value = self.get(emotion);
                self.set(emotion, value / total * EMOTION_SCALE);
            }
        } else {
            *self = Self::neutral();
        }
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Field holding the strictly greatest value; any tie among the maxima
    /// resolves to `Neutral`.
    pub fn dominant(&self) -> Emotion {
        let max = self
            .iter()
            .map(|(_, value)| value)
            .fold(f64::NEG_INFINITY, f64::max);

        let mut leaders = self.iter().filter(|(_, value)| *value == max);
        match (leaders.next(), leaders.next()) {
            (Some((emotion, _)), None) => emotion,
            _ => Emotion::Neutral,
        }
    }

    /// Every field finite and non-negative, without any constraint on the total.
    pub fn validate(&self) -> Result<(), EmotionalStateError> {
        for (emotion, value) in self.iter() {
            check_intensity(emotion, value)?;
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.iter()
            .all(|(_, value)| value.is_finite() && (0.0..=EMOTION_SCALE).contains(&value))
    }

    /// Per-field average of two states.
    pub fn merge(first: &EmotionalState, second: &EmotionalState) -> EmotionalState {
        let mut merged = EmotionalState::zero();
        for emotion in Emotion::ALL {
            merged.set(emotion, (first.get(emotion) + second.get(emotion)) / 2.0);
        }
        merged
    }

    pub fn apply(&mut self, partial: &PartialEmotionalState) {
        for (emotion, value) in partial.iter() {
            self.set(emotion, value);
        }
    }
}

impl Default for EmotionalState {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Field-wise override for an [`EmotionalState`]; absent fields are left alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PartialEmotionalState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub happiness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sadness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anger: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fear: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surprise: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neutral: Option<f64>,
}

impl PartialEmotionalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, emotion: Emotion, value: f64) -> Self {
        let slot = match emotion {
            Emotion::Happiness => &mut self.happiness,
            Emotion::Sadness => &mut self.sadness,
            Emotion::Anger => &mut self.anger,
            Emotion::Fear => &mut self.fear,
            Emotion::Surprise => &mut self.surprise,
            Emotion::Neutral => &mut self.neutral,
        };
        *slot = Some(value);
        self
    }

    pub fn get(&self, emotion: Emotion) -> Option<f64> {
        match emotion {
            Emotion::Happiness => self.happiness,
            Emotion::Sadness => self.sadness,
            Emotion::Anger => self.anger,
            Emotion::Fear => self.fear,
            Emotion::Surprise => self.surprise,
            Emotion::Neutral => self.neutral,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Emotion, f64)> + '_ {
        Emotion::ALL
            .into_iter()
            .filter_map(move |emotion| self.get(emotion).map(|value| (emotion, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn from_json(json: &str) -> Result<Self, EmotionalStateError> {
        let partial: PartialEmotionalState = serde_json::from_str(json)?;
        partial.validate()?;
        Ok(partial)
    }

    /// Rejects NaN, infinities and negative intensities.
    pub fn validate(&self) -> Result<(), EmotionalStateError> {
        for (emotion, value) in self.iter() {
            check_intensity(emotion, value)?;
        }
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct StateRecord {
    happiness: f64,
    sadness: f64,
    anger: f64,
    fear: f64,
    surprise: f64,
    neutral: f64,
}

impl TryFrom<StateRecord> for EmotionalState {
    type Error = EmotionalStateError;

    fn try_from(record: StateRecord) -> Result<Self, Self::Error> {
        let state = EmotionalState {
            happiness: record.happiness,
            sadness: record.sadness,
            anger: record.anger,
            fear: record.fear,
            surprise: record.surprise,
            neutral: record.neutral,
        };
        state.validate()?;

        let total = state.total();
        if (total - EMOTION_SCALE).abs() > SCALE_TOLERANCE {
            return Err(EmotionalStateError::InvalidInput(format!(
                "Emotional state sums to {}, expected {}",
                total, EMOTION_SCALE
            )));
        }

        Ok(state)
    }
}

impl From<EmotionalState> for PartialEmotionalState {
    fn from(state: EmotionalState) -> Self {
        Self {
            happiness: Some(state.happiness),
            sadness: Some(state.sadness),
            anger: Some(state.anger),
            fear: Some(state.fear),
            surprise: Some(state.surprise),
            neutral: Some(state.neutral),
        }
    }
}
