use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

use crate::config::PersonalityTraits;
use crate::modules::emotion::EmotionalState;

/// Traits above this level show up in replies.
pub const TRAIT_EXPRESSION_THRESHOLD: f32 = 0.5;

/// Emotion percentage above which the mood is voiced in replies.
pub const EMOTION_EXPRESSION_THRESHOLD: f64 = 70.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PersonalityError {
    #[error("Invalid trait: {0}")]
    InvalidTrait(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonalityTrait {
    Friendliness,
    Humor,
    Formality,
    Curiosity,
}

impl fmt::Display for PersonalityTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PersonalityTrait::Friendliness => "friendliness",
            PersonalityTrait::Humor => "humor",
            PersonalityTrait::Formality => "formality",
            PersonalityTrait::Curiosity => "curiosity",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PersonalityEngine {
    traits: PersonalityTraits,
}

impl PersonalityEngine {
    pub fn new(traits: PersonalityTraits) -> Result<Self, PersonalityError> {
        traits.validate().map_err(PersonalityError::InvalidTrait)?;
        Ok(Self { traits })
    }

    pub fn traits(&self) -> &PersonalityTraits {
        &self.traits
    }

    pub fn set_trait(&mut self, kind: PersonalityTrait, value: f32) -> Result<(), PersonalityError> {
        let mut updated = self.traits.clone();
        match kind {
            PersonalityTrait::Friendliness => updated.friendliness = value,
            PersonalityTrait::Humor => updated.humor = value,
            PersonalityTrait::Formality => updated.formality = value,
            PersonalityTrait::Curiosity => updated.curiosity = value,
        }
        updated.validate().map_err(PersonalityError::InvalidTrait)?;

        debug!(%kind, value, "personality trait updated");
        self.traits = updated;
        Ok(())
    }

    /// Applies every update or none of them.
    pub fn update_traits(&mut self, updates: &[(PersonalityTrait, f32)]) -> Result<(), PersonalityError> {
        let mut staged = self.clone();
        for &(kind, value) in updates {
            staged.set_trait(kind, value)?;
        }
        *self = staged;
        Ok(())
    }

    /// Decorates a generated reply with the persona's voice and, when given,
    /// its current mood.
    pub fn adjust_response(&self, reply: &str, emotional_state: Option<&EmotionalState>) -> String {
        let mut adjusted = reply.to_string();

        if self.traits.friendliness > TRAIT_EXPRESSION_THRESHOLD {
            adjusted.push_str(" 😊");
        }
        if self.traits.humor > TRAIT_EXPRESSION_THRESHOLD {
            adjusted.push_str(" Just kidding! 😄");
        }
        if self.traits.formality > TRAIT_EXPRESSION_THRESHOLD {
            adjusted = format!("Dear user, {}", adjusted);
        }

        if let Some(state) = emotional_state {
            if state.happiness > EMOTION_EXPRESSION_THRESHOLD {
                adjusted.push_str(" I'm feeling great today! 🌟");
            } else if state.sadness > EMOTION_EXPRESSION_THRESHOLD {
                adjusted.push_str(" It's a tough day, but I'll manage. 😔");
            }
        }

        adjusted
    }
}
