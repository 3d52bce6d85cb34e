use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::config::{Identity, PersonaConfig};
use crate::modules::emotion::{
    EmotionSnapshot, EmotionalState, EmotionalStateError, EmotionalStateModel, PartialEmotionalState,
};
use crate::modules::personality::{PersonalityEngine, PersonalityError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Emotion(#[from] EmotionalStateError),

    #[error(transparent)]
    Personality(#[from] PersonalityError),
}

/// One conversation with the persona: its own mood, its own voice.
#[derive(Debug, Clone)]
pub struct ConversationSession {
    pub id: String,
    pub identity: Identity,
    model: EmotionalStateModel,
    personality: PersonalityEngine,
}

impl ConversationSession {
    pub fn new(config: &PersonaConfig) -> Result<Self, SessionError> {
        Self::new_with_id(config, Uuid::new_v4().to_string())
    }

    pub fn new_with_id(config: &PersonaConfig, id: String) -> Result<Self, SessionError> {
        let model = EmotionalStateModel::with_initial(&config.emotion.initial)?;
        let personality = PersonalityEngine::new(config.personality.clone())?;

        info!(session_id = %id, persona = %config.identity.name, "conversation session created");

        Ok(Self {
            id,
            identity: config.identity.clone(),
            model,
            personality,
        })
    }

    pub fn model(&self) -> &EmotionalStateModel {
        &self.model
    }

    pub fn personality(&self) -> &PersonalityEngine {
        &self.personality
    }

    pub fn personality_mut(&mut self) -> &mut PersonalityEngine {
        &mut self.personality
    }

    pub fn state(&self) -> &EmotionalState {
        self.model.state()
    }

    pub fn process_message(&mut self, text: &str) -> Result<EmotionSnapshot, SessionError> {
        self.model.process_text(text)?;
        let snapshot = self.model.snapshot();
        info!(session_id = %self.id, dominant = %snapshot.dominant, "message processed");
        Ok(snapshot)
    }

    pub fn update_state(&mut self, partial: &PartialEmotionalState) -> Result<EmotionSnapshot, SessionError> {
        self.model.update(partial)?;
        Ok(self.model.snapshot())
    }

    pub fn decorate_reply(&self, reply: &str) -> String {
        self.personality.adjust_response(reply, Some(self.model.state()))
    }
}
