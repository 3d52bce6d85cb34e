use crate::api::types::{ApiResult, SessionHandle};
use crate::config::PersonaConfig;
use crate::modules::emotion::{EmotionSnapshot, EmotionalState};
use crate::modules::session::ConversationSession;

pub(crate) fn create_session(config: &PersonaConfig) -> Result<SessionHandle, *mut ApiResult> {
    let session = ConversationSession::new(config)
        .map_err(|e| ApiResult::error(format!("Failed to create session: {}", e)).into_raw())?;

    Ok(Box::into_raw(Box::new(session)))
}

/// Frees a session created by [`create_session`]. Null is ignored.
///
/// # Safety
///
/// `handle` must be null or a pointer returned by [`create_session`] that has
/// not been destroyed yet. It must not be used again afterwards.
pub(crate) unsafe fn destroy_session(handle: SessionHandle) {
    if handle.is_null() {
        return;
    }

    drop(Box::from_raw(handle));
}

/// Runs `f` against the session behind `handle` and wraps its outcome.
///
/// # Safety
///
/// `handle` must be null or a live pointer returned by [`create_session`],
/// with no other reference to that session held for the duration of the call.
pub(crate) unsafe fn with_session<F>(handle: SessionHandle, f: F) -> *mut ApiResult
where
    F: FnOnce(&mut ConversationSession) -> Result<String, String>,
{
    if handle.is_null() {
        return ApiResult::error("Session handle is null. Call miyu_session_create first.".to_string()).into_raw();
    }

    let session = &mut *handle;

    match f(session) {
        Ok(data) => ApiResult::success(data).into_raw(),
        Err(error) => ApiResult::error(error).into_raw(),
    }
}

pub(crate) fn format_snapshot_json(snapshot: &EmotionSnapshot) -> Result<String, String> {
    serde_json::to_string(snapshot).map_err(|e| format!("Failed to serialize snapshot: {}", e))
}

pub(crate) fn format_state_json(state: &EmotionalState) -> Result<String, String> {
    serde_json::to_string(state).map_err(|e| format!("Failed to serialize emotional state: {}", e))
}
