use std::ffi::CStr;
use std::os::raw::c_char;

use crate::api::types::ApiResult;
use crate::config::PersonaConfig;
use crate::modules::emotion::PartialEmotionalState;

pub fn parse_c_string(ptr: *const c_char, field_name: &str) -> Result<String, *mut ApiResult> {
    if ptr.is_null() {
        return Err(ApiResult::error(format!("{} is null", field_name)).into_raw());
    }

    unsafe {
        match CStr::from_ptr(ptr).to_str() {
            Ok(s) => Ok(s.to_string()),
            Err(_) => Err(ApiResult::error(format!("Invalid UTF-8 string for {}", field_name)).into_raw()),
        }
    }
}

pub fn parse_optional_c_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }

    unsafe { CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string()) }
}

/// A missing or blank config falls back to the default persona.
pub fn parse_config_json(config_str: Option<&str>) -> Result<PersonaConfig, *mut ApiResult> {
    match config_str.map(str::trim) {
        None | Some("") => Ok(PersonaConfig::default()),
        Some(json) => PersonaConfig::from_json_str(json)
            .map_err(|e| ApiResult::error(format!("Failed to parse config: {}", e)).into_raw()),
    }
}

pub fn parse_partial_state_json(state_str: &str) -> Result<PartialEmotionalState, *mut ApiResult> {
    if state_str.trim().is_empty() {
        return Err(ApiResult::error("Emotional state string is empty".to_string()).into_raw());
    }

    PartialEmotionalState::from_json(state_str)
        .map_err(|e| ApiResult::error(format!("Failed to parse emotional state: {}", e)).into_raw())
}
