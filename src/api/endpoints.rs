use std::os::raw::c_char;

use crate::api::{
    services::{
        session_service::{create_session, destroy_session, format_snapshot_json, format_state_json, with_session},
        validation_service::*,
    },
    types::{ApiResult, SessionHandle},
};
use crate::modules::emotion::{KeywordClassifier, TextClassifier};

#[no_mangle]
pub extern "C" fn miyu_session_create(config_json: *const c_char, out_handle: *mut SessionHandle) -> *mut ApiResult {
    if out_handle.is_null() {
        return ApiResult::error("Output handle pointer is null".to_string()).into_raw();
    }

    let config_str = parse_optional_c_string(config_json);
    let config = match parse_config_json(config_str.as_deref()) {
        Ok(c) => c,
        Err(result) => return result,
    };

    let handle = match create_session(&config) {
        Ok(h) => h,
        Err(result) => return result,
    };

    let session_id = unsafe {
        *out_handle = handle;
        (*handle).id.clone()
    };

    let response_data = serde_json::json!({
        "session_id": session_id
    })
    .to_string();

    ApiResult::success(response_data).into_raw()
}

#[no_mangle]
pub extern "C" fn miyu_session_free(handle: SessionHandle) {
    unsafe { destroy_session(handle) }
}

#[no_mangle]
pub extern "C" fn miyu_session_process_text(handle: SessionHandle, text: *const c_char) -> *mut ApiResult {
    let text_str = match parse_c_string(text, "Text string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    unsafe {
        with_session(handle, |session| {
            let snapshot = session
                .process_message(&text_str)
                .map_err(|e| format!("Failed to process text: {}", e))?;
            format_snapshot_json(&snapshot)
        })
    }
}

#[no_mangle]
pub extern "C" fn miyu_session_update(handle: SessionHandle, partial_json: *const c_char) -> *mut ApiResult {
    let state_str = match parse_c_string(partial_json, "Emotional state string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    let partial = match parse_partial_state_json(&state_str) {
        Ok(p) => p,
        Err(result) => return result,
    };

    unsafe {
        with_session(handle, |session| {
            let snapshot = session
                .update_state(&partial)
                .map_err(|e| format!("Failed to update emotional state: {}", e))?;
            format_snapshot_json(&snapshot)
        })
    }
}

#[no_mangle]
pub extern "C" fn miyu_session_get_state(handle: SessionHandle) -> *mut ApiResult {
    unsafe { with_session(handle, |session| format_state_json(session.state())) }
}

#[no_mangle]
pub extern "C" fn miyu_session_dominant_emotion(handle: SessionHandle) -> *mut ApiResult {
    unsafe {
        with_session(handle, |session| {
            Ok(serde_json::json!({
                "dominant": session.model().dominant_emotion()
            })
            .to_string())
        })
    }
}

#[no_mangle]
pub extern "C" fn miyu_session_decorate_reply(handle: SessionHandle, reply: *const c_char) -> *mut ApiResult {
    let reply_str = match parse_c_string(reply, "Reply string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    unsafe { with_session(handle, |session| Ok(session.decorate_reply(&reply_str))) }
}

#[no_mangle]
pub extern "C" fn miyu_classify_text(text: *const c_char) -> *mut ApiResult {
    let text_str = match parse_c_string(text, "Text string") {
        Ok(s) => s,
        Err(result) => return result,
    };

    let state = KeywordClassifier::new().classify(&text_str);
    match format_state_json(&state) {
        Ok(json) => ApiResult::success(json).into_raw(),
        Err(error) => ApiResult::error(error).into_raw(),
    }
}

#[no_mangle]
pub extern "C" fn free_api_result(result: *mut ApiResult) {
    if result.is_null() {
        return;
    }

    unsafe {
        let result = Box::from_raw(result);
        if !result.data.is_null() {
            let _ = std::ffi::CString::from_raw(result.data);
        }
        if !result.error.is_null() {
            let _ = std::ffi::CString::from_raw(result.error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::{CStr, CString};

    fn take_result(result: *mut ApiResult) -> Result<String, String> {
        assert!(!result.is_null());
        let outcome = unsafe {
            let r = &*result;
            if r.success == 1 {
                Ok(CStr::from_ptr(r.data).to_str().unwrap().to_string())
            } else {
                Err(CStr::from_ptr(r.error).to_str().unwrap().to_string())
            }
        };
        free_api_result(result);
        outcome
    }

    fn new_session() -> SessionHandle {
        let mut handle: SessionHandle = std::ptr::null_mut();
        let result = miyu_session_create(std::ptr::null(), &mut handle);
        let data = take_result(result).unwrap();
        assert!(data.contains("session_id"));
        assert!(!handle.is_null());
        handle
    }

    #[test]
    fn test_session_lifecycle() {
        let handle = new_session();
        let text = CString::new("I'm happy and great").unwrap();

        let data = take_result(miyu_session_process_text(handle, text.as_ptr())).unwrap();
        let snapshot: serde_json::Value = serde_json::from_str(&data).unwrap();
        assert_eq!(snapshot["state"]["happiness"], 50.0);
        assert_eq!(snapshot["dominant"], "neutral");

        take_result(miyu_session_process_text(handle, text.as_ptr())).unwrap();
        let dominant = take_result(miyu_session_dominant_emotion(handle)).unwrap();
        assert_eq!(dominant, r#"{"dominant":"happiness"}"#);

        miyu_session_free(handle);
    }

    #[test]
    fn test_update_rejects_unknown_field() {
        let handle = new_session();
        let partial = CString::new(r#"{"joy": 5.0}"#).unwrap();

        let error = take_result(miyu_session_update(handle, partial.as_ptr())).unwrap_err();
        assert!(error.contains("Failed to parse emotional state"));

        let state = take_result(miyu_session_get_state(handle)).unwrap();
        let state: serde_json::Value = serde_json::from_str(&state).unwrap();
        assert_eq!(state["neutral"], 100.0);

        miyu_session_free(handle);
    }

    #[test]
    fn test_update_normalizes() {
        let handle = new_session();
        let partial = CString::new(r#"{"fear": 100.0}"#).unwrap();

        let data = take_result(miyu_session_update(handle, partial.as_ptr())).unwrap();
        let snapshot: serde_json::Value = serde_json::from_str(&data).unwrap();
        assert_eq!(snapshot["state"]["fear"], 50.0);
        assert_eq!(snapshot["state"]["neutral"], 50.0);

        miyu_session_free(handle);
    }

    #[test]
    fn test_null_handle_is_an_error() {
        let error = take_result(miyu_session_get_state(std::ptr::null_mut())).unwrap_err();
        assert!(error.contains("null"));
    }

    #[test]
    fn test_create_with_invalid_config() {
        let mut handle: SessionHandle = std::ptr::null_mut();
        let config = CString::new(r#"{"personality": {"humor": 4.0}}"#).unwrap();

        let error = take_result(miyu_session_create(config.as_ptr(), &mut handle)).unwrap_err();
        assert!(error.contains("Failed to parse config"));
        assert!(handle.is_null());
    }

    #[test]
    fn test_classify_text() {
        let text = CString::new("this is terrible and sad").unwrap();
        let data = take_result(miyu_classify_text(text.as_ptr())).unwrap();
        let state: serde_json::Value = serde_json::from_str(&data).unwrap();
        assert_eq!(state["sadness"], 100.0);
        assert_eq!(state["neutral"], 0.0);
    }

    #[test]
    fn test_decorate_reply() {
        let handle = new_session();
        let reply = CString::new("Hello").unwrap();

        let decorated = take_result(miyu_session_decorate_reply(handle, reply.as_ptr())).unwrap();
        assert_eq!(decorated, "Hello 😊");

        miyu_session_free(handle);
    }
}
