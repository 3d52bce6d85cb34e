pub mod session_service;
pub mod validation_service;
