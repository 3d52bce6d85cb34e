pub mod emotion_mock;

pub use emotion_mock::*;
