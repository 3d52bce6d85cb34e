use std::io::Write;

use miyu_emotion::config::{ConfigError, Identity, PersonaConfig, PersonalityTraits};
use miyu_emotion::{ConversationSession, Emotion};

#[test]
fn test_identity() {
    let identity = Identity::new("Miyu", "Companion");
    assert_eq!(identity.name, "Miyu");
    assert_eq!(identity.background, "Companion");

    let default = Identity::default();
    assert_eq!(default.name, "Miyu");
    assert_eq!(default.background, "");
}

#[test]
fn test_personality_traits() {
    let mut traits = PersonalityTraits::new();
    assert_eq!(traits.friendliness, 0.8);
    assert_eq!(traits.humor, 0.5);
    assert_eq!(traits.formality, 0.3);
    assert_eq!(traits.curiosity, 0.7);
    assert!(traits.validate().is_ok());

    traits.curiosity = -0.1;
    assert!(traits.validate().is_err());
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[identity]
name = "Miyu"
background = "AR companion"

[personality]
friendliness = 0.2
humor = 0.9
formality = 0.8
curiosity = 0.5

[emotion.initial]
happiness = 100.0
neutral = 0.0
"#
    )
    .unwrap();

    let config = PersonaConfig::from_file(file.path()).unwrap();
    assert_eq!(config.identity.background, "AR companion");
    assert_eq!(config.personality.humor, 0.9);

    let session = ConversationSession::new(&config).unwrap();
    assert_eq!(session.model().dominant_emotion(), Emotion::Happiness);
    assert_eq!(
        session.decorate_reply("Hi"),
        "Dear user, Hi Just kidding! 😄 I'm feeling great today! 🌟"
    );
}

#[test]
fn test_from_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let result = PersonaConfig::from_file(dir.path().join("absent.toml"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_from_toml_unknown_emotion_field() {
    let result = PersonaConfig::from_toml_str("[emotion.initial]\njoy = 10.0\n");
    assert!(matches!(result, Err(ConfigError::Toml(_))));
}

#[test]
fn test_from_toml_invalid_trait() {
    let result = PersonaConfig::from_toml_str("[personality]\nhumor = 2.0\n");
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn test_empty_toml_is_default() {
    let config = PersonaConfig::from_toml_str("").unwrap();
    assert_eq!(config.identity.name, "Miyu");
    assert_eq!(config.personality, PersonalityTraits::default());
    assert!(config.emotion.initial.is_empty());
}
