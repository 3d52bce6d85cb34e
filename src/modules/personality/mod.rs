pub mod engine;

pub use engine::{PersonalityEngine, PersonalityError, PersonalityTrait};
