pub mod emotion;
pub mod personality;
pub mod session;
