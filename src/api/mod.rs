pub mod types;
pub(crate) mod services;
pub mod endpoints;

pub use types::{ApiResult, SessionHandle};
pub use endpoints::*;
