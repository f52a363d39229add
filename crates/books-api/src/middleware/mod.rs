pub mod auth;

pub use auth::{require_basic_auth, require_session};
