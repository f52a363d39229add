//! # Books Security
//!
//! Security utilities: HTTP Basic credentials, session tokens, cookies.

pub mod cookie;
pub mod credentials;
pub mod session;

pub use credentials::{CredentialError, Credentials};
pub use session::SessionToken;
