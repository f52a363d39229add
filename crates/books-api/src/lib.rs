//! # Books API
//!
//! HTTP handlers, auth guards, DTOs, and the router for the book catalog.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
