//! # Books Shared
//!
//! Configuration, telemetry, constants, and id helpers shared by the
//! catalog crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod telemetry;
pub mod types;

pub use error::AppError;
pub use types::*;
