//! # Books Core
//!
//! Book entities, the in-memory catalog and session store, and the
//! [`BookService`] that owns both behind a single lock.

pub mod domain;
pub mod error;
pub mod services;
pub mod store;

pub use domain::*;
pub use error::DomainError;
pub use services::BookService;
