//! # Books Core - Domain Module

pub mod book;
pub mod query;

pub use book::{Book, BookPatch};
pub use query::{ListQuery, SortOrder};
