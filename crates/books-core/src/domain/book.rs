// ============================================================================
// Books Core - Book Entity
// File: crates/books-core/src/domain/book.rs
// ============================================================================

use books_shared::constants::{DEFAULT_AUTHOR, DEFAULT_TITLE};
use books_shared::{new_id, EntityId};
use serde::{Deserialize, Serialize};

/// Book entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: EntityId,
    pub title: String,
    pub author: String,
}

impl Book {
    /// New book with a fresh id. Absent fields fall back to an empty title
    /// and the "No Name" author; present fields are stored as given.
    pub fn new(title: Option<String>, author: Option<String>) -> Self {
        Self {
            id: new_id(),
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            author: author.unwrap_or_else(|| DEFAULT_AUTHOR.to_string()),
        }
    }
}

/// Partial update: `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl BookPatch {
    pub fn apply(self, book: &mut Book) {
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(author) = self.author {
            book.author = author;
        }
    }
}
