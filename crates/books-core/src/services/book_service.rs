// ============================================================================
// Books Core - Book Service
// File: crates/books-core/src/services/book_service.rs
// ============================================================================
//! Login, session checks, and catalog operations.
//!
//! The catalog and the session store live behind one mutex, so each call is
//! atomic with respect to every other call. No call holds the lock across an
//! await point.

use books_security::{Credentials, SessionToken};
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::domain::{Book, BookPatch, ListQuery};
use crate::error::DomainError;
use crate::store::Library;

pub struct BookService {
    credentials: Credentials,
    library: Mutex<Library>,
}

impl BookService {
    /// Empty catalog, no sessions, and `credentials` as the only accepted login.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            library: Mutex::new(Library::default()),
        }
    }

    /// Check a presented credential pair against the configured one.
    pub fn authenticate(&self, presented: &Credentials) -> Result<(), DomainError> {
        if self.credentials.matches(presented) {
            Ok(())
        } else {
            warn!("Login failed for user: {}", presented.username);
            Err(DomainError::InvalidCredentials)
        }
    }

    /// Issue a fresh token and record it as valid for the rest of the process.
    pub fn open_session(&self) -> SessionToken {
        let token = SessionToken::generate();
        let mut library = self.library.lock();
        library.sessions.insert(token.clone());
        info!("Session opened ({} active)", library.sessions.len());
        token
    }

    pub fn login(&self, presented: &Credentials) -> Result<SessionToken, DomainError> {
        self.authenticate(presented)?;
        Ok(self.open_session())
    }

    pub fn verify_session(&self, token: Option<&str>) -> Result<(), DomainError> {
        let valid = match token {
            Some(token) => self.library.lock().sessions.contains(token),
            None => false,
        };
        if valid {
            Ok(())
        } else {
            debug!("Rejected session cookie (present: {})", token.is_some());
            Err(DomainError::InvalidSession)
        }
    }

    pub fn list_books(&self, query: &ListQuery) -> Vec<Book> {
        let books = self.library.lock().catalog.list(query);
        debug!(
            "Listed {} books (sort: {:?}, limit: {:?})",
            books.len(),
            query.sort,
            query.limit
        );
        books
    }

    /// `None` when no book has `id`. Not an error.
    pub fn get_book(&self, id: &str) -> Option<Book> {
        self.library.lock().catalog.find(id).cloned()
    }

    pub fn add_book(&self, title: Option<String>, author: Option<String>) -> Book {
        let book = Book::new(title, author);
        self.library.lock().catalog.insert(book.clone());
        info!("Book added: {}", book.id);
        book
    }

    pub fn update_book(&self, id: &str, patch: BookPatch) -> Result<Book, DomainError> {
        let updated = self.library.lock().catalog.update(id, patch);
        match updated {
            Some(book) => {
                info!("Book updated: {}", id);
                Ok(book)
            }
            None => {
                warn!("Update for unknown book: {}", id);
                Err(DomainError::BookNotFound(id.to_string()))
            }
        }
    }

    /// Remove every book with `id`. Unknown ids remove nothing and are not an error.
    pub fn delete_book(&self, id: &str) -> usize {
        let removed = self.library.lock().catalog.remove(id);
        info!("Book delete: {} ({} removed)", id, removed);
        removed
    }

    pub fn clear_catalog(&self) -> usize {
        let removed = self.library.lock().catalog.clear();
        info!("Catalog cleared ({} removed)", removed);
        removed
    }

    pub fn book_count(&self) -> usize {
        self.library.lock().catalog.len()
    }

    pub fn session_count(&self) -> usize {
        self.library.lock().sessions.len()
    }
}
