//! Domain errors

use books_shared::constants::{MSG_BOOK_NOT_FOUND, MSG_INVALID_COOKIE, MSG_INVALID_CREDENTIALS};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Login with a username/password pair other than the configured one.
    #[error("{}", MSG_INVALID_CREDENTIALS)]
    InvalidCredentials,

    /// Missing or unknown session cookie on a protected operation.
    #[error("{}", MSG_INVALID_COOKIE)]
    InvalidSession,

    #[error("{}", MSG_BOOK_NOT_FOUND)]
    BookNotFound(String),
}
