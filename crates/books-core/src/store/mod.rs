//! In-memory state: the book catalog and the set of live sessions.

pub mod catalog;
pub mod sessions;

pub use catalog::Catalog;
pub use sessions::SessionStore;

/// Everything the service mutates. Kept together so one lock covers both.
#[derive(Debug, Default)]
pub struct Library {
    pub catalog: Catalog,
    pub sessions: SessionStore,
}
