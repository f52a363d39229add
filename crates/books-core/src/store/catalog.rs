use crate::domain::{Book, BookPatch, ListQuery, SortOrder};

/// Ordered book list. Ids are unique because they are only ever minted by
/// [`Book::new`].
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Copy of the catalog, sorted and truncated per `query`. The stored
    /// order is never changed.
    pub fn list(&self, query: &ListQuery) -> Vec<Book> {
        let mut result = self.books.clone();
        if query.sort == SortOrder::ByTitle {
            // stable: equal titles keep insertion order
            result.sort_by(|a, b| a.title.cmp(&b.title));
        }
        if let Some(limit) = query.limit {
            result.truncate(limit);
        }
        result
    }

    pub fn find(&self, id: &str) -> Option<&Book> {
        self.books.iter().rfind(|book| book.id == id)
    }

    pub fn insert(&mut self, book: Book) {
        self.books.push(book);
    }

    /// Apply `patch` to the book with `id`, returning the updated copy.
    pub fn update(&mut self, id: &str, patch: BookPatch) -> Option<Book> {
        let book = self.books.iter_mut().find(|book| book.id == id)?;
        patch.apply(book);
        Some(book.clone())
    }

    /// Drop every book with `id`; returns how many were removed.
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.books.len();
        self.books.retain(|book| book.id != id);
        before - self.books.len()
    }

    pub fn clear(&mut self) -> usize {
        let removed = self.books.len();
        self.books.clear();
        removed
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
