//! Book domain model.
//!
//! # Invariants
//! - Title, publication date and author are fixed at creation.
//! - `checkout_count` never decreases; returning a book leaves it untouched.
//! - Checkout state changes only through crate-internal mutators, so the
//!   `Library` stays the single owner of checkout policy.

use crate::model::author::AuthorId;
use crate::model::publication::extract_year;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BookId(Uuid);

impl BookId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying uuid.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for BookId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A written work plus its circulation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    id: BookId,
    title: String,
    /// Free-form text such as `"October 16, 1847"` or `"1853"`.
    publication_date: String,
    author: AuthorId,
    checked_out: bool,
    checkout_count: u32,
}

impl Book {
    /// Creates an available book that has never been checked out.
    ///
    /// Only `Author::write` calls this, which keeps every book owned by the
    /// author named in `author`.
    pub(crate) fn new(
        title: impl Into<String>,
        publication_date: impl Into<String>,
        author: AuthorId,
    ) -> Self {
        Self {
            id: BookId::generate(),
            title: title.into(),
            publication_date: publication_date.into(),
            author,
            checked_out: false,
            checkout_count: 0,
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn publication_date(&self) -> &str {
        &self.publication_date
    }

    /// Id of the author that wrote this book.
    pub fn author(&self) -> AuthorId {
        self.author
    }

    pub fn is_checked_out(&self) -> bool {
        self.checked_out
    }

    /// Number of successful checkouts over the book's lifetime.
    pub fn checkout_count(&self) -> u32 {
        self.checkout_count
    }

    /// Four-digit year found in the publication date, if any.
    pub fn publication_year(&self) -> Option<&str> {
        extract_year(&self.publication_date)
    }

    pub(crate) fn mark_checked_out(&mut self) {
        self.checked_out = true;
        self.checkout_count = self.checkout_count.saturating_add(1);
    }

    pub(crate) fn mark_returned(&mut self) {
        self.checked_out = false;
    }
}

#[cfg(test)]
mod tests {
    use super::Book;
    use crate::model::author::Author;

    #[test]
    fn new_book_is_available_with_zero_checkouts() {
        let author = Author::new("Harper", "Lee");
        let book = Book::new("To Kill a Mockingbird", "July 11, 1960", author.id());

        assert!(!book.is_checked_out());
        assert_eq!(book.checkout_count(), 0);
        assert_eq!(book.publication_year(), Some("1960"));
    }

    #[test]
    fn return_keeps_checkout_count() {
        let author = Author::new("Harper", "Lee");
        let mut book = Book::new("To Kill a Mockingbird", "July 11, 1960", author.id());

        book.mark_checked_out();
        book.mark_returned();
        book.mark_returned();
        book.mark_checked_out();

        assert!(book.is_checked_out());
        assert_eq!(book.checkout_count(), 2);
    }
}
