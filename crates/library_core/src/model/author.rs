//! Author domain model.
//!
//! # Responsibility
//! - Hold author identity and the ordered list of written books.
//! - Be the only place where new books come into existence.
//!
//! # Invariants
//! - `books` is in write order and only grows.
//! - Every owned book carries this author's `id` as its back-reference.

use crate::model::book::{Book, BookId};
use log::debug;
use serde::Serialize;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for an author.
///
/// Books refer to their author through this handle instead of a reference,
/// so the author keeps sole ownership of its books.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AuthorId(Uuid);

impl AuthorId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying uuid.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for AuthorId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person who writes books.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    id: AuthorId,
    first_name: String,
    last_name: String,
    books: Vec<Book>,
}

impl Author {
    /// Creates an author with a fresh id and no books.
    ///
    /// Names are stored as given; empty text is accepted.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: AuthorId::generate(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            books: Vec::new(),
        }
    }

    pub fn id(&self) -> AuthorId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Full display name, `"<first> <last>"`.
    pub fn name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Writes a new book and appends it to this author's bibliography.
    ///
    /// Writing the same title twice yields two distinct books with distinct
    /// ids. Keep `book.id()` from the returned reference to address the book
    /// later through a `Library`.
    pub fn write(
        &mut self,
        title: impl Into<String>,
        publication_date: impl Into<String>,
    ) -> &Book {
        let book = Book::new(title, publication_date, self.id);
        debug!(
            "event=book_written module=model status=ok author_id={} book_id={}",
            self.id,
            book.id()
        );

        let index = self.books.len();
        self.books.push(book);
        &self.books[index]
    }

    /// Books in write order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Finds one of this author's books by id.
    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id() == id)
    }

    pub(crate) fn book_mut(&mut self, id: BookId) -> Option<&mut Book> {
        self.books.iter_mut().find(|book| book.id() == id)
    }
}
