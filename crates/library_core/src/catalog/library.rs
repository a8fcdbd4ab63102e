//! The `Library` aggregate and its checkout state machine.
//!
//! # Invariants
//! - `books()` is Authors in registration order, then books in write order.
//! - Registering the same author id twice is a no-op.
//! - `checkout` mutates only an available book reachable from this library.
//! - `return_book` never fails and never touches `checkout_count`.

use crate::catalog::error::{LibraryError, LibraryResult};
use crate::model::author::{Author, AuthorId};
use crate::model::book::{Book, BookId};
use crate::model::publication::PublicationTimeFrame;
use log::{debug, info};

/// A named collection of registered authors.
///
/// The library takes ownership of registered authors. Use `author_mut` to
/// keep writing books for an author after registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    name: String,
    authors: Vec<Author>,
}

impl Library {
    /// Creates an empty library.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            authors: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers an author and, through it, all of its books.
    ///
    /// Returns `false` without changes when an author with the same id is
    /// already registered.
    pub fn add_author(&mut self, author: Author) -> bool {
        if self.authors.iter().any(|known| known.id() == author.id()) {
            info!(
                "event=author_registered module=catalog status=skipped reason=duplicate author_id={}",
                author.id()
            );
            return false;
        }

        info!(
            "event=author_registered module=catalog status=ok author_id={} book_count={}",
            author.id(),
            author.books().len()
        );
        self.authors.push(author);
        true
    }

    /// Registered authors in registration order.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.authors.iter().find(|author| author.id() == id)
    }

    pub fn author_mut(&mut self, id: AuthorId) -> Option<&mut Author> {
        self.authors.iter_mut().find(|author| author.id() == id)
    }

    /// Every book held by this library, derived from registered authors.
    pub fn books(&self) -> Vec<&Book> {
        self.iter_books().collect()
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.authors.iter().find_map(|author| author.book(id))
    }

    /// Checks a book out.
    ///
    /// Returns `true` when the book belongs to this library and was available;
    /// the book is then marked checked out and its checkout count grows by one.
    /// Returns `false` without changes otherwise. Callers cannot tell an
    /// unknown book from an unavailable one; the debug log can.
    pub fn checkout(&mut self, id: BookId) -> bool {
        let Some(book) = self
            .authors
            .iter_mut()
            .find_map(|author| author.book_mut(id))
        else {
            debug!(
                "event=checkout module=catalog status=rejected reason=not_in_library book_id={id}"
            );
            return false;
        };

        if book.is_checked_out() {
            debug!(
                "event=checkout module=catalog status=rejected reason=already_checked_out book_id={id}"
            );
            return false;
        }

        book.mark_checked_out();
        info!(
            "event=checkout module=catalog status=ok book_id={id} checkout_count={}",
            book.checkout_count()
        );
        true
    }

    /// Books currently checked out, in library order.
    pub fn checked_out_books(&self) -> Vec<&Book> {
        self.iter_books()
            .filter(|book| book.is_checked_out())
            .collect()
    }

    /// Returns a book to the shelf.
    ///
    /// Unknown books and books that are not checked out are ignored, so
    /// returning twice in a row is safe.
    pub fn return_book(&mut self, id: BookId) {
        match self
            .authors
            .iter_mut()
            .find_map(|author| author.book_mut(id))
        {
            Some(book) if book.is_checked_out() => {
                book.mark_returned();
                info!("event=return module=catalog status=ok book_id={id}");
            }
            Some(_) => {
                debug!(
                    "event=return module=catalog status=ignored reason=not_checked_out book_id={id}"
                );
            }
            None => {
                debug!(
                    "event=return module=catalog status=ignored reason=not_in_library book_id={id}"
                );
            }
        }
    }

    /// Earliest and latest publication year across one author's books.
    ///
    /// Books whose date holds no four-digit year are skipped.
    ///
    /// # Errors
    /// - `UnknownAuthor` when the author is not registered here.
    /// - `NoPublicationYears` when no book of the author yields a year.
    pub fn publication_time_frame_for(
        &self,
        author: AuthorId,
    ) -> LibraryResult<PublicationTimeFrame> {
        let registered = self
            .author(author)
            .ok_or(LibraryError::UnknownAuthor(author))?;

        let frame = PublicationTimeFrame::from_years(
            registered.books().iter().filter_map(Book::publication_year),
        )
        .ok_or(LibraryError::NoPublicationYears(author))?;

        debug!(
            "event=time_frame module=catalog status=ok author_id={author} start={} end={}",
            frame.start, frame.end
        );
        Ok(frame)
    }

    /// The book with the highest checkout count.
    ///
    /// Ties go to the book that comes first in library order. Returns `None`
    /// only when the library holds no books.
    pub fn most_popular_book(&self) -> Option<&Book> {
        self.iter_books().fold(None, |best: Option<&Book>, book| match best {
            Some(current) if current.checkout_count() >= book.checkout_count() => Some(current),
            _ => Some(book),
        })
    }

    fn iter_books(&self) -> impl Iterator<Item = &Book> + '_ {
        self.authors.iter().flat_map(|author| author.books().iter())
    }
}

#[cfg(test)]
mod tests {
    use super::Library;
    use crate::model::author::Author;

    #[test]
    fn most_popular_of_empty_library_is_none() {
        let library = Library::new("Empty Branch");
        assert!(library.most_popular_book().is_none());
    }

    #[test]
    fn most_popular_tie_goes_to_first_in_library_order() {
        let mut bronte = Author::new("Charlotte", "Bronte");
        let jane_eyre = bronte.write("Jane Eyre", "October 16, 1847").id();
        let villette = bronte.write("Villette", "1853").id();

        let mut library = Library::new("Denver Public Library");
        library.add_author(bronte);

        assert_eq!(library.most_popular_book().map(|b| b.id()), Some(jane_eyre));

        assert!(library.checkout(villette));
        assert!(library.checkout(jane_eyre));
        assert_eq!(library.most_popular_book().map(|b| b.id()), Some(jane_eyre));
    }
}
