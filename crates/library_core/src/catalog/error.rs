//! Errors for catalog queries that cannot produce an answer.

use crate::model::author::AuthorId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type LibraryResult<T> = Result<T, LibraryError>;

/// Query-level failures raised by `Library` lookups.
///
/// Checkout and return never produce these; they report through their
/// return value instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// The author is not registered with this library.
    UnknownAuthor(AuthorId),
    /// The author has no book whose publication date contains a year.
    NoPublicationYears(AuthorId),
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAuthor(id) => write!(f, "author not registered with library: {id}"),
            Self::NoPublicationYears(id) => {
                write!(f, "author has no books with a publication year: {id}")
            }
        }
    }
}

impl Error for LibraryError {}
