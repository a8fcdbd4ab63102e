//! Domain model for authors, the books they write, and publication years.
//!
//! # Responsibility
//! - Define the owned object graph: an `Author` owns its `Book`s.
//! - Provide stable identifiers used as non-owning handles.
//! - Extract publication years from free-form date text.
//!
//! # Invariants
//! - Every book is owned by exactly one author, the one that wrote it.
//! - Books point back to their author by `AuthorId`, never by reference.

pub mod author;
pub mod book;
pub mod publication;
