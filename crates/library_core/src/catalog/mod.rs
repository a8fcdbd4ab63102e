//! Library catalog: the aggregate over registered authors and their books.
//!
//! # Responsibility
//! - Register authors and derive the set of books a library holds.
//! - Own the checkout/return state machine and popularity queries.
//!
//! # Invariants
//! - A book is visible to a library iff its author is registered there.
//! - The book list is always derived from registered authors, never stored.
//! - Checkout failures are soft (`false`), returns are silent and idempotent.

pub mod error;
pub mod library;
