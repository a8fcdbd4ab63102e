//! Core domain logic for the library catalog.
//! Authors write books; a library registers authors and tracks checkouts.

pub mod catalog;
pub mod logging;
pub mod model;

pub use catalog::error::{LibraryError, LibraryResult};
pub use catalog::library::Library;
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::author::{Author, AuthorId};
pub use model::book::{Book, BookId};
pub use model::publication::{extract_year, PublicationTimeFrame};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
