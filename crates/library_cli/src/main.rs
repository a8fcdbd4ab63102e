//! CLI smoke entry point.
//!
//! # Responsibility
//! - Run the reference catalog scenario against `library_core`.
//! - Keep output deterministic apart from generated ids.
//!
//! Logging is enabled when `LIBRARY_LOG_DIR` is set; `LIBRARY_LOG_LEVEL`
//! overrides the build-mode default level.

use library_core::{
    core_version, default_log_level, init_logging, Author, Library, LoggingConfig,
};
use std::process::ExitCode;

const LOG_DIR_ENV: &str = "LIBRARY_LOG_DIR";
const LOG_LEVEL_ENV: &str = "LIBRARY_LOG_LEVEL";

fn main() -> ExitCode {
    println!("library_core version={}", core_version());

    if let Some(config) = logging_config_from_env() {
        if let Err(err) = init_logging(&config) {
            eprintln!("logging disabled: {err}");
        }
    }

    match run_scenario() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("scenario failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn logging_config_from_env() -> Option<LoggingConfig> {
    let log_dir = std::env::var_os(LOG_DIR_ENV)?;
    let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
    Some(LoggingConfig::new(level, log_dir))
}

fn run_scenario() -> Result<(), Box<dyn std::error::Error>> {
    let mut bronte = Author::new("Charlotte", "Bronte");
    let mut lee = Author::new("Harper", "Lee");

    let jane_eyre = bronte.write("Jane Eyre", "October 16, 1847").id();
    bronte.write("The Professor", "1857");
    bronte.write("Villette", "1853");
    let mockingbird = lee.write("To Kill a Mockingbird", "July 11, 1960").id();

    let bronte_id = bronte.id();
    let lee_id = lee.id();

    let mut dpl = Library::new("Denver Public Library");
    dpl.add_author(bronte);
    dpl.add_author(lee);

    println!("library={}", dpl.name());
    for author in dpl.authors() {
        println!("author={} books={}", author.name(), author.books().len());
    }

    for id in [bronte_id, lee_id] {
        let frame = dpl.publication_time_frame_for(id)?;
        let name = dpl.author(id).map(Author::name).unwrap_or_default();
        println!("time_frame author={name} start={} end={}", frame.start, frame.end);
    }

    println!("checkout jane_eyre={}", dpl.checkout(jane_eyre));
    println!("checkout mockingbird={}", dpl.checkout(mockingbird));
    dpl.return_book(mockingbird);
    dpl.return_book(mockingbird);
    println!("checkout mockingbird={}", dpl.checkout(mockingbird));
    dpl.return_book(mockingbird);
    println!("checkout mockingbird={}", dpl.checkout(mockingbird));

    for book in dpl.checked_out_books() {
        println!("checked_out title={}", book.title());
    }
    if let Some(book) = dpl.most_popular_book() {
        println!(
            "most_popular title={} checkouts={}",
            book.title(),
            book.checkout_count()
        );
    }

    Ok(())
}
