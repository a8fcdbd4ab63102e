//! Publication year extraction and time-frame computation.
//!
//! Dates are free-form text (`"October 16, 1847"`, `"1853"`). The year is a
//! textual heuristic: the last standalone run of exactly four ASCII digits.
//! No calendar parsing happens here.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static DIGIT_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]+").expect("valid digit run regex"));

const YEAR_DIGITS: usize = 4;

/// Returns the last four-digit run in `date`, if there is one.
///
/// Longer digit runs (`"18470"`) are not treated as years.
pub fn extract_year(date: &str) -> Option<&str> {
    DIGIT_RUN_RE
        .find_iter(date)
        .map(|run| run.as_str())
        .filter(|run| run.len() == YEAR_DIGITS)
        .last()
}

/// Earliest and latest publication year across a set of books.
///
/// Serialized as a `{ "start": "...", "end": "..." }` mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationTimeFrame {
    pub start: String,
    pub end: String,
}

impl PublicationTimeFrame {
    /// Builds the span covering every year in `years`.
    ///
    /// Returns `None` for an empty input. Years are compared as text, which
    /// matches numeric order because every year has exactly four digits.
    pub fn from_years<'a>(years: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let mut years = years.into_iter();
        let first = years.next()?;
        let (start, end) = years.fold((first, first), |(start, end), year| {
            (start.min(year), end.max(year))
        });

        Some(Self {
            start: start.to_string(),
            end: end.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{extract_year, PublicationTimeFrame};

    #[test]
    fn extract_year_handles_month_day_year_and_bare_year() {
        assert_eq!(extract_year("October 16, 1847"), Some("1847"));
        assert_eq!(extract_year("1853"), Some("1853"));
        assert_eq!(extract_year(" 1857 "), Some("1857"));
    }

    #[test]
    fn extract_year_prefers_last_four_digit_run() {
        assert_eq!(extract_year("1847 reprinted 1853"), Some("1853"));
        assert_eq!(extract_year("1847 edition 12"), Some("1847"));
    }

    #[test]
    fn extract_year_ignores_runs_that_are_not_four_digits() {
        assert_eq!(extract_year("October 16"), None);
        assert_eq!(extract_year("18470"), None);
        assert_eq!(extract_year(""), None);
    }

    #[test]
    fn time_frame_spans_min_and_max() {
        let frame = PublicationTimeFrame::from_years(["1847", "1857", "1853"]).unwrap();
        assert_eq!(frame.start, "1847");
        assert_eq!(frame.end, "1857");
    }

    #[test]
    fn time_frame_of_nothing_is_none() {
        assert_eq!(PublicationTimeFrame::from_years(std::iter::empty()), None);
    }
}
