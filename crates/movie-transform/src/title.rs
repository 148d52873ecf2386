//! Release-year extraction and title cleanup.
//!
//! A year annotation is `(YYYY)` or `(YYYY-YYYY)` and only counts when no
//! other parenthesized group follows it, so `Alice (In Wonderland) (1999)`
//! keeps its first group and `Heat (1995) (Director's Cut)` has no year.

use std::sync::LazyLock;

use movie_model::ReleaseYear;
use regex::Regex;

/// Final parenthetical year; group 1 is the year text.
static YEAR_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\((\d{4}(?:-\d{4})?)\)[^()]*$").expect("Invalid year annotation regex")
});

/// Final parenthetical year with the whitespace before it; group 1 is the
/// trailing text that must be kept.
static YEAR_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\(\d{4}(?:-\d{4})?\)([^()]*)$").expect("Invalid year suffix regex")
});

/// Extract the release year from the final parenthetical of `title`.
pub fn extract_year(title: &str) -> ReleaseYear {
    YEAR_ANNOTATION
        .captures(title)
        .and_then(|caps| caps.get(1))
        .map_or(ReleaseYear::Unknown, |year| {
            ReleaseYear::from_annotation(year.as_str())
        })
}

/// Remove the final parenthetical year (and the whitespace before it), then trim.
pub fn clean_title(title: &str) -> String {
    YEAR_SUFFIX.replace(title, "${1}").trim().to_string()
}
