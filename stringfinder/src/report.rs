//! Plain-text rendering of a finished search.
//!
//! The layout is line oriented and stable so it can be diffed or grepped:
//!
//! ```text
//! /abs/path/a.txt
//! /abs/path/b.md
//!
//! Searched 2 files.
//!
//! Search results:
//! /abs/path/a.txt : 2 matches
//!
//! Found 2 matches for "foo" in 1 file.
//! ```
//!
//! Search results appear in the order the search tasks finished.

use std::fmt;
use std::path::PathBuf;

use crate::results::SearchOutcome;

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}

/// A report over the searched files and their outcome
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    files: &'a [PathBuf],
    outcome: &'a SearchOutcome,
    pattern: &'a str,
}

impl<'a> Report<'a> {
    pub fn new(files: &'a [PathBuf], outcome: &'a SearchOutcome, pattern: &'a str) -> Self {
        Self {
            files,
            outcome,
            pattern,
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for path in self.files {
            writeln!(f, "{}", path.display())?;
        }

        let searched = self.files.len();
        writeln!(f)?;
        writeln!(f, "Searched {} {}.", searched, plural(searched, "file", "files"))?;

        if self.outcome.results.is_empty() {
            return writeln!(f, "No matches found for \"{}\".", self.pattern);
        }

        writeln!(f)?;
        writeln!(f, "Search results:")?;
        for result in &self.outcome.results {
            writeln!(
                f,
                "{} : {} {}",
                result.path.display(),
                result.match_count,
                plural(result.match_count, "match", "matches")
            )?;
        }

        let total = self.outcome.total_matches;
        let matching = self.outcome.results.len();
        writeln!(f)?;
        if matching == 1 {
            writeln!(
                f,
                "Found {} {} for \"{}\" in 1 file.",
                total,
                plural(total, "match", "matches"),
                self.pattern
            )
        } else {
            writeln!(
                f,
                "Found {} {} for \"{}\" in {} different files.",
                total,
                plural(total, "match", "matches"),
                self.pattern,
                matching
            )
        }
    }
}

/// Renders the report for `files` and `outcome` into a string.
pub fn format_report(files: &[PathBuf], outcome: &SearchOutcome, pattern: &str) -> String {
    Report::new(files, outcome, pattern).to_string()
}
