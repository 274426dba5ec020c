use std::path::PathBuf;

/// A file that contained the pattern at least once
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileMatch {
    /// The path to the file
    pub path: PathBuf,
    /// Number of non-overlapping occurrences, always at least 1
    pub match_count: usize,
}

/// The aggregated results of one search run
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Files with matches, in the order their tasks finished
    pub results: Vec<FileMatch>,
    /// Total number of matches found
    pub total_matches: usize,
    /// Total number of files searched
    pub files_searched: usize,
}

impl SearchOutcome {
    /// Creates a new empty outcome
    pub fn new() -> Self {
        Default::default()
    }

    /// Records one file's match count.
    ///
    /// The entry and the running total change together; zero counts are
    /// not recorded.
    pub fn record(&mut self, path: PathBuf, match_count: usize) {
        if match_count == 0 {
            return;
        }
        self.total_matches += match_count;
        self.results.push(FileMatch { path, match_count });
    }

    /// Number of files with at least one match
    pub fn files_with_matches(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
