use serde::Deserialize;
use std::path::PathBuf;

use crate::errors::{SearchError, SearchResult};

/// Configuration for a single search run.
///
/// A config is built once from validated input and never changed while the
/// search is in flight. Missing fields fall back to the same defaults the
/// command line uses:
///
/// ```json
/// {
///     "root_path": ".",
///     "pattern": "TODO",
///     "recursive": true,
///     "file_types": [],
///     "log_level": "warn"
/// }
/// ```
///
/// Only `root_path` and `pattern` are required; the values shown for the
/// other fields are their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchConfig {
    /// File or directory to start the search from
    pub root_path: PathBuf,

    /// Literal text to search for
    pub pattern: String,

    /// Descend into subdirectories
    #[serde(default = "default_recursive")]
    pub recursive: bool,

    /// Substrings a path must contain (any one of them) to be searched.
    /// Matched anywhere in the path, so ".txt" also accepts "notes.txtarchive".
    #[serde(default)]
    pub file_types: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_recursive() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl SearchConfig {
    /// Creates a recursive, unfiltered search for `pattern` under `root_path`
    pub fn new(root_path: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        Self {
            root_path: root_path.into(),
            pattern: pattern.into(),
            recursive: default_recursive(),
            file_types: Vec::new(),
            log_level: default_log_level(),
        }
    }

    pub fn with_file_types(mut self, file_types: Vec<String>) -> Self {
        self.file_types = file_types;
        self
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    pub fn with_log_level(mut self, log_level: impl Into<String>) -> Self {
        self.log_level = log_level.into();
        self
    }

    /// Rejects configurations the search cannot act on.
    pub fn validate(&self) -> SearchResult<()> {
        if self.pattern.is_empty() {
            return Err(SearchError::invalid_pattern("pattern must not be empty"));
        }
        if self.root_path.as_os_str().is_empty() {
            return Err(SearchError::config_error("root path must not be empty"));
        }
        Ok(())
    }
}

/// Splits a comma-separated filter list such as `.txt,.md,.csv`.
///
/// Segments are kept verbatim (no trimming) since they are matched as raw
/// substrings; empty segments are dropped.
pub fn parse_file_types(list: &str) -> Vec<String> {
    list.split(',')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
