use std::path::PathBuf;
use tracing::info;

use super::coordinator::SearchCoordinator;
use crate::config::SearchConfig;
use crate::errors::SearchResult;
use crate::report::Report;
use crate::results::SearchOutcome;
use crate::walker::collect_files;

/// Everything a finished search produced
#[derive(Debug, Clone)]
pub struct SearchOutput {
    /// Every file that was searched, in traversal order
    pub files: Vec<PathBuf>,
    /// Per-file matches and totals
    pub outcome: SearchOutcome,
}

impl SearchOutput {
    pub fn report<'a>(&'a self, pattern: &'a str) -> Report<'a> {
        Report::new(&self.files, &self.outcome, pattern)
    }
}

/// Collects the files under `config.root_path` and searches them concurrently
pub fn search(config: &SearchConfig) -> SearchResult<SearchOutput> {
    config.validate()?;
    info!(
        "Starting search for {:?} in {}",
        config.pattern,
        config.root_path.display()
    );

    let files = collect_files(&config.root_path, config.recursive, &config.file_types);
    let outcome = SearchCoordinator::new(&config.pattern).run(&files);

    info!(
        "Search complete. Found {} matches in {} of {} files",
        outcome.total_matches,
        outcome.files_with_matches(),
        outcome.files_searched
    );

    Ok(SearchOutput { files, outcome })
}
