use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, trace};

use crate::counter::PatternCounter;
use crate::loader::load_content;
use crate::results::SearchOutcome;

/// Runs one search task per file and gathers their results.
///
/// Every coordinator owns its own outcome, so independent searches never
/// share state.
#[derive(Debug)]
pub struct SearchCoordinator {
    counter: PatternCounter,
    outcome: Mutex<SearchOutcome>,
}

impl SearchCoordinator {
    pub fn new(pattern: &str) -> Self {
        Self {
            counter: PatternCounter::new(pattern),
            outcome: Mutex::new(SearchOutcome::new()),
        }
    }

    /// Searches every file concurrently and returns the merged outcome.
    ///
    /// Each file gets its own task on the rayon pool; the scope does not
    /// return until all of them have finished. Files that cannot be read
    /// count as zero matches.
    pub fn run(self, files: &[PathBuf]) -> SearchOutcome {
        debug!("Spawning {} search tasks", files.len());

        let this = &self;
        rayon::scope(|scope| {
            for path in files {
                scope.spawn(move |_| this.search_file(path));
            }
        });

        let mut outcome = self
            .outcome
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        outcome.files_searched = files.len();
        outcome
    }

    fn search_file(&self, path: &Path) {
        let content = match load_content(path) {
            Ok(content) => content,
            Err(err) => {
                debug!("Skipping {}: {}", path.display(), err);
                return;
            }
        };

        let count = self.counter.count(&content);
        trace!("{} matches in {}", count, path.display());
        if count == 0 {
            return;
        }

        // Entry and total are updated under one lock.
        self.outcome
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .record(path.to_path_buf(), count);
    }
}
