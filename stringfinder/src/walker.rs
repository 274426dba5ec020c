use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

use crate::errors::SearchError;
use crate::filters::has_file_type;

/// Collects the files a search should visit, in traversal order.
///
/// `root` may be a single file or a directory. Directories are walked
/// depth-first in the order the filesystem returns entries; without
/// `recursive` only the direct entries of `root` are considered. Directory
/// entries themselves are never returned. No ignore files or hidden-file
/// rules apply; every entry is a candidate.
///
/// Errors on individual entries (missing root, permission denied, symlink
/// loops) are logged and skipped, so the walk always returns whatever it
/// managed to collect. Returned paths are absolute.
pub fn collect_files(root: &Path, recursive: bool, file_types: &[String]) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false).follow_links(true);
    if !recursive {
        builder.max_depth(Some(1));
    }

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("{}", SearchError::walk(err));
                continue;
            }
        };

        if entry.file_type().is_some_and(|ft| ft.is_dir()) {
            continue;
        }
        if !has_file_type(entry.path(), file_types) {
            trace!("Filtered out: {}", entry.path().display());
            continue;
        }

        match std::path::absolute(entry.path()) {
            Ok(path) => {
                trace!("Adding file: {}", path.display());
                files.push(path);
            }
            Err(err) => warn!("{}", SearchError::from_io(entry.path(), err)),
        }
    }

    debug!(
        "Collected {} files under {} ({})",
        files.len(),
        root.display(),
        if recursive { "recursive" } else { "non-recursive" }
    );
    files
}
