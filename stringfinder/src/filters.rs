//! Path filtering for the file walker.
//!
//! Filters are plain substrings tested against the whole path string, not
//! anchored extensions: `.txt` accepts `notes.txt` as well as
//! `notes.txtarchive` and `dir.txt/readme`. Existing invocations rely on
//! this, so it stays a substring test.

use std::path::Path;

/// Checks if a path passes the file type filters.
///
/// An empty filter list accepts every path.
pub fn has_file_type(path: &Path, file_types: &[String]) -> bool {
    if file_types.is_empty() {
        return true;
    }
    let path_str = path.to_string_lossy();
    file_types.iter().any(|t| path_str.contains(t.as_str()))
}
