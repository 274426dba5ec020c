//! Concurrent search over a list of files.
//!
//! [`engine::search`] is the usual entry point: it walks the configured
//! root, hands the file list to a [`SearchCoordinator`] and returns both.
//! The coordinator spawns one task per file on the rayon pool; each task
//! loads the file, counts the pattern and, when it found something, records
//! its entry and its share of the total under a single lock.

pub mod coordinator;
pub mod engine;

pub use coordinator::SearchCoordinator;
pub use engine::{search, SearchOutput};
