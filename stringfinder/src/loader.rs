use memmap2::Mmap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::ops::Deref;
use std::path::Path;
use tracing::trace;

use crate::errors::{SearchError, SearchResult};

const BUFFER_CAPACITY: usize = 65536;
pub(crate) const LARGE_FILE_THRESHOLD: u64 = 10 * 1024 * 1024; // 10MB

/// The full byte content of one file.
#[derive(Debug)]
pub enum FileContent {
    Buffered(Vec<u8>),
    Mapped(Mmap),
}

impl Deref for FileContent {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            FileContent::Buffered(bytes) => bytes.as_slice(),
            FileContent::Mapped(mmap) => &mmap[..],
        }
    }
}

/// Reads the whole of `path` as raw bytes.
///
/// Large files are memory mapped instead of copied. Missing files and
/// permission problems come back as `FileNotFound` / `PermissionDenied`
/// so callers can skip the file and carry on.
pub fn load_content(path: &Path) -> SearchResult<FileContent> {
    let file = File::open(path).map_err(|e| SearchError::from_io(path, e))?;
    let len = file
        .metadata()
        .map_err(|e| SearchError::from_io(path, e))?
        .len();

    if len >= LARGE_FILE_THRESHOLD {
        trace!("Mapping large file: {} ({} bytes)", path.display(), len);
        // SAFETY: the mapping is read-only and dropped once the file is counted.
        let mmap = unsafe { Mmap::map(&file) }.map_err(|e| SearchError::from_io(path, e))?;
        return Ok(FileContent::Mapped(mmap));
    }

    trace!("Reading file: {} ({} bytes)", path.display(), len);
    let mut reader = BufReader::with_capacity(BUFFER_CAPACITY, file);
    let mut bytes = Vec::with_capacity(len as usize);
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| SearchError::from_io(path, e))?;
    Ok(FileContent::Buffered(bytes))
}
