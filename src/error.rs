// Error types for corpus profiling and ranking.
//
// Only two failures are modelled. An unreadable file is recovered by the
// ranker (the file gets an empty profile); a corpus of the wrong size stops
// the ranking before any file is read.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimilarityError {
    /// The file could not be opened or read. Permission and read errors are
    /// folded into this variant.
    #[error("Could not open file {}", .path.display())]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The corpus does not contain exactly the expected number of files.
    #[error("Expected {expected} files, but found {found}")]
    CorpusSizeMismatch { expected: usize, found: usize },
}

impl SimilarityError {
    /// Path of the offending file, for the recoverable variant.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            SimilarityError::UnreadableFile { path, .. } => Some(path),
            SimilarityError::CorpusSizeMismatch { .. } => None,
        }
    }
}
