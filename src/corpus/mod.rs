// Corpus loading: enumerate the text files to compare.
//
// Only immediate entries of the directory are considered. The result keeps
// the filesystem's enumeration order, which becomes the file index order used
// by the ranker.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

/// Extension (without the dot) of files that belong to the corpus.
pub const CORPUS_EXTENSION: &str = "txt";

/// List the `.txt` files directly inside `dir`, in enumeration order.
pub fn load_corpus(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Could not read corpus directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Could not list corpus directory {}", dir.display()))?;
        let path = entry.path();
        if is_corpus_file(&path) {
            files.push(path);
        }
    }

    info!(dir = %dir.display(), files = files.len(), "Loaded corpus");
    Ok(files)
}

/// Whether a path belongs to the corpus. Only the name is checked: an entry
/// named `*.txt` that turns out to be a directory still counts, and fails
/// later as an unreadable file.
fn is_corpus_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == CORPUS_EXTENSION)
}
