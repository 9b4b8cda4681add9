use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Directory scanned for `.txt` files when nothing else is configured.
pub const DEFAULT_CORPUS_DIR: &str = "./BOOKS";

/// Number of files the ranking expects to find in the corpus.
pub const EXPECTED_CORPUS_SIZE: usize = 64;

/// How many of a file's most frequent words make up its profile.
pub const MAX_FREQUENT_WORDS: usize = 100;

/// How many pairs the report shows.
pub const TOP_PAIRS: usize = 10;

/// Central configuration loaded from environment variables.
///
/// Every field has a default, so running with an empty environment behaves
/// like the classic 64-book assignment. The .env file is loaded at startup
/// via dotenvy. CLI flags are applied on top with [`Config::with_overrides`].
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory containing the corpus (BOOKPAIRS_CORPUS_DIR)
    pub corpus_dir: PathBuf,
    /// Exact number of files the corpus must contain (BOOKPAIRS_EXPECTED_FILES)
    pub expected_files: usize,
    /// Profile size per file (BOOKPAIRS_MAX_WORDS)
    pub max_words: usize,
    /// Number of pairs to report (BOOKPAIRS_TOP_PAIRS)
    pub top_pairs: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_dir: PathBuf::from(DEFAULT_CORPUS_DIR),
            expected_files: EXPECTED_CORPUS_SIZE,
            max_words: MAX_FREQUENT_WORDS,
            top_pairs: TOP_PAIRS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `load` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            corpus_dir: lookup("BOOKPAIRS_CORPUS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.corpus_dir),
            expected_files: parse_count(&lookup, "BOOKPAIRS_EXPECTED_FILES")?
                .unwrap_or(defaults.expected_files),
            max_words: parse_count(&lookup, "BOOKPAIRS_MAX_WORDS")?
                .unwrap_or(defaults.max_words),
            top_pairs: parse_count(&lookup, "BOOKPAIRS_TOP_PAIRS")?
                .unwrap_or(defaults.top_pairs),
        };

        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides. `None` keeps the loaded value.
    pub fn with_overrides(
        mut self,
        corpus_dir: Option<PathBuf>,
        expected_files: Option<usize>,
        max_words: Option<usize>,
        top_pairs: Option<usize>,
    ) -> Result<Self> {
        if let Some(dir) = corpus_dir {
            self.corpus_dir = dir;
        }
        if let Some(n) = expected_files {
            self.expected_files = n;
        }
        if let Some(n) = max_words {
            self.max_words = n;
        }
        if let Some(n) = top_pairs {
            self.top_pairs = n;
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject values that would make the ranking meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.expected_files < 2 {
            anyhow::bail!(
                "Expected corpus size must be at least 2 (got {}).\n\
                 Set BOOKPAIRS_EXPECTED_FILES or pass --expected.",
                self.expected_files
            );
        }
        if self.max_words == 0 {
            anyhow::bail!("BOOKPAIRS_MAX_WORDS must be at least 1");
        }
        if self.top_pairs == 0 {
            anyhow::bail!("BOOKPAIRS_TOP_PAIRS must be at least 1");
        }
        Ok(())
    }
}

fn parse_count<F>(lookup: &F, key: &str) -> Result<Option<usize>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map(Some)
            .with_context(|| format!("{key} must be a non-negative integer, got {raw:?}")),
    }
}
