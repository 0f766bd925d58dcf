//! Word-list loading shared by the n-gram and stopword dictionaries.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::errors::PipelineError;

/// Identifies which word list an operation was working with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DictionaryKind {
    /// Multi-word phrase dictionary.
    Ngrams,
    /// Stopword dictionary.
    Stopwords,
}

impl fmt::Display for DictionaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DictionaryKind::Ngrams => f.write_str("n-gram"),
            DictionaryKind::Stopwords => f.write_str("stopword"),
        }
    }
}

/// Read a one-entry-per-line word list, trimming entries and skipping blanks.
/// Entry order is preserved; it drives matching precedence downstream.
pub fn load_terms(path: &Path, kind: DictionaryKind) -> Result<Vec<String>, PipelineError> {
    let raw = fs::read_to_string(path).map_err(|source| PipelineError::DictionaryLoad {
        kind,
        path: path.to_path_buf(),
        source,
    })?;
    let entries = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    Ok(entries)
}
