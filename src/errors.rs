use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::dictionary::DictionaryKind;

/// Error type for configuration, preprocessing, and output failures.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("malformed listing on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
    #[error("failed to load the {kind} dictionary from '{}': {source}", path.display())]
    DictionaryLoad {
        kind: DictionaryKind,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read listings from '{}': {source}", path.display())]
    ListingRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
