use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::errors::PipelineError;
use crate::ngrams::NgramDictionary;
use crate::record::{ListingRecord, preprocess_line};
use crate::stopwords::StopwordDictionary;
use crate::types::Term;

/// Fully preprocessed input corpus.
#[derive(Clone, Debug, Default)]
pub struct Corpus {
    /// Records in input order.
    pub records: Vec<ListingRecord>,
    /// Every record's tokens followed by its phrases, flattened in encounter
    /// order. Feeds frequency ranking; the order is the ranking tie-break.
    pub terms: Vec<Term>,
}

impl Corpus {
    /// Read and preprocess every listing in `path`.
    ///
    /// Whitespace-only lines carry no record and are skipped. The first
    /// malformed line aborts the whole run, so downstream outputs are never
    /// built from a partially trusted corpus. Line numbers in errors are
    /// 1-based physical positions in the file.
    pub fn from_listings(
        path: impl AsRef<Path>,
        ngrams: &NgramDictionary,
        stopwords: &StopwordDictionary,
    ) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| PipelineError::ListingRead {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);

        let mut corpus = Self::default();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| PipelineError::ListingRead {
                path: path.to_path_buf(),
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let record = preprocess_line(&line, index + 1, ngrams, stopwords)?;
            corpus.terms.extend(record.tokens.iter().cloned());
            corpus.terms.extend(record.ngrams.iter().cloned());
            corpus.records.push(record);
        }
        debug!(
            records = corpus.records.len(),
            terms = corpus.terms.len(),
            "preprocessed listings"
        );
        Ok(corpus)
    }

    /// Number of preprocessed records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the corpus holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
