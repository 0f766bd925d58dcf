use std::path::PathBuf;

use crate::constants::defaults::{OUTPUT_FILE, VOCAB_LIMIT};
use crate::errors::PipelineError;

/// Configuration for one pipeline run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Labeled listings file, one listing per line.
    pub input: PathBuf,
    /// Destination for the vocabulary/record summary.
    pub output: PathBuf,
    /// Optional destination for the ARFF feature matrix.
    pub arff: Option<PathBuf>,
    /// Phrase dictionary, one phrase per line.
    pub ngrams: PathBuf,
    /// Stopword dictionary, one word per line.
    pub stopwords: PathBuf,
    /// Cap on ranked terms carried into outputs; clamped to the vocabulary.
    pub vocab_limit: usize,
}

impl PipelineConfig {
    /// Create a config with explicit inputs and default output settings.
    pub fn new(
        input: impl Into<PathBuf>,
        ngrams: impl Into<PathBuf>,
        stopwords: impl Into<PathBuf>,
    ) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(OUTPUT_FILE),
            arff: None,
            ngrams: ngrams.into(),
            stopwords: stopwords.into(),
            vocab_limit: VOCAB_LIMIT,
        }
    }

    /// Override the summary destination.
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Enable ARFF output at the given destination.
    pub fn with_arff(mut self, arff: impl Into<PathBuf>) -> Self {
        self.arff = Some(arff.into());
        self
    }

    /// Override the ranked-term cap.
    pub fn with_vocab_limit(mut self, vocab_limit: usize) -> Self {
        self.vocab_limit = vocab_limit;
        self
    }

    /// Reject configs with empty paths before any file is touched.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.input.as_os_str().is_empty() {
            return Err(PipelineError::Configuration(
                "input path is empty".to_string(),
            ));
        }
        if self.ngrams.as_os_str().is_empty() {
            return Err(PipelineError::Configuration(
                "n-gram dictionary path is empty".to_string(),
            ));
        }
        if self.stopwords.as_os_str().is_empty() {
            return Err(PipelineError::Configuration(
                "stopword dictionary path is empty".to_string(),
            ));
        }
        if self.output.as_os_str().is_empty() {
            return Err(PipelineError::Configuration(
                "output path is empty".to_string(),
            ));
        }
        if let Some(arff) = &self.arff
            && arff.as_os_str().is_empty()
        {
            return Err(PipelineError::Configuration(
                "arff path is empty".to_string(),
            ));
        }
        Ok(())
    }
}
