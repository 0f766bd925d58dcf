use std::path::Path;

use crate::dictionary::{self, DictionaryKind};
use crate::errors::PipelineError;
use crate::types::Phrase;

/// Ordered multi-word phrase dictionary.
///
/// Phrase order is matching precedence: earlier entries are extracted first,
/// and their removal can suppress overlapping later entries.
#[derive(Clone, Debug, Default)]
pub struct NgramDictionary {
    phrases: Vec<Phrase>,
}

impl NgramDictionary {
    /// Load one phrase per line from `path` (trimmed, blank lines skipped).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let phrases = dictionary::load_terms(path.as_ref(), DictionaryKind::Ngrams)?;
        Ok(Self { phrases })
    }

    /// Build a dictionary from in-memory phrases, keeping their order.
    pub fn from_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Phrase>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of phrases in the dictionary.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Whether the dictionary holds no phrases.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Extract every known phrase occurring in `text`.
    ///
    /// Phrases are tried in dictionary order; a match removes all of its
    /// occurrences from the working text and records the phrase once, so the
    /// found list comes back in dictionary order, never text order. Each step
    /// scans the previous step's rewrite, which keeps the pass strictly
    /// sequential. Matching is a case-sensitive literal substring check with
    /// no word-boundary awareness.
    pub fn extract(&self, text: &str) -> (String, Vec<Phrase>) {
        let mut remaining = text.to_string();
        let mut found = Vec::new();
        for phrase in &self.phrases {
            if remaining.contains(phrase.as_str()) {
                remaining = remaining.replace(phrase.as_str(), "");
                found.push(phrase.clone());
            }
        }
        (remaining, found)
    }
}
