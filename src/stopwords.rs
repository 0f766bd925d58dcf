use std::path::Path;

use crate::dictionary::{self, DictionaryKind};
use crate::errors::PipelineError;
use crate::types::Token;

/// Stopword list applied to listing bodies after phrase extraction.
#[derive(Clone, Debug, Default)]
pub struct StopwordDictionary {
    words: Vec<Token>,
}

impl StopwordDictionary {
    /// Load one stopword per line from `path` (trimmed, blank lines skipped).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let words = dictionary::load_terms(path.as_ref(), DictionaryKind::Stopwords)?;
        Ok(Self { words })
    }

    /// Build a dictionary from in-memory words, keeping their order.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Token>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of stopwords in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Remove every whitespace-bounded occurrence of each stopword.
    ///
    /// The text is padded with one space per side so words at the start and
    /// end carry the same boundary as interior words. Each removal leaves a
    /// single space behind, which doubles as the boundary for an immediately
    /// following stopword, so runs of consecutive stopwords all go.
    /// Occurrences embedded in longer words are kept. The result may hold
    /// irregular spacing; callers collapse it afterwards.
    pub fn remove(&self, text: &str) -> String {
        let mut remaining = format!(" {text} ");
        for word in &self.words {
            let needle = format!(" {word} ");
            while let Some(at) = remaining.find(&needle) {
                remaining.replace_range(at..at + needle.len(), " ");
            }
        }
        remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::collapse_whitespace;

    #[test]
    fn remove_drops_words_at_the_edges() {
        let stopwords = StopwordDictionary::from_words(["the", "a"]);
        let cleaned = collapse_whitespace(stopwords.remove("the cat sat on a mat"));
        assert_eq!(cleaned, "cat sat on mat");
    }

    #[test]
    fn remove_keeps_embedded_occurrences() {
        let stopwords = StopwordDictionary::from_words(["the"]);
        let cleaned = collapse_whitespace(stopwords.remove("the theater by the lathe"));
        assert_eq!(cleaned, "theater by lathe");
    }

    #[test]
    fn remove_clears_consecutive_stopwords() {
        let stopwords = StopwordDictionary::from_words(["is", "a"]);
        let cleaned = collapse_whitespace(stopwords.remove("this is a is a camper"));
        assert_eq!(cleaned, "this camper");
    }

    #[test]
    fn remove_handles_stopword_only_text() {
        let stopwords = StopwordDictionary::from_words(["the", "a"]);
        let cleaned = collapse_whitespace(stopwords.remove("the a the"));
        assert_eq!(cleaned, "");
    }

    #[test]
    fn empty_dictionary_changes_nothing() {
        let stopwords = StopwordDictionary::default();
        let cleaned = collapse_whitespace(stopwords.remove("left as is"));
        assert_eq!(cleaned, "left as is");
    }
}
