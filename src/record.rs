use crate::errors::PipelineError;
use crate::ngrams::NgramDictionary;
use crate::normalize::{collapse_whitespace, strip_punctuation};
use crate::price::extract_max_price;
use crate::stopwords::StopwordDictionary;
use crate::types::{ClassLabel, ListingUrl, Phrase, PriceText, Token};

/// One fully preprocessed listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRecord {
    /// Listing URL, passed through untouched.
    pub url: ListingUrl,
    /// Class label from the second input field; not validated here.
    pub classification: ClassLabel,
    /// Largest dollar figure in the body, or `?` when none was found.
    pub price: PriceText,
    /// Phrases matched and removed from the body, in dictionary order.
    pub ngrams: Vec<Phrase>,
    /// Words left after extraction and filtering, in text order.
    pub tokens: Vec<Token>,
}

impl ListingRecord {
    /// Whether `term` is one of this record's extracted phrases or tokens.
    /// Exact string equality, never substring matching.
    pub fn contains_term(&self, term: &str) -> bool {
        self.ngrams.iter().any(|phrase| phrase == term)
            || self.tokens.iter().any(|token| token == term)
    }
}

/// Preprocess one listing line into a record.
///
/// The first whitespace-delimited field is the URL, the second the class
/// label, and the rest the body. The body runs through a fixed stage order:
/// join and lowercase, price extraction, punctuation stripping, phrase
/// extraction, stopword removal, whitespace collapsing, then tokenization.
/// The same line and dictionaries always produce the same record.
pub fn preprocess_line(
    raw: &str,
    line_number: usize,
    ngrams: &NgramDictionary,
    stopwords: &StopwordDictionary,
) -> Result<ListingRecord, PipelineError> {
    let mut fields = raw.split_whitespace();
    let (Some(url), Some(classification)) = (fields.next(), fields.next()) else {
        return Err(PipelineError::MalformedRecord {
            line: line_number,
            reason: "expected a URL and a class label before the listing text".to_string(),
        });
    };

    let body = fields.collect::<Vec<_>>().join(" ").to_lowercase();
    let price = extract_max_price(&body);
    let stripped = strip_punctuation(&body);
    let (remaining, phrases) = ngrams.extract(&stripped);
    let filtered = stopwords.remove(&remaining);
    let tokens = collapse_whitespace(filtered)
        .split_whitespace()
        .map(str::to_string)
        .collect();

    Ok(ListingRecord {
        url: url.to_string(),
        classification: classification.to_string(),
        price,
        ngrams: phrases,
        tokens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionaries() -> (NgramDictionary, StopwordDictionary) {
        (
            NgramDictionary::from_phrases(["holiday rambler"]),
            StopwordDictionary::from_words(["the", "a", "and", "with"]),
        )
    }

    #[test]
    fn preprocess_line_runs_the_full_stage_order() {
        let (ngrams, stopwords) = dictionaries();
        let line = "https://rv.example/lst/1 Class_A 1999 Holiday Rambler, sleeps 6, $8,500 obo";
        let record = preprocess_line(line, 1, &ngrams, &stopwords).expect("well-formed line");
        assert_eq!(record.url, "https://rv.example/lst/1");
        assert_eq!(record.classification, "Class_A");
        assert_eq!(record.price, "8500");
        assert_eq!(record.ngrams, vec!["holiday rambler"]);
        assert_eq!(record.tokens, vec!["1999", "sleeps", "6", "8500", "obo"]);
    }

    #[test]
    fn preprocess_line_is_deterministic() {
        let (ngrams, stopwords) = dictionaries();
        let line = "https://rv.example/lst/2 Towable The camper with a Holiday Rambler decal";
        let first = preprocess_line(line, 7, &ngrams, &stopwords).expect("well-formed line");
        let second = preprocess_line(line, 7, &ngrams, &stopwords).expect("well-formed line");
        assert_eq!(first, second);
    }

    #[test]
    fn preprocess_line_rejects_lines_without_a_class_label() {
        let (ngrams, stopwords) = dictionaries();
        let err = preprocess_line("https://rv.example/lst/9", 14, &ngrams, &stopwords)
            .expect_err("missing class label");
        assert!(matches!(
            err,
            PipelineError::MalformedRecord { line: 14, .. }
        ));
        assert!(err.to_string().contains("line 14"));
    }

    #[test]
    fn preprocess_line_accepts_a_bare_url_and_label() {
        let (ngrams, stopwords) = dictionaries();
        let record =
            preprocess_line("https://rv.example/lst/3 Other", 2, &ngrams, &stopwords)
                .expect("two fields are enough");
        assert_eq!(record.price, "?");
        assert!(record.ngrams.is_empty());
        assert!(record.tokens.is_empty());
    }

    #[test]
    fn extracted_phrases_and_tokens_stay_disjoint() {
        let (ngrams, stopwords) = dictionaries();
        let line = "https://rv.example/lst/4 Class_B holiday rambler rambler parts";
        let record = preprocess_line(line, 1, &ngrams, &stopwords).expect("well-formed line");
        assert_eq!(record.ngrams, vec!["holiday rambler"]);
        assert_eq!(record.tokens, vec!["rambler", "parts"]);
        assert!(record.contains_term("holiday rambler"));
        assert!(record.contains_term("rambler"));
        assert!(!record.contains_term("holiday"));
    }
}
