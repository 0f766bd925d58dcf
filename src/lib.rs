#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// ARFF feature-matrix serialization.
pub mod arff;
/// Command-line entry point shared by the binary and tests.
pub mod cli;
/// Pipeline configuration types.
pub mod config;
/// Centralized constants for defaults and output formats.
pub mod constants;
/// Corpus loading and per-line preprocessing orchestration.
pub mod corpus;
/// Word-list loading shared by both dictionaries.
pub mod dictionary;
/// N-gram phrase dictionary and extraction.
pub mod ngrams;
/// Whitespace and punctuation normalization.
pub mod normalize;
/// Summary-file serialization and atomic publication.
pub mod output;
/// End-to-end pipeline driver.
pub mod pipeline;
/// Price extraction from listing bodies.
pub mod price;
/// Listing records and per-line preprocessing.
pub mod record;
/// Stopword dictionary and filtering.
pub mod stopwords;
/// Shared type aliases.
pub mod types;
/// Corpus-wide vocabulary ranking.
pub mod vocab;

mod errors;

pub use config::PipelineConfig;
pub use corpus::Corpus;
pub use dictionary::DictionaryKind;
pub use errors::PipelineError;
pub use ngrams::NgramDictionary;
pub use pipeline::PipelineSummary;
pub use record::{ListingRecord, preprocess_line};
pub use stopwords::StopwordDictionary;
pub use types::{ClassLabel, ListingUrl, Phrase, PriceText, Term, Token};
pub use vocab::{TermCount, VocabularyRanking};
