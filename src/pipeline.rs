use tracing::{debug, info};

use crate::arff::write_arff;
use crate::config::PipelineConfig;
use crate::corpus::Corpus;
use crate::errors::PipelineError;
use crate::ngrams::NgramDictionary;
use crate::output::write_summary;
use crate::stopwords::StopwordDictionary;
use crate::vocab::VocabularyRanking;

/// Counters describing one completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineSummary {
    /// Listings preprocessed into records.
    pub records: usize,
    /// Distinct terms across the whole corpus.
    pub distinct_terms: usize,
    /// Term lines written to the summary file (after clamping).
    pub vocabulary_written: usize,
    /// Term attributes written to the ARFF file, when one was requested.
    pub arff_terms: Option<usize>,
}

/// Run the full pipeline described by `config`.
///
/// Stages run strictly in sequence: load both dictionaries, preprocess the
/// corpus, rank the vocabulary, write the summary, then the optional ARFF
/// matrix. Any failure aborts before an output is renamed into place.
pub fn run(config: &PipelineConfig) -> Result<PipelineSummary, PipelineError> {
    config.validate()?;

    let ngrams = NgramDictionary::load(&config.ngrams)?;
    let stopwords = StopwordDictionary::load(&config.stopwords)?;
    debug!(
        ngrams = ngrams.len(),
        stopwords = stopwords.len(),
        "loaded dictionaries"
    );

    info!(input = %config.input.display(), "preprocessing listings");
    let corpus = Corpus::from_listings(&config.input, &ngrams, &stopwords)?;

    let ranking = VocabularyRanking::rank(&corpus.terms);
    debug!(distinct = ranking.len(), "ranked corpus vocabulary");

    let vocabulary_written =
        write_summary(&config.output, &ranking, &corpus.records, config.vocab_limit)?;

    let arff_terms = match &config.arff {
        Some(path) => Some(write_arff(path, &ranking, &corpus.records, config.vocab_limit)?),
        None => None,
    };

    Ok(PipelineSummary {
        records: corpus.len(),
        distinct_terms: ranking.len(),
        vocabulary_written,
        arff_terms,
    })
}
