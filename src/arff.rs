use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::constants::arff::{
    CLASS_ATTRIBUTE, CLASS_LABELS, PRICE_ATTRIBUTE, RELATION, TERM_ABSENT, TERM_PRESENT,
};
use crate::errors::PipelineError;
use crate::output::write_atomic;
use crate::record::ListingRecord;
use crate::vocab::VocabularyRanking;

/// Write the ARFF feature matrix: a REAL price attribute, one binary
/// presence attribute per selected term, and the nominal class attribute.
///
/// `limit` is clamped to the vocabulary size, so the header never declares a
/// term column the rows do not carry. Presence is exact string equality
/// against the record's phrases and tokens. The price cell passes through
/// unchanged; `?` doubles as ARFF's missing-value marker. Returns the number
/// of term attributes written.
pub fn write_arff(
    path: impl AsRef<Path>,
    ranking: &VocabularyRanking,
    records: &[ListingRecord],
    limit: usize,
) -> Result<usize, PipelineError> {
    let path = path.as_ref();
    let terms: Vec<&str> = ranking
        .top(limit)
        .iter()
        .map(|entry| entry.term.as_str())
        .collect();

    let mut body = String::new();
    body.push_str(&format!("@RELATION {RELATION}\n\n"));
    body.push_str(&format!("@ATTRIBUTE {PRICE_ATTRIBUTE} REAL\n"));
    for term in &terms {
        body.push_str(&format!(
            "@ATTRIBUTE {term} {{ {TERM_ABSENT}, {TERM_PRESENT} }}\n"
        ));
    }
    body.push_str(&format!(
        "@ATTRIBUTE {CLASS_ATTRIBUTE} {{ {} }}\n",
        CLASS_LABELS.join(", ")
    ));
    body.push_str("\n@DATA\n");

    for record in records {
        let present: HashSet<&str> = record
            .ngrams
            .iter()
            .chain(record.tokens.iter())
            .map(String::as_str)
            .collect();
        body.push_str(&record.price);
        for term in &terms {
            body.push(',');
            body.push_str(if present.contains(term) {
                TERM_PRESENT
            } else {
                TERM_ABSENT
            });
        }
        body.push(',');
        body.push_str(&record.classification);
        body.push('\n');
    }

    write_atomic(path, &body)?;
    info!(
        path = %path.display(),
        attributes = terms.len() + 2,
        rows = records.len(),
        "wrote feature matrix"
    );
    Ok(terms.len())
}
