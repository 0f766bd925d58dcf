use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::info;

use crate::constants::summary::{FIELD_SEPARATOR, SECTION_DELIMITER, WORDCOUNT_KEY};
use crate::errors::PipelineError;
use crate::record::ListingRecord;
use crate::vocab::VocabularyRanking;

/// Write the run summary: ranked vocabulary header plus serialized records.
///
/// `limit` is clamped to the vocabulary size; the returned value is the
/// number of term lines actually written, which always matches the
/// `wordcount=` header. The file is staged in the destination directory and
/// renamed into place, so a failed run leaves no partial summary behind.
pub fn write_summary(
    path: impl AsRef<Path>,
    ranking: &VocabularyRanking,
    records: &[ListingRecord],
    limit: usize,
) -> Result<usize, PipelineError> {
    let path = path.as_ref();
    let selected = ranking.top(limit);

    let mut body = String::new();
    body.push_str(SECTION_DELIMITER);
    body.push('\n');
    body.push_str(&format!("{WORDCOUNT_KEY}={}\n", selected.len()));
    body.push_str(SECTION_DELIMITER);
    body.push('\n');
    for entry in selected {
        body.push_str(&entry.term);
        body.push('\n');
    }
    body.push_str(SECTION_DELIMITER);
    body.push('\n');
    for record in records {
        body.push_str(&serialize_record(record));
        body.push('\n');
    }

    write_atomic(path, &body)?;
    info!(
        path = %path.display(),
        terms = selected.len(),
        records = records.len(),
        "wrote summary"
    );
    Ok(selected.len())
}

/// Serialize a record for the summary body: URL, class, price, phrases, then
/// tokens, all joined by `", "`.
pub fn serialize_record(record: &ListingRecord) -> String {
    let mut fields: Vec<&str> = Vec::with_capacity(3 + record.ngrams.len() + record.tokens.len());
    fields.push(&record.url);
    fields.push(&record.classification);
    fields.push(&record.price);
    fields.extend(record.ngrams.iter().map(String::as_str));
    fields.extend(record.tokens.iter().map(String::as_str));
    fields.join(FIELD_SEPARATOR)
}

/// Stage `contents` as a temp file in the destination directory, then rename
/// it over `path`. Replaces any existing file at `path`.
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<(), PipelineError> {
    let staging_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged =
        NamedTempFile::new_in(staging_dir).map_err(|source| write_error(path, source))?;
    staged
        .write_all(contents.as_bytes())
        .map_err(|source| write_error(path, source))?;
    staged
        .persist(path)
        .map_err(|err| write_error(path, err.error))?;
    Ok(())
}

fn write_error(path: &Path, source: io::Error) -> PipelineError {
    PipelineError::OutputWrite {
        path: path.to_path_buf(),
        source,
    }
}
