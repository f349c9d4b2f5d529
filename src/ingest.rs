//! Builds a [`LetterIndex`] from text.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::index::LetterIndex;
use crate::tokenize::tokenize;

/// Reads `reader` line by line and indexes every word in it. `source` names the input in errors
/// and logs.
///
/// If any line can't be read (including when it isn't valid UTF-8) the whole ingestion fails
/// with [`Error::SourceUnavailable`] and no index is returned.
pub fn from_reader(reader: impl BufRead, source: &str) -> Result<LetterIndex> {
    let mut index = LetterIndex::new();
    let mut lines = 0;
    for line in reader.lines() {
        let line = line.map_err(|error| Error::SourceUnavailable {
            source: source.to_string(),
            error,
        })?;
        index.extend(tokenize(&line));
        lines += 1;
    }

    debug!(source, lines, "read source");
    info!(
        source,
        distinct = index.distinct_words(),
        total = index.total_words(),
        "built letter index"
    );
    Ok(index)
}

/// Opens the file at `path` and indexes it with [`from_reader`].
pub fn from_path(path: impl AsRef<Path>) -> Result<LetterIndex> {
    let path = path.as_ref();
    let source = path.display().to_string();
    let file = File::open(path).map_err(|error| Error::SourceUnavailable {
        source: source.clone(),
        error,
    })?;

    from_reader(BufReader::new(file), &source)
}
