//! CSV dataset reader producing typed posts in file order

use super::normalizer::{LoadError, Post, RawPost};
use csv::StringRecord;
use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

pub struct PostReader {
    path: PathBuf,
}

impl PostReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read every row of the dataset.
    ///
    /// Fails on the first unreadable record or malformed numeric field;
    /// rows are never skipped.
    pub fn load(&self) -> Result<Vec<Post>, LoadError> {
        let file = File::open(&self.path)?;
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(file);

        let all_headers = reader.headers()?.clone();
        log::debug!("📖 Columns in {}: {:?}", self.path.display(), all_headers);

        let columns = last_occurrence_columns(&all_headers);
        let headers = project(&all_headers, &columns);

        let mut posts = Vec::new();
        for result in reader.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let record = project(&record, &columns);
            let raw: RawPost = record.deserialize(Some(&headers))?;
            posts.push(Post::from_raw(&raw, line)?);
        }

        Ok(posts)
    }
}

/// Column indices to read, one per distinct header name.
///
/// A repeated header name resolves to its last column.
fn last_occurrence_columns(headers: &StringRecord) -> Vec<usize> {
    let mut last: HashMap<&str, usize> = HashMap::new();
    for (idx, name) in headers.iter().enumerate() {
        last.insert(name, idx);
    }
    let mut columns: Vec<usize> = last.into_values().collect();
    columns.sort_unstable();
    columns
}

/// Pick `columns` out of `record`; fields missing from a short row read as blank.
fn project(record: &StringRecord, columns: &[usize]) -> StringRecord {
    columns
        .iter()
        .map(|&idx| record.get(idx).unwrap_or(""))
        .collect()
}

/// Convenience wrapper over [`PostReader::load`]
pub fn load_posts(path: impl AsRef<Path>) -> Result<Vec<Post>, LoadError> {
    PostReader::new(path.as_ref()).load()
}
