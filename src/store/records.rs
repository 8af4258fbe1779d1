use super::types::{Record, StoreError};
use std::path::Path;

/// Ordered, immutable collection of records in file order.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Reads and parses the record file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::parse(&text)?;
        tracing::info!("Loaded {} records from {}", store.len(), path.display());
        Ok(store)
    }

    /// Parses record text, one record per line.
    ///
    /// Any line without a colon aborts parsing, blank lines included. A
    /// trailing newline does not produce an extra line.
    pub fn parse(text: &str) -> Result<Self, StoreError> {
        let records = text
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                Record::parse(line).ok_or_else(|| StoreError::MalformedLine {
                    line: idx + 1,
                    content: line.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { records })
    }

    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
