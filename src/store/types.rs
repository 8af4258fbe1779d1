//! Record Store Types

use std::path::PathBuf;
use thiserror::Error;

/// One stored question/answer pair.
///
/// `question` keeps the raw text before the first colon (untrimmed), the
/// lookup trims it at comparison time. `answer` is already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub question: String,
    pub answer: String,
}

impl Record {
    /// Splits a `<question>: <answer>` line on its first colon.
    ///
    /// Returns `None` for a line without any colon.
    pub fn parse(line: &str) -> Option<Self> {
        let (question, answer) = line.split_once(':')?;
        Some(Self {
            question: question.to_string(),
            answer: answer.trim().to_string(),
        })
    }
}

/// Errors raised while loading the record file. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read record file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed record on line {line} (no ':' delimiter): {content:?}")]
    MalformedLine { line: usize, content: String },
}
