//! Error types for passage vector loading and similarity search.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from reading the passage vector file. Fatal at startup.
#[derive(Debug, Error)]
pub enum VectorError {
    #[error("failed to read vector file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("not an NPY file (bad magic string)")]
    BadMagic,
    #[error("unsupported NPY format version {major}.{minor}")]
    UnsupportedVersion { major: u8, minor: u8 },
    #[error("invalid NPY header: {0}")]
    InvalidHeader(String),
    #[error("unsupported dtype {0:?}, expected '<f4' or '<f8'")]
    UnsupportedDtype(String),
    #[error("Fortran-ordered arrays are not supported")]
    FortranOrder,
    #[error("truncated array data: expected {expected} bytes, found {actual}")]
    Truncated { expected: usize, actual: usize },
    #[error("cannot reshape {values} values into {rows} rows")]
    RowMismatch { values: usize, rows: usize },
    #[error("vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("header pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

/// Errors from the flat inner-product index.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IndexError {
    #[error("index dimension must be non-zero")]
    ZeroDimension,
    #[error("{len} values is not a whole number of {dim}-dimensional vectors")]
    NotMultiple { dim: usize, len: usize },
    #[error("query dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
