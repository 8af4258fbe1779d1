use super::error::VectorError;
use super::npy::{load_npy, NpyMatrix};
use std::path::Path;

/// Passage vectors laid out as `rows × dim`, row `i` belonging to record `i`.
#[derive(Debug, Clone)]
pub struct PassageVectors {
    rows: usize,
    dim: usize,
    data: Vec<f32>,
}

impl PassageVectors {
    /// Loads an NPY file and reshapes it to one row per record.
    pub fn load(
        path: impl AsRef<Path>,
        rows: usize,
        expected_dim: usize,
    ) -> Result<Self, VectorError> {
        let matrix = load_npy(path)?;
        Self::from_matrix(matrix, rows, expected_dim)
    }

    /// Reshapes a flat array to `rows` rows, inferring the row width.
    ///
    /// The original array shape is ignored; only the total value count has
    /// to divide evenly into `rows`, and the resulting width must equal
    /// `expected_dim`.
    pub fn from_matrix(
        matrix: NpyMatrix,
        rows: usize,
        expected_dim: usize,
    ) -> Result<Self, VectorError> {
        let values = matrix.data.len();
        if rows == 0 || values % rows != 0 {
            return Err(VectorError::RowMismatch { values, rows });
        }

        let dim = values / rows;
        if dim != expected_dim {
            return Err(VectorError::DimensionMismatch {
                expected: expected_dim,
                actual: dim,
            });
        }

        Ok(Self {
            rows,
            dim,
            data: matrix.data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn row(&self, i: usize) -> Option<&[f32]> {
        if i >= self.rows {
            return None;
        }
        Some(&self.data[i * self.dim..(i + 1) * self.dim])
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}
