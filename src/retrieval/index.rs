use super::error::IndexError;
use super::vectors::PassageVectors;

/// A search hit: the record position and its inner-product score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub id: usize,
    pub score: f32,
}

/// Flat (exhaustive) inner-product index.
///
/// Vectors are stored contiguously and ids are assigned in insertion order,
/// so id `i` is the `i`-th vector ever added.
#[derive(Debug, Clone)]
pub struct FlatIpIndex {
    dim: usize,
    data: Vec<f32>,
}

impl FlatIpIndex {
    pub fn new(dim: usize) -> Result<Self, IndexError> {
        if dim == 0 {
            return Err(IndexError::ZeroDimension);
        }
        Ok(Self {
            dim,
            data: Vec::new(),
        })
    }

    /// Builds an index holding every passage vector, ids matching record positions.
    pub fn from_vectors(vectors: &PassageVectors) -> Result<Self, IndexError> {
        let mut index = Self::new(vectors.dim())?;
        index.add(vectors.as_slice())?;
        Ok(index)
    }

    /// Appends one or more vectors packed back to back.
    pub fn add(&mut self, vectors: &[f32]) -> Result<(), IndexError> {
        if vectors.len() % self.dim != 0 {
            return Err(IndexError::NotMultiple {
                dim: self.dim,
                len: vectors.len(),
            });
        }
        self.data.extend_from_slice(vectors);
        Ok(())
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn len(&self) -> usize {
        self.data.len() / self.dim
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns up to `k` vectors with the highest inner product against `query`.
    ///
    /// Ordered by descending score; equal scores keep the lower id first.
    /// NaN scores rank after every real score.
    pub fn nearest_neighbors(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>, IndexError> {
        if query.len() != self.dim {
            return Err(IndexError::DimensionMismatch {
                expected: self.dim,
                actual: query.len(),
            });
        }

        let mut hits: Vec<Neighbor> = self
            .data
            .chunks_exact(self.dim)
            .enumerate()
            .map(|(id, vector)| Neighbor {
                id,
                score: inner_product(vector, query),
            })
            .collect();

        hits.sort_by(|a, b| {
            a.score
                .is_nan()
                .cmp(&b.score.is_nan())
                .then(b.score.total_cmp(&a.score))
                .then(a.id.cmp(&b.id))
        });
        hits.truncate(k);
        Ok(hits)
    }
}

#[inline]
fn inner_product(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
