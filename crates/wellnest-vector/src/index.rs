//! Flat brute-force index.
//!
//! Stores vectors in insertion order and answers nearest-neighbor
//! queries with an exact scan over every row.

use crate::distance::DistanceMetric;
use crate::error::{Error, Result};
use tracing::trace;

/// A search hit: the row position of a stored vector and its distance
/// from the query.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    /// Zero-based insertion position of the matched vector.
    pub index: usize,
    /// Distance from the query (lower is more similar).
    pub distance: f32,
}

/// Append-only flat vector index with exact nearest-neighbor search.
///
/// Rows keep their insertion order, so row `i` can be used as a stable
/// handle to line the index up with an external, equally-ordered
/// payload store (WellNest keeps document chunks that way).
#[derive(Debug, Clone, PartialEq)]
pub struct FlatIndex {
    dimensions: usize,
    metric: DistanceMetric,
    vectors: Vec<Vec<f32>>,
}

impl FlatIndex {
    /// Create an empty index for vectors of the given dimensionality.
    ///
    /// # Errors
    ///
    /// Returns an error if `dimensions` is zero.
    pub fn new(dimensions: usize, metric: DistanceMetric) -> Result<Self> {
        if dimensions == 0 {
            return Err(Error::InvalidVector("Dimensions must be > 0".to_string()));
        }

        Ok(Self {
            dimensions,
            metric,
            vectors: Vec::new(),
        })
    }

    /// Get the vector dimensions.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Get the distance metric.
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Get the number of vectors in the index.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Check if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Get a stored vector by row position.
    pub fn get(&self, index: usize) -> Option<&[f32]> {
        self.vectors.get(index).map(|v| v.as_slice())
    }

    /// Append a vector to the index.
    ///
    /// Duplicate vectors are permitted and stored independently.
    ///
    /// # Errors
    ///
    /// Returns an error if the vector's dimensions don't match the
    /// index or the vector contains NaN/Inf components.
    pub fn append(&mut self, vector: &[f32]) -> Result<usize> {
        self.validate(vector)?;

        let row = self.vectors.len();
        self.vectors.push(vector.to_vec());
        trace!(row, "Appended vector");
        Ok(row)
    }

    /// Append multiple vectors, in order.
    ///
    /// Validation runs before any row is appended: either every vector
    /// is accepted or the index is left untouched.
    pub fn append_batch(&mut self, vectors: &[Vec<f32>]) -> Result<usize> {
        for vector in vectors {
            self.validate(vector)?;
        }

        let count = vectors.len();
        self.vectors.extend(vectors.iter().cloned());
        trace!(count, total = self.vectors.len(), "Appended batch");
        Ok(count)
    }

    /// Search for the `k` vectors nearest to `query`.
    ///
    /// Results are ordered by ascending distance; ties keep insertion
    /// order (the scan-and-sort is stable). Returns `min(k, len)`
    /// neighbors; an empty index yields an empty result, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the query dimensions don't match the index.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<Neighbor>> {
        if query.len() != self.dimensions {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions,
                actual: query.len(),
            });
        }

        let mut neighbors: Vec<Neighbor> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(index, row)| Neighbor {
                index,
                distance: self.metric.distance(query, row),
            })
            .collect();

        neighbors.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        neighbors.truncate(k);

        Ok(neighbors)
    }

    /// Iterate over the stored vectors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &[f32]> {
        self.vectors.iter().map(|v| v.as_slice())
    }

    pub(crate) fn from_parts(
        dimensions: usize,
        metric: DistanceMetric,
        vectors: Vec<Vec<f32>>,
    ) -> Result<Self> {
        let mut index = Self::new(dimensions, metric)?;
        index.append_batch(&vectors)?;
        Ok(index)
    }

    fn validate(&self, vector: &[f32]) -> Result<()> {
        if vector.len() != self.dimensions {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions,
                actual: vector.len(),
            });
        }

        if vector.iter().any(|v| v.is_nan() || v.is_infinite()) {
            return Err(Error::InvalidVector(
                "Vector contains NaN or Inf".to_string(),
            ));
        }

        Ok(())
    }
}
