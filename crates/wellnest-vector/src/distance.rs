//! Distance metrics for vector similarity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Distance metric for vector similarity calculations.
///
/// The WellNest retrieval path uses Euclidean distance, matching the
/// behavior of a flat L2 index; the other metrics are available for
/// callers that store normalized or pre-scaled embeddings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DistanceMetric {
    /// Euclidean (L2) distance.
    ///
    /// Straight-line distance between vectors. Range: [0, inf),
    /// where 0 means identical vectors.
    #[default]
    Euclidean,

    /// Cosine distance (1 - cosine similarity).
    ///
    /// Measures the angle between vectors, ignoring magnitude.
    Cosine,

    /// Negated dot product.
    ///
    /// For pre-normalized vectors; higher dot product sorts first.
    DotProduct,
}

impl DistanceMetric {
    /// Compute the distance between two vectors.
    ///
    /// Returns a value where **lower means more similar** for every
    /// metric, so results can be sorted ascending uniformly.
    #[inline]
    pub fn distance(&self, a: &[f32], b: &[f32]) -> f32 {
        debug_assert_eq!(a.len(), b.len(), "Vector dimensions must match");

        match self {
            DistanceMetric::Euclidean => euclidean_distance(a, b),
            DistanceMetric::Cosine => 1.0 - cosine_similarity(a, b),
            DistanceMetric::DotProduct => -dot_product(a, b),
        }
    }

    /// Get the name of this distance metric.
    pub fn name(&self) -> &'static str {
        match self {
            DistanceMetric::Euclidean => "euclidean",
            DistanceMetric::Cosine => "cosine",
            DistanceMetric::DotProduct => "dot_product",
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistanceMetric {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "euclidean" => Ok(DistanceMetric::Euclidean),
            "cosine" => Ok(DistanceMetric::Cosine),
            "dot_product" => Ok(DistanceMetric::DotProduct),
            other => Err(format!("Unknown distance metric: '{}'", other)),
        }
    }
}

/// Euclidean (L2) distance between two vectors.
#[inline]
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum::<f32>()
        .sqrt()
}

/// Dot product of two vectors.
#[inline]
pub fn dot_product(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Cosine similarity of two vectors.
///
/// Returns 0.0 when either vector has zero magnitude.
#[inline]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot = dot_product(a, b);
    let norm_a = dot_product(a, a).sqrt();
    let norm_b = dot_product(b, b).sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
