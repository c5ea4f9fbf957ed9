//! Persistence layer for wellnest-vector.
//!
//! A `FlatIndex` serializes to a single binary artifact (bincode):
//! dimensions, distance metric, and the rows in insertion order.
//! Callers that keep an index-aligned payload store are responsible
//! for saving and loading its artifact together with this one.

use crate::distance::DistanceMetric;
use crate::error::{Error, Result};
use crate::index::FlatIndex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// On-disk snapshot of a flat index.
#[derive(Debug, Serialize, Deserialize)]
struct IndexSnapshot {
    dimensions: usize,
    metric: DistanceMetric,
    vectors: Vec<Vec<f32>>,
}

/// Save an index to `path` as a bincode snapshot.
///
/// The parent directory must already exist.
pub async fn save_index(path: &Path, index: &FlatIndex) -> Result<()> {
    let snapshot = IndexSnapshot {
        dimensions: index.dimensions(),
        metric: index.metric(),
        vectors: index.iter().map(|v| v.to_vec()).collect(),
    };

    let data = bincode::serialize(&snapshot)
        .map_err(|e| Error::Persistence(format!("Failed to serialize index: {}", e)))?;

    tokio::fs::write(path, &data).await?;

    info!(path = %path.display(), count = index.len(), "Saved index snapshot");
    Ok(())
}

/// Load an index from a bincode snapshot at `path`.
///
/// # Errors
///
/// Returns an I/O error if the file is missing and a persistence error
/// if the artifact is malformed. Callers that treat a missing snapshot
/// as "start empty" should check for the file first.
pub async fn load_index(path: &Path) -> Result<FlatIndex> {
    let data = tokio::fs::read(path).await?;

    let snapshot: IndexSnapshot = bincode::deserialize(&data)
        .map_err(|e| Error::Persistence(format!("Failed to parse index snapshot: {}", e)))?;

    let index = FlatIndex::from_parts(snapshot.dimensions, snapshot.metric, snapshot.vectors)?;

    debug!(path = %path.display(), count = index.len(), "Loaded index snapshot");
    Ok(index)
}
