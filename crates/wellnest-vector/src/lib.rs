//! # wellnest-vector
//!
//! A pure-Rust embedded vector index with exact (brute-force) nearest
//! neighbor search, used as the retrieval backbone of the WellNest server.
//!
//! ## Features
//!
//! - **Pure Rust**: No native dependencies, compiles anywhere Rust does
//! - **Exact search**: Flat scan over all stored vectors, no recall loss
//! - **Append-only**: Rows are never updated or deleted; rebuilding the
//!   index from source documents is the supported update mechanism
//! - **Persistence**: Single-file bincode snapshots
//! - **Multiple distance metrics**: Euclidean (L2), Cosine, Dot Product
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wellnest_vector::{DistanceMetric, FlatIndex};
//!
//! let mut index = FlatIndex::new(384, DistanceMetric::Euclidean)?;
//!
//! index.append(&embedding)?;
//!
//! // Nearest rows first, at most 10 results
//! let neighbors = index.search(&query, 10)?;
//! ```
//!
//! ## Design
//!
//! A flat scan is `O(n * d)` per query, which is the right trade for a
//! corpus of hundreds to low thousands of vectors: exact results, no
//! build-time tuning, and a trivially serializable structure. A larger
//! corpus would swap in an approximate index behind the same `search`
//! contract without changing callers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod distance;
pub mod error;
pub mod index;
pub mod persistence;

pub use distance::DistanceMetric;
pub use error::{Error, Result};
pub use index::{FlatIndex, Neighbor};
pub use persistence::{load_index, save_index};
