//! driftclust-algorithms: density-based clustering of detector hits.
//!
//! The engine runs in three stages over one batch of hits:
//! feature mapping (in `driftclust-core`) → pairwise similarity matrices →
//! DBSCAN scan with an elliptical, width-stretched neighborhood.
//!
#![warn(missing_docs)]

mod dbscan;
mod neighbors;
mod processing;
mod similarity;

pub use dbscan::{ClusterRun, DbscanClustering, ScanState};
pub use neighbors::NeighborQuery;
pub use processing::{cluster_hits, cluster_points};
pub use similarity::SimilarityMatrices;

// Re-export the core configuration types alongside the engine.
pub use driftclust_core::{ClusterConfig, WidthParams};
