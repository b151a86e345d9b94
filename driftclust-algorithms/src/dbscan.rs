//! Density-based clustering state machine.
//!
//! Classic DBSCAN over the feature points, with the elliptical neighbor
//! test of [`NeighborQuery`]. Border-point semantics follow the reference
//! behavior exactly: a point that fails the density test on first visit is
//! marked noise (advisory only) and may still be claimed later as a border
//! member of whichever cluster's expansion reaches it first.

use crate::neighbors::NeighborQuery;
use crate::similarity::SimilarityMatrices;
use driftclust_core::{ClusterConfig, Point};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of one clustering run.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClusterRun {
    /// Per-point cluster assignment; ids are contiguous starting at 1 in
    /// discovery order, 0 means never claimed by any cluster.
    pub cluster_id: Vec<u32>,
    /// Member `pid` lists per cluster, in discovery order; `clusters[k]`
    /// holds the members of cluster id `k + 1`.
    pub clusters: Vec<Vec<usize>>,
    /// Advisory noise flags: set when a point failed the density test at
    /// the moment it was first visited. Not cleared on later border
    /// assignment; authoritative membership is `cluster_id`.
    pub noise: Vec<bool>,
}

impl ClusterRun {
    /// Number of clusters found.
    #[must_use]
    pub fn num_clusters(&self) -> usize {
        self.clusters.len()
    }

    /// Member counts per cluster, in discovery order.
    #[must_use]
    pub fn sizes(&self) -> Vec<usize> {
        self.clusters.iter().map(Vec::len).collect()
    }

    /// Returns true if the run covered zero points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cluster_id.is_empty()
    }

    /// Fraction of points never claimed by any cluster.
    ///
    /// This is the informational post-run statistic: it counts
    /// `cluster_id == 0`, not the transient advisory flag. Zero points
    /// yield 0.0.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn noise_fraction(&self) -> f64 {
        if self.cluster_id.is_empty() {
            return 0.0;
        }
        let unclaimed = self.cluster_id.iter().filter(|&&id| id == 0).count();
        unclaimed as f64 / self.cluster_id.len() as f64
    }
}

/// Reusable per-run scratch state.
///
/// Buffers survive across runs so batch pipelines can amortize the
/// allocations, but every run starts by clearing and resizing all of them;
/// nothing observable persists from a prior batch.
#[derive(Debug, Default)]
pub struct ScanState {
    visited: Vec<bool>,
    noise: Vec<bool>,
    cluster_id: Vec<u32>,
    seeds: Vec<usize>,
    neighbors: Vec<usize>,
}

impl ScanState {
    fn reset(&mut self, n: usize) {
        self.visited.clear();
        self.visited.resize(n, false);
        self.noise.clear();
        self.noise.resize(n, false);
        self.cluster_id.clear();
        self.cluster_id.resize(n, 0);
        self.seeds.clear();
        self.neighbors.clear();
    }
}

/// Density-based clustering with an elliptical neighborhood.
pub struct DbscanClustering {
    config: ClusterConfig,
}

impl DbscanClustering {
    /// Creates an engine with the given configuration.
    ///
    /// The configuration is taken as-is; see
    /// [`ClusterConfig::validate`](driftclust_core::ClusterConfig::validate)
    /// for the degenerate thresholds callers should reject beforehand.
    #[must_use]
    pub fn new(config: ClusterConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    /// Creates a fresh scratch state for this engine.
    #[must_use]
    pub fn create_state(&self) -> ScanState {
        ScanState::default()
    }

    /// Clusters a batch of feature points.
    ///
    /// Computes the similarity matrices for the batch, then runs the scan.
    #[must_use]
    pub fn cluster(&self, points: &[Point], state: &mut ScanState) -> ClusterRun {
        let matrices = SimilarityMatrices::compute(points, &self.config.width);
        self.cluster_with_matrices(&matrices, state)
    }

    /// Clusters against caller-computed matrices.
    ///
    /// The matrices must have been computed over the current point batch
    /// with the same width calibration as this engine's configuration.
    #[must_use]
    pub fn cluster_with_matrices(
        &self,
        matrices: &SimilarityMatrices,
        state: &mut ScanState,
    ) -> ClusterRun {
        let n = matrices.len();
        state.reset(n);
        if n == 0 {
            return ClusterRun::default();
        }
        let mut clusters: Vec<Vec<usize>> = Vec::new();

        let query = NeighborQuery::new(matrices, self.config.eps, self.config.eps2);
        let min_pts = self.config.min_pts;

        for pid in 0..n {
            if state.visited[pid] {
                continue;
            }
            state.visited[pid] = true;

            query.neighbors_into(pid, &mut state.neighbors);
            if state.neighbors.len() < min_pts {
                // Advisory only; a later expansion may still claim this
                // point as a border member.
                state.noise[pid] = true;
                continue;
            }

            // pid seeds a new cluster; ids are 1-based in discovery order.
            #[allow(clippy::cast_possible_truncation)]
            let cid = clusters.len() as u32 + 1;
            state.cluster_id[pid] = cid;
            let mut members = vec![pid];

            state.seeds.clear();
            state.seeds.extend_from_slice(&state.neighbors);

            // The worklist grows while being iterated: neighbor sets of
            // newly visited core points are appended to the end, duplicates
            // included, and reprocessed in the same pass.
            let mut cursor = 0;
            while cursor < state.seeds.len() {
                let npid = state.seeds[cursor];
                cursor += 1;

                if !state.visited[npid] {
                    state.visited[npid] = true;
                    query.neighbors_into(npid, &mut state.neighbors);
                    if state.neighbors.len() >= min_pts {
                        state.seeds.extend_from_slice(&state.neighbors);
                    }
                }

                // Sole assignment gate: the first cluster to reach a point
                // keeps it, whether or not it was marked noise above.
                if state.cluster_id[npid] == 0 {
                    state.cluster_id[npid] = cid;
                    members.push(npid);
                }
            }

            clusters.push(members);
        }

        log::debug!(
            "clustered {} points into {} clusters",
            n,
            clusters.len()
        );

        ClusterRun {
            cluster_id: state.cluster_id.clone(),
            clusters,
            noise: state.noise.clone(),
        }
    }
}
