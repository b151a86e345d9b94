//! High-level helpers that wire the clustering stages together.

use crate::dbscan::{ClusterRun, DbscanClustering, ScanState};
use crate::similarity::SimilarityMatrices;
use driftclust_core::{map_hits, ClusterConfig, GeometryScale, Hit, Point, Result};

/// Clusters one batch of raw hits end to end.
///
/// Validates the configuration and geometry, maps the hits into feature
/// points, computes the similarity matrices, and runs the scan. This is
/// the entry point collaborators call per batch; the per-stage types stay
/// available for pipelines that amortize state across batches.
pub fn cluster_hits<H: Hit>(
    hits: &[H],
    scale: &GeometryScale,
    config: &ClusterConfig,
) -> Result<ClusterRun> {
    scale.validate()?;
    let points = map_hits(hits, scale);
    cluster_points(&points, config)
}

/// Clusters pre-mapped feature points.
pub fn cluster_points(points: &[Point], config: &ClusterConfig) -> Result<ClusterRun> {
    config.validate()?;
    let matrices = SimilarityMatrices::compute(points, &config.width);
    let algo = DbscanClustering::new(config.clone());
    let mut state = ScanState::default();
    let run = algo.cluster_with_matrices(&matrices, &mut state);
    log::debug!(
        "batch of {} hits: {} clusters, noise fraction {:.3}",
        points.len(),
        run.num_clusters(),
        run.noise_fraction()
    );
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftclust_core::WireHit;

    #[test]
    fn test_cluster_hits_end_to_end() {
        let scale = GeometryScale::new(0.4, 0.08);
        // Two adjacent wires firing in the same time window, plus one far
        // away on the position axis.
        let hits = vec![
            WireHit::new(100, 50.0, 54.0),
            WireHit::new(101, 50.5, 54.5),
            WireHit::new(300, 50.0, 54.0),
        ];
        let config = ClusterConfig::new().with_eps(1.0).with_eps2(1.0).with_min_pts(1);
        let run = cluster_hits(&hits, &scale, &config).unwrap();
        assert_eq!(run.num_clusters(), 1);
        assert_eq!(run.cluster_id[0], 1);
        assert_eq!(run.cluster_id[1], 1);
        assert_eq!(run.cluster_id[2], 0);
    }

    #[test]
    fn test_cluster_hits_rejects_bad_config() {
        let scale = GeometryScale::new(0.4, 0.08);
        let hits = vec![WireHit::new(0, 0.0, 1.0)];
        let config = ClusterConfig::new().with_eps(0.0);
        assert!(cluster_hits(&hits, &scale, &config).is_err());
    }

    #[test]
    fn test_cluster_hits_rejects_bad_scale() {
        let scale = GeometryScale::new(-1.0, 0.08);
        let hits = vec![WireHit::new(0, 0.0, 1.0)];
        assert!(cluster_hits(&hits, &scale, &ClusterConfig::default()).is_err());
    }

    #[test]
    fn test_empty_batch_is_valid() {
        let scale = GeometryScale::new(0.4, 0.08);
        let run = cluster_hits::<WireHit>(&[], &scale, &ClusterConfig::default()).unwrap();
        assert!(run.is_empty());
    }
}
