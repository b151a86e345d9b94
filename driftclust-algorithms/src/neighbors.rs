//! Elliptical neighborhood queries against the cached matrices.

use crate::similarity::SimilarityMatrices;

/// Neighborhood membership test for one clustering run.
///
/// A point `j` is a neighbor of `pid` iff it lies inside an axis-aligned
/// ellipse centered on `pid`: semi-axis `eps` along the position axis and
/// `eps2 * sqrt(width_factor)` along the time axis, the time axis widening
/// for pairs of physically wide hits. A point is never its own neighbor.
#[derive(Debug, Clone, Copy)]
pub struct NeighborQuery<'a> {
    matrices: &'a SimilarityMatrices,
    eps_sq: f64,
    eps2_sq: f64,
}

impl<'a> NeighborQuery<'a> {
    /// Creates a query over precomputed matrices and the two radii.
    #[must_use]
    pub fn new(matrices: &'a SimilarityMatrices, eps: f64, eps2: f64) -> Self {
        Self {
            matrices,
            eps_sq: eps * eps,
            eps2_sq: eps2 * eps2,
        }
    }

    /// Evaluates the ellipse test for a single pair.
    #[inline]
    #[must_use]
    pub fn is_neighbor(&self, pid: usize, j: usize) -> bool {
        if pid == j {
            return false;
        }
        let time_axis_sq = self.eps2_sq * self.matrices.width_factor(pid, j);
        self.matrices.dist_a(pid, j) / self.eps_sq + self.matrices.dist_b(pid, j) / time_axis_sq
            < 1.0
    }

    /// Collects the neighbor set of `pid` into a caller-owned buffer.
    ///
    /// The buffer is cleared first; no ordering or distance ranking is
    /// implied. An empty result is a valid outcome, not an error.
    pub fn neighbors_into(&self, pid: usize, neighbors: &mut Vec<usize>) {
        neighbors.clear();
        for j in 0..self.matrices.len() {
            if self.is_neighbor(pid, j) {
                neighbors.push(j);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use driftclust_core::{Point, WidthParams};

    fn query_for(points: &[Point], eps: f64, eps2: f64) -> (SimilarityMatrices, f64, f64) {
        let matrices = SimilarityMatrices::compute(points, &WidthParams::default());
        (matrices, eps, eps2)
    }

    #[test]
    fn test_never_own_neighbor() {
        let points = vec![Point::new(0.0, 0.0, 0.0), Point::new(0.1, 0.1, 0.0)];
        let (matrices, eps, eps2) = query_for(&points, 10.0, 10.0);
        let query = NeighborQuery::new(&matrices, eps, eps2);
        let mut neighbors = Vec::new();
        for pid in 0..points.len() {
            query.neighbors_into(pid, &mut neighbors);
            assert!(!neighbors.contains(&pid));
        }
    }

    #[test]
    fn test_ellipse_membership() {
        // Neighbor of pid 0 along the position axis only if within eps.
        let points = vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(0.9, 0.0, 0.0),
            Point::new(1.1, 0.0, 0.0),
        ];
        let (matrices, eps, eps2) = query_for(&points, 1.0, 1.0);
        let query = NeighborQuery::new(&matrices, eps, eps2);
        let mut neighbors = Vec::new();
        query.neighbors_into(0, &mut neighbors);
        assert!(neighbors.contains(&1));
        assert!(!neighbors.contains(&2));
    }

    #[test]
    fn test_boundary_is_exclusive() {
        // A point exactly on the ellipse boundary is not a neighbor.
        let points = vec![Point::new(0.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0)];
        let (matrices, eps, eps2) = query_for(&points, 1.0, 1.0);
        let query = NeighborQuery::new(&matrices, eps, eps2);
        assert!(!query.is_neighbor(0, 1));
    }

    #[test]
    fn test_widening_w_never_shrinks_neighborhood() {
        // Time-axis separation slightly too large for the circular case.
        let narrow = vec![Point::new(0.0, 0.0, 0.0), Point::new(0.0, 1.1, 0.0)];
        let matrices = SimilarityMatrices::compute(&narrow, &WidthParams::default());
        let query = NeighborQuery::new(&matrices, 1.0, 1.0);
        assert!(!query.is_neighbor(0, 1));

        // Widening one hit stretches the time axis and flips the test to
        // true; it can never flip a passing pair to false.
        let wide = vec![Point::new(0.0, 0.0, 1.0), Point::new(0.0, 1.1, 0.0)];
        let matrices = SimilarityMatrices::compute(&wide, &WidthParams::default());
        let query = NeighborQuery::new(&matrices, 1.0, 1.0);
        assert!(query.is_neighbor(0, 1));
    }

    #[test]
    fn test_zero_eps_fails_every_test() {
        // Degenerate thresholds: the division blows up and every pair
        // fails, including coincident points (0/0 compares false).
        let points = vec![Point::new(0.0, 0.0, 0.0), Point::new(0.0, 0.0, 0.0)];
        let (matrices, eps, eps2) = query_for(&points, 0.0, 0.0);
        let query = NeighborQuery::new(&matrices, eps, eps2);
        let mut neighbors = Vec::new();
        query.neighbors_into(0, &mut neighbors);
        assert!(neighbors.is_empty());
    }
}
