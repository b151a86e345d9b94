//! Cached pairwise similarity matrices.
//!
//! The neighbor predicate needs three pairwise quantities: squared
//! position-axis distance, squared time-axis distance, and the per-pair
//! width factor. All three are computed once per batch and cached as flat
//! row-major squares; the clustering pass then only reads them.

use driftclust_core::{Point, WidthParams};
use rayon::prelude::*;

/// Three symmetric pairwise matrices over one batch of feature points.
///
/// Each matrix is a flat row-major `n * n` square indexed by `(pid, pid)`.
/// The diagonal is filled but never read: a point is never tested against
/// itself. The matrices are read-only once computed and safe to share for
/// parallel reads.
#[derive(Debug, Clone, Default)]
pub struct SimilarityMatrices {
    n: usize,
    dist_a: Vec<f64>,
    dist_b: Vec<f64>,
    width_factor: Vec<f64>,
}

impl SimilarityMatrices {
    /// Computes all three matrices for a batch of points.
    ///
    /// The entry formulas are symmetric in IEEE arithmetic, so whole rows
    /// are computed in parallel instead of mirroring an upper triangle;
    /// `m[i][j]` and `m[j][i]` come out bit-identical either way.
    #[must_use]
    pub fn compute(points: &[Point], width: &WidthParams) -> Self {
        let n = points.len();
        let mut dist_a = vec![0.0; n * n];
        let mut dist_b = vec![0.0; n * n];
        let mut width_factor = vec![0.0; n * n];

        dist_a
            .par_chunks_mut(n.max(1))
            .zip(dist_b.par_chunks_mut(n.max(1)))
            .zip(width_factor.par_chunks_mut(n.max(1)))
            .enumerate()
            .for_each(|(i, ((row_a, row_b), row_w))| {
                let p = points[i];
                for (j, q) in points.iter().enumerate() {
                    let da = p.a - q.a;
                    let db = p.b - q.b;
                    row_a[j] = da * da;
                    row_b[j] = db * db;
                    row_w[j] = width.factor(p.w, q.w);
                }
            });

        Self {
            n,
            dist_a,
            dist_b,
            width_factor,
        }
    }

    /// Number of points the matrices were computed over.
    #[must_use]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Returns true if the matrices cover zero points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Squared position-axis distance between two points.
    #[inline]
    #[must_use]
    pub fn dist_a(&self, i: usize, j: usize) -> f64 {
        self.dist_a[i * self.n + j]
    }

    /// Squared time-axis distance between two points.
    #[inline]
    #[must_use]
    pub fn dist_b(&self, i: usize, j: usize) -> f64 {
        self.dist_b[i * self.n + j]
    }

    /// Width factor for a pair of points.
    #[inline]
    #[must_use]
    pub fn width_factor(&self, i: usize, j: usize) -> f64 {
        self.width_factor[i * self.n + j]
    }
}
