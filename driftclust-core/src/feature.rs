//! Feature mapping from raw hits into a common physical scale.
//!
//! Clustering operates on 3-component feature vectors rather than raw
//! channel/tick readout values: the position axis and the time axis are
//! brought into the same distance units so the two epsilon radii are
//! directly comparable lengths.

use crate::error::{Error, Result};
use crate::hit::Hit;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 3-component feature vector derived from one hit.
///
/// The point's index in the mapped sequence is its permanent identity
/// (`pid`) for the duration of one clustering run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// Position coordinate: channel index scaled to physical distance.
    pub a: f64,
    /// Time-center coordinate, in the same distance units.
    pub b: f64,
    /// Time width, in the same distance units.
    pub w: f64,
}

impl Point {
    /// Creates a new feature point.
    #[inline]
    pub fn new(a: f64, b: f64, w: f64) -> Self {
        Self { a, b, w }
    }
}

/// Detector-geometry scale constants for the feature mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeometryScale {
    /// Physical distance between adjacent position channels.
    pub channel_pitch: f64,
    /// Time-to-distance conversion constant.
    pub time_scale: f64,
}

impl GeometryScale {
    /// Creates a new geometry scale.
    #[inline]
    pub fn new(channel_pitch: f64, time_scale: f64) -> Self {
        Self {
            channel_pitch,
            time_scale,
        }
    }

    /// Checks that both scale constants are strictly positive.
    pub fn validate(&self) -> Result<()> {
        if !self.channel_pitch.is_finite() || self.channel_pitch <= 0.0 {
            return Err(Error::InvalidScale {
                name: "channel_pitch",
                value: self.channel_pitch,
            });
        }
        if !self.time_scale.is_finite() || self.time_scale <= 0.0 {
            return Err(Error::InvalidScale {
                name: "time_scale",
                value: self.time_scale,
            });
        }
        Ok(())
    }

    /// Maps a single hit to its feature point.
    #[inline]
    pub fn map_hit<H: Hit>(&self, hit: &H) -> Point {
        Point {
            a: f64::from(hit.channel()) * self.channel_pitch,
            b: (hit.start_time() + hit.end_time()) / 2.0 * self.time_scale,
            w: (hit.end_time() - hit.start_time()) * self.time_scale,
        }
    }
}

/// Maps an ordered sequence of hits to feature points.
///
/// Output order matches input order; the index of each point is its `pid`.
/// Empty input yields an empty sequence, which every downstream stage
/// treats as a no-op.
pub fn map_hits<H: Hit>(hits: &[H], scale: &GeometryScale) -> Vec<Point> {
    let mut points = Vec::with_capacity(hits.len());
    map_hits_into(hits, scale, &mut points);
    points
}

/// Maps hits into a caller-owned buffer, replacing its contents.
///
/// The clear-and-refill is the single reset point for a new run: any point
/// sequence from a previous batch is fully discarded.
pub fn map_hits_into<H: Hit>(hits: &[H], scale: &GeometryScale, points: &mut Vec<Point>) {
    points.clear();
    points.extend(hits.iter().map(|hit| scale.map_hit(hit)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hit::WireHit;
    use approx::assert_relative_eq;

    #[test]
    fn test_map_hit_scales() {
        let scale = GeometryScale::new(0.5, 0.1);
        let hit = WireHit::new(10, 100.0, 104.0);
        let p = scale.map_hit(&hit);
        assert_relative_eq!(p.a, 5.0);
        assert_relative_eq!(p.b, 10.2);
        assert_relative_eq!(p.w, 0.4);
    }

    #[test]
    fn test_map_hits_preserves_order() {
        let scale = GeometryScale::new(1.0, 1.0);
        let hits = vec![
            WireHit::new(3, 0.0, 2.0),
            WireHit::new(1, 5.0, 6.0),
            WireHit::new(2, 9.0, 9.0),
        ];
        let points = map_hits(&hits, &scale);
        assert_eq!(points.len(), 3);
        assert_relative_eq!(points[0].a, 3.0);
        assert_relative_eq!(points[1].a, 1.0);
        assert_relative_eq!(points[2].w, 0.0);
    }

    #[test]
    fn test_map_hits_into_replaces_previous_batch() {
        let scale = GeometryScale::new(1.0, 1.0);
        let mut points = vec![Point::new(9.0, 9.0, 9.0); 7];
        map_hits_into(&[WireHit::new(1, 0.0, 1.0)], &scale, &mut points);
        assert_eq!(points.len(), 1);
        assert_relative_eq!(points[0].a, 1.0);
    }

    #[test]
    fn test_map_hits_empty_input() {
        let scale = GeometryScale::new(1.0, 1.0);
        let points = map_hits::<WireHit>(&[], &scale);
        assert!(points.is_empty());
    }

    #[test]
    fn test_geometry_scale_validation() {
        assert!(GeometryScale::new(0.5, 0.1).validate().is_ok());
        assert!(GeometryScale::new(0.0, 0.1).validate().is_err());
        assert!(GeometryScale::new(0.5, -1.0).validate().is_err());
    }
}
