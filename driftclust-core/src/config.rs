//! Clustering configuration and its validation layer.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Calibration of the anisotropy (width) factor.
///
/// For a pair of points the effective time-axis radius is stretched by
/// `sqrt(clamp(gain * exp(exponent * (w_i^2 + w_j^2)), 1.0, max_factor))`.
/// The defaults are tuned so that two typical minimal-width hits yield a
/// factor near 1.0. The lower clamp is fixed at 1.0: the anisotropy never
/// shrinks the neighborhood below the circular case.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WidthParams {
    /// Multiplicative gain of the exponential (default: 0.1).
    pub gain: f64,
    /// Exponent applied to the summed squared widths (default: 4.6).
    pub exponent: f64,
    /// Upper clamp on the factor (default: 6.25).
    pub max_factor: f64,
}

impl Default for WidthParams {
    fn default() -> Self {
        Self {
            gain: 0.1,
            exponent: 4.6,
            max_factor: 6.25,
        }
    }
}

impl WidthParams {
    /// Evaluates the clamped width factor for a pair of time widths.
    #[inline]
    #[must_use]
    pub fn factor(&self, w_i: f64, w_j: f64) -> f64 {
        let raw = self.gain * (self.exponent * (w_i * w_i + w_j * w_j)).exp();
        raw.clamp(1.0, self.max_factor)
    }

    /// Sets the exponential gain.
    #[must_use]
    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }

    /// Sets the exponent.
    #[must_use]
    pub fn with_exponent(mut self, exponent: f64) -> Self {
        self.exponent = exponent;
        self
    }

    /// Sets the upper clamp.
    #[must_use]
    pub fn with_max_factor(mut self, max_factor: f64) -> Self {
        self.max_factor = max_factor;
        self
    }

    /// Checks that the calibration keeps the factor well-defined.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("gain", self.gain),
            ("exponent", self.exponent),
            ("max_factor", self.max_factor),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidWidthParam { name, value });
            }
        }
        if self.max_factor < 1.0 {
            return Err(Error::Config(format!(
                "max_factor = {} is below the fixed lower clamp 1.0",
                self.max_factor
            )));
        }
        Ok(())
    }
}

/// Configuration for the density-based clustering engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClusterConfig {
    /// Neighborhood semi-axis along the position axis, in distance units.
    pub eps: f64,
    /// Neighborhood semi-axis along the time axis, in distance units,
    /// before the per-pair width stretch.
    pub eps2: f64,
    /// Minimum neighbor count for a point to seed or grow a cluster.
    /// Zero means every point trivially satisfies the density test.
    pub min_pts: usize,
    /// Anisotropy calibration for the time axis.
    pub width: WidthParams,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            eps: 1.0,
            eps2: 1.5,
            min_pts: 2,
            width: WidthParams::default(),
        }
    }
}

impl ClusterConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the position-axis radius.
    #[must_use]
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Sets the time-axis radius.
    #[must_use]
    pub fn with_eps2(mut self, eps2: f64) -> Self {
        self.eps2 = eps2;
        self
    }

    /// Sets the minimum neighbor count.
    #[must_use]
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Sets the width calibration.
    #[must_use]
    pub fn with_width(mut self, width: WidthParams) -> Self {
        self.width = width;
        self
    }

    /// Checks that the thresholds define a non-degenerate neighborhood.
    ///
    /// Non-positive radii would fail every neighbor test and produce an
    /// all-noise run; callers should reject them here rather than let the
    /// engine silently grind through a useless pass.
    pub fn validate(&self) -> Result<()> {
        if !self.eps.is_finite() || self.eps <= 0.0 {
            return Err(Error::InvalidRadius {
                name: "eps",
                value: self.eps,
            });
        }
        if !self.eps2.is_finite() || self.eps2 <= 0.0 {
            return Err(Error::InvalidRadius {
                name: "eps2",
                value: self.eps2,
            });
        }
        self.width.validate()
    }
}
