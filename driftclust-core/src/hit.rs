//! Hit traits and types for wire-chamber detector data.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Core data structure for a single wire hit.
///
/// A hit is one detector readout measurement: the index of the wire
/// (position channel) that fired, and the time interval over which the
/// signal stayed above threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WireHit {
    /// Position-channel index (wire number within the plane).
    pub channel: u32,
    /// Signal start time, in detector time units.
    pub start_time: f64,
    /// Signal end time, in detector time units.
    pub end_time: f64,
}

impl WireHit {
    /// Creates a new wire hit.
    #[inline]
    pub fn new(channel: u32, start_time: f64, end_time: f64) -> Self {
        Self {
            channel,
            start_time,
            end_time,
        }
    }

    /// Midpoint of the signal time interval.
    #[inline]
    pub fn time_center(&self) -> f64 {
        (self.start_time + self.end_time) / 2.0
    }

    /// Duration of the signal time interval.
    #[inline]
    pub fn time_width(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// Trait for hit data from position-channel detectors.
///
/// This trait lets the feature mapper consume hit records from different
/// readout frontends in a uniform way.
pub trait Hit: Send + Sync {
    /// Returns the position-channel index.
    fn channel(&self) -> u32;

    /// Returns the signal start time.
    fn start_time(&self) -> f64;

    /// Returns the signal end time.
    fn end_time(&self) -> f64;
}

impl Hit for WireHit {
    #[inline]
    fn channel(&self) -> u32 {
        self.channel
    }

    #[inline]
    fn start_time(&self) -> f64 {
        self.start_time
    }

    #[inline]
    fn end_time(&self) -> f64 {
        self.end_time
    }
}
