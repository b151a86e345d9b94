//! Error types for driftclust-core.

use thiserror::Error;

/// Result type alias for driftclust operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for driftclust operations.
///
/// The clustering engine itself never fails; these errors come out of the
/// configuration layer, which rejects thresholds that would make every
/// neighbor test degenerate.
#[derive(Error, Debug)]
pub enum Error {
    /// A neighborhood radius that must be strictly positive is not.
    #[error("invalid neighborhood radius {name} = {value}; must be > 0")]
    InvalidRadius {
        /// Parameter name (`eps` or `eps2`).
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A width-factor calibration parameter is out of range.
    #[error("invalid width parameter {name} = {value}; must be > 0")]
    InvalidWidthParam {
        /// Parameter name (`gain`, `exponent`, or `max_factor`).
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A geometry scale constant that must be strictly positive is not.
    #[error("invalid geometry scale {name} = {value}; must be > 0")]
    InvalidScale {
        /// Parameter name (`channel_pitch` or `time_scale`).
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Generic configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
