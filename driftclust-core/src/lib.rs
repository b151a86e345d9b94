//! driftclust-core: Core types for wire-chamber hit clustering.
//!
//! This crate provides the foundational pieces of the clustering engine:
//! hit records, the feature mapping into a common physical scale, and the
//! clustering configuration with its validation layer.

pub mod config;
pub mod error;
pub mod feature;
pub mod hit;

pub use config::{ClusterConfig, WidthParams};
pub use error::{Error, Result};
pub use feature::{map_hits, map_hits_into, GeometryScale, Point};
pub use hit::{Hit, WireHit};
