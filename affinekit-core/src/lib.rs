//! Core transformation engine for affinekit
//!
//! This crate provides the `Transformation` contract, the primitive
//! transformations (scale, translation and the two rotation derivations),
//! the lazily cached `CompositeTransformation` and the `SaveTransformation`
//! snapshot used to checkpoint and restore a composite.

pub mod any;
pub mod axis;
pub mod composite;
pub mod error;
pub mod point;
pub mod primitives;
pub mod snapshot;
pub mod traits;

pub use any::*;
pub use axis::*;
pub use composite::*;
pub use error::*;
pub use point::*;
pub use primitives::*;
pub use snapshot::*;
pub use traits::*;

/// Re-export the nalgebra types that appear in the public API
pub use nalgebra::{Matrix4, Point3, Quaternion, UnitQuaternion, Vector3};

/// Tolerance used by the `is_identity` helpers
pub const DEFAULT_EPSILON: f64 = 1e-10;
