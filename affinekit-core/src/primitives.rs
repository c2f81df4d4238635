//! Primitive transformations: scale, translation and rotation
//!
//! Each primitive is a plain value; its matrix is rebuilt from the stored
//! parameters on every call.

use crate::axis::Axis;
use crate::point::{Matrix4d, Vector3d};
use crate::traits::Transformation;
use nalgebra::{Quaternion, UnitQuaternion};
use serde::{Deserialize, Serialize};

/// Non-uniform scaling about the origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleTransformation {
    pub factors: Vector3d,
}

impl ScaleTransformation {
    pub fn new(sx: f64, sy: f64, sz: f64) -> Self {
        Self {
            factors: Vector3d::new(sx, sy, sz),
        }
    }

    /// Scale all three axes by the same factor
    pub fn uniform(s: f64) -> Self {
        Self::new(s, s, s)
    }
}

impl Transformation for ScaleTransformation {
    fn matrix(&self) -> Matrix4d {
        Matrix4d::new_nonuniform_scaling(&self.factors)
    }
}

/// Translation by a fixed offset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TranslationTransformation {
    pub offset: Vector3d,
}

impl TranslationTransformation {
    pub fn new(tx: f64, ty: f64, tz: f64) -> Self {
        Self {
            offset: Vector3d::new(tx, ty, tz),
        }
    }
}

impl Transformation for TranslationTransformation {
    fn matrix(&self) -> Matrix4d {
        Matrix4d::new_translation(&self.offset)
    }
}

/// Rotation about a coordinate axis with `cos`/`sin` placed directly.
///
/// Positive angles turn X and Z clockwise and Y counter-clockwise when
/// viewed from the positive axis; see [`Axis::rotation_axis`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotateTransformation {
    pub axis: Axis,
    /// Angle in radians
    pub angle: f64,
}

impl RotateTransformation {
    pub fn new(axis: Axis, angle: f64) -> Self {
        Self { axis, angle }
    }
}

impl Transformation for RotateTransformation {
    #[rustfmt::skip]
    fn matrix(&self) -> Matrix4d {
        let (s, c) = self.angle.sin_cos();
        match self.axis {
            Axis::X => Matrix4d::new(
                1.0, 0.0, 0.0, 0.0,
                0.0,   c,   s, 0.0,
                0.0,  -s,   c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ),
            Axis::Y => Matrix4d::new(
                  c, 0.0,   s, 0.0,
                0.0, 1.0, 0.0, 0.0,
                 -s, 0.0,   c, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ),
            Axis::Z => Matrix4d::new(
                  c,   s, 0.0, 0.0,
                 -s,   c, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ),
        }
    }
}

/// Rotation about a coordinate axis derived from a unit quaternion.
///
/// Produces the same rotation as [`RotateTransformation`] for the same axis
/// and angle, up to rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuatRotateTransformation {
    pub axis: Axis,
    /// Angle in radians
    pub angle: f64,
}

impl QuatRotateTransformation {
    pub fn new(axis: Axis, angle: f64) -> Self {
        Self { axis, angle }
    }

    /// The unit quaternion `(cos θ/2, n·sin θ/2)` about the signed axis `n`
    pub fn quaternion(&self) -> UnitQuaternion<f64> {
        let (s, c) = (self.angle * 0.5).sin_cos();
        let n = self.axis.rotation_axis();
        UnitQuaternion::new_unchecked(Quaternion::new(c, n.x * s, n.y * s, n.z * s))
    }
}

impl Transformation for QuatRotateTransformation {
    fn matrix(&self) -> Matrix4d {
        self.quaternion().to_homogeneous()
    }
}
