//! Coordinate axes and rotation derivation modes

use crate::point::Vector3d;
use nalgebra::Unit;
use serde::{Deserialize, Serialize};

/// A coordinate axis a rotation can be taken about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes in order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The positive unit vector along this axis
    pub fn unit(self) -> Unit<Vector3d> {
        match self {
            Axis::X => Vector3d::x_axis(),
            Axis::Y => Vector3d::y_axis(),
            Axis::Z => Vector3d::z_axis(),
        }
    }

    /// The signed axis a positive angle turns about.
    ///
    /// Rotations about X and Z are clockwise when viewed from the positive
    /// axis, rotations about Y counter-clockwise. Expressed as a right-handed
    /// rotation this is a turn about `-X`, `+Y` and `-Z` respectively.
    pub fn rotation_axis(self) -> Unit<Vector3d> {
        match self {
            Axis::X => -Vector3d::x_axis(),
            Axis::Y => Vector3d::y_axis(),
            Axis::Z => -Vector3d::z_axis(),
        }
    }
}

/// How a rotation matrix is derived
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationMode {
    /// Place `cos`/`sin` of the angle directly into the matrix
    #[default]
    Matrix,
    /// Build a unit quaternion from the half angle and convert it
    Quaternion,
}
