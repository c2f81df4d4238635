//! Point and matrix types and the homogeneous point transform

use nalgebra::{Matrix4, Point3, Vector3};

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// A 4x4 homogeneous matrix with double precision entries
pub type Matrix4d = Matrix4<f64>;

/// Transform a point by a homogeneous matrix.
///
/// The point is lifted to `w = 1`, multiplied, and divided by the resulting
/// `w`. A zero or non-finite `w` is not guarded against.
pub fn transform_point(matrix: &Matrix4d, point: &Point3d) -> Point3d {
    let h = matrix * point.to_homogeneous();
    Point3d::new(h.x / h.w, h.y / h.w, h.z / h.w)
}
