//! The transformation contract

use crate::error::{Error, Result};
use crate::point::{transform_point, Matrix4d, Point3d};

/// Anything that can produce a 4x4 homogeneous matrix and apply itself to
/// a point.
///
/// `matrix` must be a pure function of the current state. `apply` is always
/// `transform_point(&self.matrix(), point)`; implementors should not
/// override it, since composites rely on the two agreeing exactly.
pub trait Transformation {
    /// The homogeneous matrix representing this transformation
    fn matrix(&self) -> Matrix4d;

    /// Transform a point, including the homogeneous divide
    fn apply(&self, point: &Point3d) -> Point3d {
        transform_point(&self.matrix(), point)
    }

    /// Transform a batch of points with a single matrix evaluation
    fn apply_all(&self, points: &[Point3d]) -> Vec<Point3d> {
        let matrix = self.matrix();
        points.iter().map(|p| transform_point(&matrix, p)).collect()
    }

    /// The inverse of `matrix`, failing when it is singular
    fn inverse_matrix(&self) -> Result<Matrix4d> {
        let matrix = self.matrix();
        matrix.try_inverse().ok_or_else(|| Error::NotInvertible {
            determinant: matrix.determinant(),
        })
    }
}

impl<T: Transformation + ?Sized> Transformation for &T {
    fn matrix(&self) -> Matrix4d {
        (**self).matrix()
    }
}

impl<T: Transformation + ?Sized> Transformation for Box<T> {
    fn matrix(&self) -> Matrix4d {
        (**self).matrix()
    }
}
