//! Immutable snapshots of a composite's resolved matrix

use crate::error::{Error, Result};
use crate::point::Matrix4d;
use crate::traits::Transformation;
use serde::{Deserialize, Serialize};

/// A frozen matrix captured from a [`CompositeTransformation`].
///
/// Snapshots are plain values: they hold their own copy of the matrix and
/// never observe later changes to the composite they came from. Any number
/// may be taken and restored in any order.
///
/// Snapshots carry no identity. Restoring one onto a composite other than
/// the one it was taken from is allowed and simply makes that composite
/// start from the captured matrix; whether that is meaningful is up to the
/// caller.
///
/// A snapshot is itself a [`Transformation`] and can be appended to a
/// composite as an opaque step.
///
/// [`CompositeTransformation`]: crate::composite::CompositeTransformation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Matrix4d", into = "Matrix4d")]
pub struct SaveTransformation {
    matrix: Matrix4d,
}

impl SaveTransformation {
    /// Capture a matrix without validation. Used for matrices folded from
    /// affine steps, which may legitimately carry non-finite entries.
    pub(crate) fn capture(matrix: Matrix4d) -> Self {
        Self { matrix }
    }

    /// The identity snapshot
    pub fn identity() -> Self {
        Self::capture(Matrix4d::identity())
    }

    /// Build a snapshot from an external matrix, which must be affine.
    ///
    /// A bottom row holding non-finite entries is accepted: non-finite steps
    /// spread into every row of a folded matrix, and such snapshots must
    /// still load back. Text formats without NaN or infinity (JSON) cannot
    /// carry them at all.
    pub fn try_from_matrix(matrix: Matrix4d) -> Result<Self> {
        let row = [
            matrix[(3, 0)],
            matrix[(3, 1)],
            matrix[(3, 2)],
            matrix[(3, 3)],
        ];
        if row.iter().all(|v| v.is_finite()) && row != [0.0, 0.0, 0.0, 1.0] {
            return Err(Error::NotAffine { row });
        }
        Ok(Self::capture(matrix))
    }

    /// The captured matrix
    pub fn matrix(&self) -> Matrix4d {
        self.matrix
    }
}

impl Default for SaveTransformation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transformation for SaveTransformation {
    fn matrix(&self) -> Matrix4d {
        self.matrix
    }
}

impl TryFrom<Matrix4d> for SaveTransformation {
    type Error = Error;

    fn try_from(matrix: Matrix4d) -> Result<Self> {
        Self::try_from_matrix(matrix)
    }
}

impl From<SaveTransformation> for Matrix4d {
    fn from(snapshot: SaveTransformation) -> Self {
        snapshot.matrix
    }
}
