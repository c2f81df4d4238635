//! Ordered composition of transformations with a lazily cached matrix

use crate::any::AnyTransformation;
use crate::point::Matrix4d;
use crate::snapshot::SaveTransformation;
use crate::traits::Transformation;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// An ordered sequence of transformations exposed as one transformation.
///
/// Steps are applied to a point in the order they were added: the first
/// step added acts first, so the folded matrix is `Mn * ... * M2 * M1 * B`
/// where `B` is the base matrix (identity, or the last restored snapshot).
///
/// The folded matrix is cached and only recomputed on the first query after
/// an [`add`](Self::add). The cache uses interior mutability, so a composite
/// is not `Sync`; share it across threads only behind external
/// synchronization.
///
/// A composite may contain other composites. Containing itself is not
/// expressible through this API and is unsupported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeTransformation {
    base: Matrix4d,
    steps: Vec<AnyTransformation>,
    #[serde(skip)]
    cache: Cell<Option<Matrix4d>>,
}

impl CompositeTransformation {
    /// Create an empty composite, equivalent to the identity
    pub fn new() -> Self {
        Self {
            base: Matrix4d::identity(),
            steps: Vec::new(),
            cache: Cell::new(Some(Matrix4d::identity())),
        }
    }

    /// Append a transformation to the end of the sequence
    pub fn add(&mut self, transformation: impl Into<AnyTransformation>) {
        self.steps.push(transformation.into());
        self.cache.set(None);
    }

    /// Number of steps added since construction or the last restore
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if no steps have been added since construction or the last restore
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The steps added since construction or the last restore
    pub fn steps(&self) -> &[AnyTransformation] {
        &self.steps
    }

    /// Check if this is approximately the identity transformation
    pub fn is_identity(&self, epsilon: f64) -> bool {
        (self.matrix() - Matrix4d::identity()).amax() <= epsilon
    }

    /// Capture the fully resolved matrix as an independent snapshot
    pub fn save_state(&self) -> SaveTransformation {
        let snapshot = SaveTransformation::capture(self.matrix());
        debug!("saved composite state after {} steps", self.steps.len());
        snapshot
    }

    /// Reset to exactly the snapshot's matrix.
    ///
    /// All recorded steps are discarded and the snapshot becomes the new base,
    /// so later [`add`](Self::add) calls compose on top of it.
    pub fn restore_state(&mut self, snapshot: &SaveTransformation) {
        debug!("restoring composite state, dropping {} steps", self.steps.len());
        self.base = snapshot.matrix();
        self.steps.clear();
        self.cache.set(Some(self.base));
    }

    fn fold(&self) -> Matrix4d {
        self.steps
            .iter()
            .fold(self.base, |acc, step| step.matrix() * acc)
    }
}

impl Default for CompositeTransformation {
    fn default() -> Self {
        Self::new()
    }
}

impl Transformation for CompositeTransformation {
    fn matrix(&self) -> Matrix4d {
        if let Some(matrix) = self.cache.get() {
            return matrix;
        }
        trace!("recomputing composite matrix over {} steps", self.steps.len());
        let matrix = self.fold();
        self.cache.set(Some(matrix));
        matrix
    }
}

impl<T: Into<AnyTransformation>> Extend<T> for CompositeTransformation {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.steps.extend(iter.into_iter().map(Into::into));
        self.cache.set(None);
    }
}

impl<T: Into<AnyTransformation>> FromIterator<T> for CompositeTransformation {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut composite = Self::new();
        composite.extend(iter);
        composite
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::Axis;
    use crate::error::Error;
    use crate::point::Point3d;
    use crate::primitives::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_empty_composite_is_identity() {
        let composite = CompositeTransformation::new();
        assert!(composite.is_empty());
        assert_eq!(composite.matrix(), Matrix4d::identity());
        let p = Point3d::new(1.0, 2.0, 3.0);
        assert_eq!(composite.apply(&p), p);
        assert!(composite.is_identity(EPSILON));
    }

    #[test]
    fn test_scale_then_translate() {
        let mut composite = CompositeTransformation::new();
        composite.add(ScaleTransformation::uniform(2.0));
        composite.add(TranslationTransformation::new(10.0, 10.0, 10.0));
        let result = composite.apply(&Point3d::new(1.0, 1.0, 1.0));
        assert_abs_diff_eq!(result, Point3d::new(12.0, 12.0, 12.0), epsilon = EPSILON);
    }

    #[test]
    fn test_translate_then_scale() {
        let mut composite = CompositeTransformation::new();
        composite.add(TranslationTransformation::new(10.0, 10.0, 10.0));
        composite.add(ScaleTransformation::uniform(2.0));
        let result = composite.apply(&Point3d::new(1.0, 1.0, 1.0));
        assert_abs_diff_eq!(result, Point3d::new(22.0, 22.0, 22.0), epsilon = EPSILON);
    }

    #[test]
    fn test_apply_matches_matrix_exactly() {
        let composite: CompositeTransformation = vec![
            AnyTransformation::from(ScaleTransformation::new(1.5, -2.0, 0.25)),
            RotateTransformation::new(Axis::Y, 0.7).into(),
            TranslationTransformation::new(-3.0, 4.0, 5.5).into(),
            QuatRotateTransformation::new(Axis::Z, -1.1).into(),
        ]
        .into_iter()
        .collect();

        let p = Point3d::new(0.3, -7.0, 2.0);
        let expected = crate::point::transform_point(&composite.matrix(), &p);
        assert_eq!(composite.apply(&p), expected);
    }

    #[test]
    fn test_cache_invalidated_by_add() {
        let mut composite = CompositeTransformation::new();
        composite.add(TranslationTransformation::new(1.0, 0.0, 0.0));
        let first = composite.matrix();
        assert_eq!(composite.matrix(), first);

        composite.add(TranslationTransformation::new(0.0, 2.0, 0.0));
        let second = composite.matrix();
        assert_ne!(first, second);
        assert_eq!(second[(0, 3)], 1.0);
        assert_eq!(second[(1, 3)], 2.0);
    }

    #[test]
    fn test_extend_invalidates_cache() {
        let mut composite = CompositeTransformation::new();
        assert_eq!(composite.matrix(), Matrix4d::identity());
        composite.extend([
            ScaleTransformation::uniform(3.0),
            ScaleTransformation::new(1.0, 2.0, 1.0),
        ]);
        assert_eq!(composite.len(), 2);
        let result = composite.apply(&Point3d::new(1.0, 1.0, 1.0));
        assert_eq!(result, Point3d::new(3.0, 6.0, 3.0));
    }

    #[test]
    fn test_nested_composite() {
        let mut inner = CompositeTransformation::new();
        inner.add(TranslationTransformation::new(10.0, 10.0, 10.0));
        inner.add(ScaleTransformation::uniform(2.0));

        let mut outer = CompositeTransformation::new();
        outer.add(inner);
        outer.add(TranslationTransformation::new(-1.0, 0.0, 0.0));

        let result = outer.apply(&Point3d::new(1.0, 1.0, 1.0));
        assert_abs_diff_eq!(result, Point3d::new(21.0, 22.0, 22.0), epsilon = EPSILON);
    }

    #[test]
    fn test_save_restore_round_trip() {
        let mut composite = CompositeTransformation::new();
        composite.add(ScaleTransformation::new(2.0, 3.0, 4.0));
        composite.add(RotateTransformation::new(Axis::X, PI / 3.0));
        let saved_matrix = composite.matrix();
        let snapshot = composite.save_state();

        composite.add(TranslationTransformation::new(5.0, 5.0, 5.0));
        composite.add(QuatRotateTransformation::new(Axis::Z, 0.4));
        assert_ne!(composite.matrix(), saved_matrix);

        composite.restore_state(&snapshot);
        assert!(composite.is_empty());
        assert_abs_diff_eq!(composite.matrix(), saved_matrix, epsilon = EPSILON);
    }

    #[test]
    fn test_add_after_restore_composes_on_snapshot() {
        let mut composite = CompositeTransformation::new();
        composite.add(TranslationTransformation::new(10.0, 10.0, 10.0));
        let snapshot = composite.save_state();
        composite.add(RotateTransformation::new(Axis::Y, 1.0));
        composite.restore_state(&snapshot);
        composite.add(ScaleTransformation::uniform(2.0));

        let mut direct = CompositeTransformation::new();
        direct.add(TranslationTransformation::new(10.0, 10.0, 10.0));
        direct.add(ScaleTransformation::uniform(2.0));

        assert_abs_diff_eq!(composite.matrix(), direct.matrix(), epsilon = EPSILON);
        let p = Point3d::new(1.0, 1.0, 1.0);
        assert_abs_diff_eq!(
            composite.apply(&p),
            Point3d::new(22.0, 22.0, 22.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_restore_onto_other_composite() {
        let mut a = CompositeTransformation::new();
        a.add(TranslationTransformation::new(1.0, 2.0, 3.0));
        let snapshot = a.save_state();

        let mut b = CompositeTransformation::new();
        b.add(ScaleTransformation::uniform(4.0));
        b.restore_state(&snapshot);
        assert!(b.is_empty());
        assert_eq!(b.matrix(), snapshot.matrix());

        b.add(ScaleTransformation::uniform(2.0));
        assert_eq!(b.len(), 1);
        assert_eq!(b.apply(&Point3d::origin()), Point3d::new(2.0, 4.0, 6.0));
        assert_eq!(a.matrix(), snapshot.matrix());
    }

    #[test]
    fn test_snapshots_are_independent_and_reusable() {
        let mut composite = CompositeTransformation::new();
        composite.add(ScaleTransformation::uniform(2.0));
        let a = composite.save_state();
        let a_matrix = a.matrix();

        composite.add(TranslationTransformation::new(1.0, 2.0, 3.0));
        let b = composite.save_state();
        let b_matrix = b.matrix();

        composite.restore_state(&a);
        composite.add(RotateTransformation::new(Axis::Z, 0.5));
        assert_eq!(a.matrix(), a_matrix);

        composite.restore_state(&b);
        assert_eq!(composite.matrix(), b_matrix);

        composite.restore_state(&a);
        assert_eq!(composite.matrix(), a_matrix);
    }

    #[test]
    fn test_snapshot_not_affected_by_later_adds() {
        let mut composite = CompositeTransformation::new();
        composite.add(TranslationTransformation::new(1.0, 1.0, 1.0));
        let snapshot = composite.save_state();
        let before = snapshot.matrix();
        composite.add(ScaleTransformation::uniform(5.0));
        let _ = composite.matrix();
        assert_eq!(snapshot.matrix(), before);
    }

    #[test]
    fn test_snapshot_as_step() {
        let mut source = CompositeTransformation::new();
        source.add(TranslationTransformation::new(0.0, 0.0, 4.0));
        let snapshot = source.save_state();

        let mut composite = CompositeTransformation::new();
        composite.add(ScaleTransformation::uniform(3.0));
        composite.add(snapshot);
        let result = composite.apply(&Point3d::new(1.0, 1.0, 1.0));
        assert_eq!(result, Point3d::new(3.0, 3.0, 7.0));
    }

    #[test]
    fn test_non_finite_inputs_propagate() {
        let mut composite = CompositeTransformation::new();
        composite.add(TranslationTransformation::new(f64::NAN, 0.0, 0.0));
        let result = composite.apply(&Point3d::new(1.0, 2.0, 3.0));
        assert!(result.x.is_nan());

        let snapshot = composite.save_state();
        assert!(snapshot.matrix()[(0, 3)].is_nan());
    }

    #[test]
    fn test_inverse_matrix() {
        let mut composite = CompositeTransformation::new();
        composite.add(ScaleTransformation::new(2.0, 4.0, 8.0));
        composite.add(TranslationTransformation::new(1.0, 2.0, 3.0));
        let inverse = composite.inverse_matrix().unwrap();
        assert_abs_diff_eq!(inverse * composite.matrix(), Matrix4d::identity(), epsilon = EPSILON);

        composite.add(ScaleTransformation::new(1.0, 0.0, 1.0));
        assert!(matches!(
            composite.inverse_matrix(),
            Err(Error::NotInvertible { .. })
        ));
    }

    #[test]
    fn test_apply_all() {
        let mut composite = CompositeTransformation::new();
        composite.add(TranslationTransformation::new(1.0, 0.0, 0.0));
        let points = [Point3d::origin(), Point3d::new(1.0, 1.0, 1.0)];
        let moved = composite.apply_all(&points);
        assert_eq!(moved, vec![Point3d::new(1.0, 0.0, 0.0), Point3d::new(2.0, 1.0, 1.0)]);
    }

    #[test]
    fn test_serialized_composite_recomputes_matrix() {
        let mut composite = CompositeTransformation::new();
        composite.add(ScaleTransformation::uniform(2.0));
        composite.add(TranslationTransformation::new(10.0, 10.0, 10.0));
        let expected = composite.matrix();

        let json = serde_json::to_string(&composite).unwrap();
        let back: CompositeTransformation = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 2);
        assert_eq!(back.matrix(), expected);
    }
}
