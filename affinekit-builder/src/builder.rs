//! Fluent builder for composite transformations

use affinekit_core::{
    AnyTransformation, Axis, CompositeTransformation, Matrix4d, Point3d,
    QuatRotateTransformation, Result, RotationMode, SaveTransformation, ScaleTransformation,
    Transformation, TranslationTransformation,
};
use log::debug;

/// Builds one [`CompositeTransformation`] through chained calls.
///
/// Methods take `&mut self` and return it, so calls chain on a builder held
/// in a local. [`build`](Self::build) hands out an independent copy.
#[derive(Debug, Clone, Default)]
pub struct AffineBuilder {
    composite: CompositeTransformation,
    rotation_mode: RotationMode,
}

impl AffineBuilder {
    /// Create an identity builder using matrix-derived rotations
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an identity builder whose `rotate_*` calls use `mode`
    pub fn with_rotation_mode(mode: RotationMode) -> Self {
        debug!("creating affine builder with {:?} rotations", mode);
        Self {
            composite: CompositeTransformation::new(),
            rotation_mode: mode,
        }
    }

    pub fn rotation_mode(&self) -> RotationMode {
        self.rotation_mode
    }

    /// Append any transformation, including another composite
    pub fn then(&mut self, transformation: impl Into<AnyTransformation>) -> &mut Self {
        self.composite.add(transformation);
        self
    }

    pub fn scale_x(&mut self, sx: f64) -> &mut Self {
        self.scale(sx, 1.0, 1.0)
    }

    pub fn scale_y(&mut self, sy: f64) -> &mut Self {
        self.scale(1.0, sy, 1.0)
    }

    pub fn scale_z(&mut self, sz: f64) -> &mut Self {
        self.scale(1.0, 1.0, sz)
    }

    pub fn scale_uniform(&mut self, s: f64) -> &mut Self {
        self.then(ScaleTransformation::uniform(s))
    }

    pub fn scale(&mut self, sx: f64, sy: f64, sz: f64) -> &mut Self {
        self.then(ScaleTransformation::new(sx, sy, sz))
    }

    /// Rotate about X by `angle` radians using the configured mode
    pub fn rotate_x(&mut self, angle: f64) -> &mut Self {
        self.rotate(Axis::X, angle)
    }

    /// Rotate about Y by `angle` radians using the configured mode
    pub fn rotate_y(&mut self, angle: f64) -> &mut Self {
        self.rotate(Axis::Y, angle)
    }

    /// Rotate about Z by `angle` radians using the configured mode
    pub fn rotate_z(&mut self, angle: f64) -> &mut Self {
        self.rotate(Axis::Z, angle)
    }

    pub fn rotate_x_quat(&mut self, angle: f64) -> &mut Self {
        self.then(QuatRotateTransformation::new(Axis::X, angle))
    }

    pub fn rotate_y_quat(&mut self, angle: f64) -> &mut Self {
        self.then(QuatRotateTransformation::new(Axis::Y, angle))
    }

    pub fn rotate_z_quat(&mut self, angle: f64) -> &mut Self {
        self.then(QuatRotateTransformation::new(Axis::Z, angle))
    }

    fn rotate(&mut self, axis: Axis, angle: f64) -> &mut Self {
        let mode = self.rotation_mode;
        self.then(AnyTransformation::rotation(axis, angle, mode))
    }

    pub fn translate_x(&mut self, tx: f64) -> &mut Self {
        self.translate(tx, 0.0, 0.0)
    }

    pub fn translate_y(&mut self, ty: f64) -> &mut Self {
        self.translate(0.0, ty, 0.0)
    }

    pub fn translate_z(&mut self, tz: f64) -> &mut Self {
        self.translate(0.0, 0.0, tz)
    }

    pub fn translate(&mut self, tx: f64, ty: f64, tz: f64) -> &mut Self {
        self.then(TranslationTransformation::new(tx, ty, tz))
    }

    /// An independent copy of the composite built so far
    pub fn build(&self) -> CompositeTransformation {
        self.composite.clone()
    }

    /// Consume the builder and return its composite
    pub fn into_composite(self) -> CompositeTransformation {
        self.composite
    }

    pub fn matrix(&self) -> Matrix4d {
        self.composite.matrix()
    }

    /// Apply everything added so far to a point
    pub fn transform(&self, point: &Point3d) -> Point3d {
        self.composite.apply(point)
    }

    /// Map a point back through the inverse of the current transformation
    pub fn inverse_transform(&self, point: &Point3d) -> Result<Point3d> {
        let inverse = self.composite.inverse_matrix()?;
        Ok(affinekit_core::transform_point(&inverse, point))
    }

    pub fn save_state(&self) -> SaveTransformation {
        self.composite.save_state()
    }

    /// Return to a previously saved state; see
    /// [`CompositeTransformation::restore_state`]
    pub fn restore_state(&mut self, snapshot: &SaveTransformation) -> &mut Self {
        self.composite.restore_state(snapshot);
        self
    }

    /// Discard everything and start again from the identity
    pub fn reset(&mut self) -> &mut Self {
        self.composite = CompositeTransformation::new();
        self
    }
}
