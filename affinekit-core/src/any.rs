//! Closed sum type over every transformation a composite can hold

use crate::axis::{Axis, RotationMode};
use crate::composite::CompositeTransformation;
use crate::point::Matrix4d;
use crate::primitives::*;
use crate::snapshot::SaveTransformation;
use crate::traits::Transformation;
use serde::{Deserialize, Serialize};

/// One step of a [`CompositeTransformation`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnyTransformation {
    Scale(ScaleTransformation),
    Translation(TranslationTransformation),
    Rotate(RotateTransformation),
    QuatRotate(QuatRotateTransformation),
    Frozen(SaveTransformation),
    Composite(CompositeTransformation),
}

impl AnyTransformation {
    /// Rotation about `axis`, derived the way `mode` selects
    pub fn rotation(axis: Axis, angle: f64, mode: RotationMode) -> Self {
        match mode {
            RotationMode::Matrix => RotateTransformation::new(axis, angle).into(),
            RotationMode::Quaternion => QuatRotateTransformation::new(axis, angle).into(),
        }
    }
}

impl Transformation for AnyTransformation {
    fn matrix(&self) -> Matrix4d {
        match self {
            AnyTransformation::Scale(t) => t.matrix(),
            AnyTransformation::Translation(t) => t.matrix(),
            AnyTransformation::Rotate(t) => t.matrix(),
            AnyTransformation::QuatRotate(t) => t.matrix(),
            AnyTransformation::Frozen(t) => t.matrix(),
            AnyTransformation::Composite(t) => t.matrix(),
        }
    }
}

impl From<ScaleTransformation> for AnyTransformation {
    fn from(t: ScaleTransformation) -> Self {
        AnyTransformation::Scale(t)
    }
}

impl From<TranslationTransformation> for AnyTransformation {
    fn from(t: TranslationTransformation) -> Self {
        AnyTransformation::Translation(t)
    }
}

impl From<RotateTransformation> for AnyTransformation {
    fn from(t: RotateTransformation) -> Self {
        AnyTransformation::Rotate(t)
    }
}

impl From<QuatRotateTransformation> for AnyTransformation {
    fn from(t: QuatRotateTransformation) -> Self {
        AnyTransformation::QuatRotate(t)
    }
}

impl From<SaveTransformation> for AnyTransformation {
    fn from(t: SaveTransformation) -> Self {
        AnyTransformation::Frozen(t)
    }
}

impl From<CompositeTransformation> for AnyTransformation {
    fn from(t: CompositeTransformation) -> Self {
        AnyTransformation::Composite(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point3d;

    #[test]
    fn test_rotation_selects_variant() {
        assert!(matches!(
            AnyTransformation::rotation(Axis::X, 1.0, RotationMode::Matrix),
            AnyTransformation::Rotate(_)
        ));
        assert!(matches!(
            AnyTransformation::rotation(Axis::X, 1.0, RotationMode::Quaternion),
            AnyTransformation::QuatRotate(_)
        ));
    }

    #[test]
    fn test_delegates_to_inner_matrix() {
        let scale = ScaleTransformation::new(2.0, 3.0, 4.0);
        let any: AnyTransformation = scale.into();
        assert_eq!(any.matrix(), scale.matrix());

        let p = Point3d::new(1.0, 1.0, 1.0);
        assert_eq!(any.apply(&p), scale.apply(&p));
    }
}
